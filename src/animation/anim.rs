use crate::{
    animation::ease::Ease,
    animation::mutation::Mutation,
    foundation::error::{KinemaError, KinemaResult},
    geometry::object::{GeometricObject, ObjectId},
    geometry::points,
    scene::graph::SceneGraph,
};

/// What an animation does, before it is resolved against a scene.
#[derive(Clone, Debug)]
pub enum AnimationKind {
    /// Draw the object in along its outline; adds it to the scene at start.
    Create(GeometricObject),
    /// Fade the object in from transparent; adds it to the scene at start.
    FadeIn(GeometricObject),
    /// Fade an on-screen object to transparent, then remove it.
    FadeOut(ObjectId),
    /// Morph `source` into the shape and style of `target`. `target` is never added.
    Transform {
        /// On-screen object that is mutated.
        source: ObjectId,
        /// Shape and style to morph into.
        target: GeometricObject,
    },
    /// Morph like [`AnimationKind::Transform`], then swap `old` for `new` in the scene.
    ReplacementTransform {
        /// On-screen object that is morphed and then removed.
        old: ObjectId,
        /// Object that takes `old`'s place at the end.
        new: GeometricObject,
    },
    /// Interpolate from the current state to the state produced by `mutations`.
    PropertyAnimate {
        /// On-screen object that is mutated.
        target: ObjectId,
        /// Recorded end-state deltas.
        mutations: Vec<Mutation>,
    },
}

/// An animation request with optional per-animation timing.
///
/// When several animations passed to one `play` call write the same object, the result is
/// last-write-wins in submission order and otherwise unspecified. Callers must avoid it.
#[derive(Clone, Debug)]
pub struct Animation {
    /// The state law.
    pub kind: AnimationKind,
    /// Duration in seconds; falls back to the scene default.
    pub run_time: Option<f64>,
    /// Rate function; falls back to the play config, then to the scene default.
    pub rate_func: Option<Ease>,
}

impl Animation {
    fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            run_time: None,
            rate_func: None,
        }
    }

    /// Draw-in reveal of `obj`.
    pub fn create(obj: GeometricObject) -> Self {
        Self::new(AnimationKind::Create(obj))
    }

    /// Fade-in of `obj`.
    pub fn fade_in(obj: GeometricObject) -> Self {
        Self::new(AnimationKind::FadeIn(obj))
    }

    /// Fade-out and removal of an on-screen object.
    pub fn fade_out(obj: impl Into<ObjectId>) -> Self {
        Self::new(AnimationKind::FadeOut(obj.into()))
    }

    /// Morph `source` into `target`, keeping `source`'s identity.
    pub fn transform(source: impl Into<ObjectId>, target: GeometricObject) -> Self {
        Self::new(AnimationKind::Transform {
            source: source.into(),
            target,
        })
    }

    /// Morph `old` into `new`, then put `new` in its place.
    pub fn replacement_transform(old: impl Into<ObjectId>, new: GeometricObject) -> Self {
        Self::new(AnimationKind::ReplacementTransform {
            old: old.into(),
            new,
        })
    }

    /// Property animation from explicit deltas. See also [`crate::animate`].
    pub fn property(target: impl Into<ObjectId>, mutations: Vec<Mutation>) -> Self {
        Self::new(AnimationKind::PropertyAnimate {
            target: target.into(),
            mutations,
        })
    }

    /// Override the duration.
    pub fn with_run_time(mut self, secs: f64) -> Self {
        self.run_time = Some(secs);
        self
    }

    /// Override the rate function.
    pub fn with_rate(mut self, ease: Ease) -> Self {
        self.rate_func = Some(ease);
        self
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self.kind {
            AnimationKind::Create(_) => "Create",
            AnimationKind::FadeIn(_) => "FadeIn",
            AnimationKind::FadeOut(_) => "FadeOut",
            AnimationKind::Transform { .. } => "Transform",
            AnimationKind::ReplacementTransform { .. } => "ReplacementTransform",
            AnimationKind::PropertyAnimate { .. } => "PropertyAnimate",
        }
    }

    /// Identity of the object whose state this animation writes.
    pub fn target(&self) -> ObjectId {
        match &self.kind {
            AnimationKind::Create(obj) | AnimationKind::FadeIn(obj) => obj.id(),
            AnimationKind::FadeOut(id) => *id,
            AnimationKind::Transform { source, .. } => *source,
            AnimationKind::ReplacementTransform { old, .. } => *old,
            AnimationKind::PropertyAnimate { target, .. } => *target,
        }
    }

    /// Check that every object this animation needs is consistently known to `scene`.
    pub fn validate(&self, scene: &SceneGraph) -> KinemaResult<()> {
        if let Some(rt) = self.run_time
            && !(rt.is_finite() && rt > 0.0)
        {
            return Err(KinemaError::validation(format!(
                "{} run_time must be finite and > 0",
                self.name()
            )));
        }

        match &self.kind {
            AnimationKind::Create(_) | AnimationKind::FadeIn(_) => Ok(()),
            AnimationKind::FadeOut(id) => require_present(scene, *id, self.name()),
            AnimationKind::Transform { source, .. } => {
                require_present(scene, *source, self.name())
            }
            AnimationKind::ReplacementTransform { old, new } => {
                require_present(scene, *old, self.name())?;
                if new.id() != *old && scene.contains(new.id()) {
                    return Err(KinemaError::animation_target(format!(
                        "ReplacementTransform replacement {} is already in the scene",
                        new.id()
                    )));
                }
                Ok(())
            }
            AnimationKind::PropertyAnimate { target, mutations } => {
                require_present(scene, *target, self.name())?;
                for m in mutations {
                    if let Some(other) = m.reference() {
                        require_present(scene, other, self.name())?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Resolve against the current scene into a pure `state(t)` law.
    ///
    /// Reads `scene` only; nothing is mutated until the law is started.
    pub fn prepare(&self, scene: &SceneGraph) -> KinemaResult<PreparedAnimation> {
        self.validate(scene)?;
        let current = |id: ObjectId| {
            scene.get(id).cloned().ok_or_else(|| {
                KinemaError::animation_target(format!("{} is not in the scene", id))
            })
        };

        let (law, on_start, on_finish) = match &self.kind {
            AnimationKind::Create(obj) => {
                let mut start = obj.clone();
                start.set_reveal(0.0);
                let mut end = obj.clone();
                end.set_reveal(1.0);
                (ObjectLaw { start, end }, OnStart::Add, OnFinish::Keep)
            }
            AnimationKind::FadeIn(obj) => {
                let mut start = obj.clone();
                start.set_opacity(0.0);
                let law = ObjectLaw {
                    start,
                    end: obj.clone(),
                };
                (law, OnStart::Add, OnFinish::Keep)
            }
            AnimationKind::FadeOut(id) => {
                let start = current(*id)?;
                let mut end = start.clone();
                end.set_opacity(0.0);
                (
                    ObjectLaw { start, end },
                    OnStart::Write,
                    OnFinish::Remove(*id),
                )
            }
            AnimationKind::Transform { source, target } => {
                let law = morph_law(current(*source)?, target)?;
                (law, OnStart::Write, OnFinish::Keep)
            }
            AnimationKind::ReplacementTransform { old, new } => {
                let law = morph_law(current(*old)?, new)?;
                let finish = OnFinish::Replace {
                    old: *old,
                    new: new.clone(),
                };
                (law, OnStart::Write, finish)
            }
            AnimationKind::PropertyAnimate { target, mutations } => {
                let start = current(*target)?;
                let mut end = start.clone();
                for m in mutations {
                    m.apply(&mut end, scene)?;
                }
                (ObjectLaw { start, end }, OnStart::Write, OnFinish::Keep)
            }
        };

        Ok(PreparedAnimation {
            name: self.name(),
            law,
            on_start,
            on_finish,
        })
    }
}

fn require_present(scene: &SceneGraph, id: ObjectId, what: &str) -> KinemaResult<()> {
    if scene.contains(id) {
        Ok(())
    } else {
        Err(KinemaError::animation_target(format!(
            "{what} target {id} is not in the scene"
        )))
    }
}

/// Shape morph from `source` to `target`, expressed in `source`'s local space.
///
/// `source` keeps its transform throughout; only its base points, style and flags move.
/// Both point sets are aligned up front so sampling cannot fail.
fn morph_law(source: GeometricObject, target: &GeometricObject) -> KinemaResult<ObjectLaw> {
    let to_local = source.transform().inverse().ok_or_else(|| {
        KinemaError::geometry(format!(
            "object {} has a zero scale and cannot be morphed",
            source.id()
        ))
    })?;
    let target_local: Vec<_> = target
        .rendered_points()
        .into_iter()
        .map(|p| to_local.apply(p))
        .collect();
    let (from_pts, to_pts) = points::align_point_sets(
        source.points(),
        source.is_closed(),
        &target_local,
        target.is_closed(),
    )?;

    let mut start = source.clone();
    start.set_points(from_pts);
    let mut end = source;
    end.set_points(to_pts);
    end.set_closed(target.is_closed())
        .set_style(*target.style())
        .set_opacity(target.opacity())
        .set_reveal(target.reveal());
    Ok(ObjectLaw { start, end })
}

/// Interpolation law between two states of one object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLaw {
    start: GeometricObject,
    end: GeometricObject,
}

impl ObjectLaw {
    /// State at `t = 0`.
    pub fn start(&self) -> &GeometricObject {
        &self.start
    }

    /// State at `t = 1`.
    pub fn end(&self) -> &GeometricObject {
        &self.end
    }

    /// State at progress `t`, clamped to `[0, 1]`.
    pub fn state(&self, t: f64) -> GeometricObject {
        GeometricObject::interpolate(&self.start, &self.end, t.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OnStart {
    Add,
    Write,
}

#[derive(Clone, Debug, PartialEq)]
enum OnFinish {
    Keep,
    Remove(ObjectId),
    Replace { old: ObjectId, new: GeometricObject },
}

/// An animation resolved against a scene, ready to be stepped.
#[derive(Clone, Debug)]
pub struct PreparedAnimation {
    name: &'static str,
    law: ObjectLaw,
    on_start: OnStart,
    on_finish: OnFinish,
}

impl PreparedAnimation {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Identity of the object being written.
    pub fn target(&self) -> ObjectId {
        self.law.start.id()
    }

    /// The underlying interpolation law.
    pub fn law(&self) -> &ObjectLaw {
        &self.law
    }

    /// State at progress `t`.
    pub fn state(&self, t: f64) -> GeometricObject {
        self.law.state(t)
    }

    pub(crate) fn begin(&self, scene: &mut SceneGraph) {
        match self.on_start {
            OnStart::Add => scene.upsert(self.law.start.clone()),
            OnStart::Write => {
                scene.write_state(self.law.start.clone());
            }
        }
    }

    pub(crate) fn apply(&self, scene: &mut SceneGraph, t: f64) {
        if !scene.write_state(self.state(t)) {
            tracing::trace!(
                animation = self.name,
                target = %self.target(),
                "target left the scene mid-call; sample dropped"
            );
        }
    }

    pub(crate) fn finish(&self, scene: &mut SceneGraph) {
        match &self.on_finish {
            OnFinish::Keep => {}
            OnFinish::Remove(id) => {
                scene.remove([*id]);
            }
            OnFinish::Replace { old, new } => scene.replace(*old, new.clone()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
