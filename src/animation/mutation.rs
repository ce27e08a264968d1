use crate::{
    animation::anim::Animation,
    foundation::color::Color,
    foundation::core::{Point, Vec2},
    foundation::error::{KinemaError, KinemaResult},
    geometry::object::{GeometricObject, ObjectId},
    scene::graph::SceneGraph,
};

/// One recorded end-state delta.
///
/// Replaying a list of mutations on a copy of the current state yields the end state of a
/// property animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    /// Fill color and opacity.
    SetFill {
        /// Fill color.
        color: Color,
        /// Fill opacity.
        opacity: f64,
    },
    /// Fill opacity only.
    SetFillOpacity(f64),
    /// Stroke color and width.
    SetStroke {
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// Stroke opacity only.
    SetStrokeOpacity(f64),
    /// Whole-object opacity.
    SetOpacity(f64),
    /// Translation.
    Shift(Vec2),
    /// Move the bounds center.
    MoveTo(Point),
    /// Rotation around the local origin.
    Rotate(f64),
    /// Rotation around a pivot.
    RotateAbout {
        /// Angle in radians.
        rad: f64,
        /// Pivot point.
        pivot: Point,
    },
    /// Uniform scale around the local origin.
    Scale(f64),
    /// Placement relative to another on-screen object.
    NextTo {
        /// Reference object; must be on screen.
        other: ObjectId,
        /// Direction from the reference object.
        direction: Vec2,
        /// Gap between the two bounding boxes.
        gap: f64,
    },
    /// Open/close the outline. Discrete: switches at the end of the animation.
    SetClosed(bool),
}

impl Mutation {
    /// Object that must be on screen for this mutation to resolve.
    pub fn reference(&self) -> Option<ObjectId> {
        match self {
            Self::NextTo { other, .. } => Some(*other),
            _ => None,
        }
    }

    /// Apply this delta to `obj`, resolving references against `scene`.
    pub fn apply(&self, obj: &mut GeometricObject, scene: &SceneGraph) -> KinemaResult<()> {
        match self {
            Self::SetFill { color, opacity } => {
                obj.set_fill(*color, *opacity);
            }
            Self::SetFillOpacity(o) => {
                obj.set_fill_opacity(*o);
            }
            Self::SetStroke { color, width } => {
                obj.set_stroke(*color, *width);
            }
            Self::SetStrokeOpacity(o) => {
                obj.set_stroke_opacity(*o);
            }
            Self::SetOpacity(o) => {
                obj.set_opacity(*o);
            }
            Self::Shift(v) => {
                obj.shift(*v);
            }
            Self::MoveTo(p) => {
                obj.move_to(*p);
            }
            Self::Rotate(rad) => {
                obj.rotate(*rad);
            }
            Self::RotateAbout { rad, pivot } => {
                obj.rotate_about(*rad, *pivot);
            }
            Self::Scale(f) => {
                obj.scale(*f);
            }
            Self::NextTo {
                other,
                direction,
                gap,
            } => {
                let other = scene.get(*other).ok_or_else(|| {
                    KinemaError::animation_target(format!(
                        "next_to reference {other} is not in the scene"
                    ))
                })?;
                obj.place_relative_to(other, *direction, *gap)?;
            }
            Self::SetClosed(closed) => {
                obj.set_closed(*closed);
            }
        }
        Ok(())
    }
}

/// Builder recording deltas for a property animation, e.g.
/// `animate(&square).rotate(PI / 4.0).set_fill(PINK, 0.5)`.
#[derive(Clone, Debug)]
pub struct Animate {
    target: ObjectId,
    mutations: Vec<Mutation>,
}

/// Start recording deltas for `target`.
pub fn animate(target: impl Into<ObjectId>) -> Animate {
    Animate::new(target)
}

impl Animate {
    /// Start recording deltas for `target`.
    pub fn new(target: impl Into<ObjectId>) -> Self {
        Self {
            target: target.into(),
            mutations: Vec::new(),
        }
    }

    fn push(mut self, m: Mutation) -> Self {
        self.mutations.push(m);
        self
    }

    /// Record [`Mutation::SetFill`].
    pub fn set_fill(self, color: Color, opacity: f64) -> Self {
        self.push(Mutation::SetFill { color, opacity })
    }

    /// Record [`Mutation::SetFillOpacity`].
    pub fn set_fill_opacity(self, opacity: f64) -> Self {
        self.push(Mutation::SetFillOpacity(opacity))
    }

    /// Record [`Mutation::SetStroke`].
    pub fn set_stroke(self, color: Color, width: f64) -> Self {
        self.push(Mutation::SetStroke { color, width })
    }

    /// Record [`Mutation::SetStrokeOpacity`].
    pub fn set_stroke_opacity(self, opacity: f64) -> Self {
        self.push(Mutation::SetStrokeOpacity(opacity))
    }

    /// Record [`Mutation::SetOpacity`].
    pub fn set_opacity(self, opacity: f64) -> Self {
        self.push(Mutation::SetOpacity(opacity))
    }

    /// Record [`Mutation::Shift`].
    pub fn shift(self, delta: Vec2) -> Self {
        self.push(Mutation::Shift(delta))
    }

    /// Record [`Mutation::MoveTo`].
    pub fn move_to(self, target: Point) -> Self {
        self.push(Mutation::MoveTo(target))
    }

    /// Record [`Mutation::Rotate`].
    pub fn rotate(self, rad: f64) -> Self {
        self.push(Mutation::Rotate(rad))
    }

    /// Record [`Mutation::RotateAbout`].
    pub fn rotate_about(self, rad: f64, pivot: Point) -> Self {
        self.push(Mutation::RotateAbout { rad, pivot })
    }

    /// Record [`Mutation::Scale`].
    pub fn scale(self, factor: f64) -> Self {
        self.push(Mutation::Scale(factor))
    }

    /// Record [`Mutation::NextTo`].
    pub fn next_to(self, other: impl Into<ObjectId>, direction: Vec2, gap: f64) -> Self {
        self.push(Mutation::NextTo {
            other: other.into(),
            direction,
            gap,
        })
    }

    /// Record [`Mutation::SetClosed`].
    pub fn set_closed(self, closed: bool) -> Self {
        self.push(Mutation::SetClosed(closed))
    }

    /// Finish recording.
    pub fn build(self) -> Animation {
        Animation::property(self.target, self.mutations)
    }
}

impl From<Animate> for Animation {
    fn from(a: Animate) -> Self {
        a.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/mutation.rs"]
mod tests;
