use crate::{
    foundation::color::Color,
    foundation::core::{BezPath, Point},
    geometry::object::{GeometricObject, ObjectId},
    geometry::points,
};

/// Ordered set of objects currently on screen. Order is paint order, back to front.
///
/// Membership is exactly the set of objects added and not yet removed; identifiers never
/// repeat.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    objects: Vec<GeometricObject>,
}

impl SceneGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append objects in order. Already-present identifiers are skipped untouched.
    ///
    /// Returns how many objects were actually added.
    pub fn add(&mut self, objects: impl IntoIterator<Item = GeometricObject>) -> usize {
        let mut added = 0;
        for obj in objects {
            if self.contains(obj.id()) {
                continue;
            }
            self.objects.push(obj);
            added += 1;
        }
        added
    }

    /// Remove objects by identity. Absent identifiers are ignored.
    ///
    /// Returns how many objects were actually removed.
    pub fn remove(&mut self, ids: impl IntoIterator<Item = ObjectId>) -> usize {
        let mut removed = 0;
        for id in ids {
            if let Some(idx) = self.position(id) {
                self.objects.remove(idx);
                removed += 1;
            }
        }
        removed
    }

    /// Drop every object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Whether `id` is on screen.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.position(id).is_some()
    }

    /// Paint-order index of `id`.
    pub fn position(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    /// Current state of `id`.
    pub fn get(&self, id: ObjectId) -> Option<&GeometricObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Number of objects on screen.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Identifiers in paint order.
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(GeometricObject::id).collect()
    }

    /// Objects in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &GeometricObject> {
        self.objects.iter()
    }

    /// Overwrite the stored state of `state.id()`. Returns `false` when it is not present.
    pub(crate) fn write_state(&mut self, state: GeometricObject) -> bool {
        match self.objects.iter_mut().find(|o| o.id() == state.id()) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    /// Add `state` or overwrite it when already present.
    pub(crate) fn upsert(&mut self, state: GeometricObject) {
        if !self.write_state(state.clone()) {
            self.objects.push(state);
        }
    }

    /// Swap `old` for `new` at the same paint position. Appends `new` when `old` is absent.
    pub(crate) fn replace(&mut self, old: ObjectId, new: GeometricObject) {
        self.remove([new.id()]);
        match self.position(old) {
            Some(idx) => self.objects[idx] = new,
            None => self.objects.push(new),
        }
    }

    /// Immutable, owned copy of the current frame state.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            objects: self.objects.iter().map(RenderedObject::from_object).collect(),
        }
    }
}

/// Owned copy of the scene handed to frame sinks. Never aliases live state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSnapshot {
    /// Objects in paint order.
    pub objects: Vec<RenderedObject>,
}

impl SceneSnapshot {
    /// Look up an object by identity.
    pub fn get(&self, id: ObjectId) -> Option<&RenderedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Identifiers in paint order.
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|o| o.id).collect()
    }
}

/// Render-ready state of one object: world-space points and effective alphas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedObject {
    /// Object identity.
    pub id: ObjectId,
    /// World-space points.
    pub points: Vec<Point>,
    /// Whether the outline is closed.
    pub closed: bool,
    /// Fill color.
    pub fill: Color,
    /// Effective fill alpha (fill opacity × object opacity × draw-in fraction).
    pub fill_alpha: f64,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f64,
    /// Effective stroke alpha (stroke opacity × object opacity).
    pub stroke_alpha: f64,
    /// Fraction of the outline that is drawn.
    pub reveal: f64,
}

impl RenderedObject {
    fn from_object(obj: &GeometricObject) -> Self {
        let style = obj.style();
        Self {
            id: obj.id(),
            points: obj.rendered_points(),
            closed: obj.is_closed(),
            fill: style.fill,
            fill_alpha: style.fill_opacity * obj.opacity() * obj.reveal(),
            stroke: style.stroke,
            stroke_width: style.stroke_width,
            stroke_alpha: style.stroke_opacity * obj.opacity(),
            reveal: obj.reveal(),
        }
    }

    /// Whether a renderer would paint anything for this object.
    pub fn is_visible(&self) -> bool {
        self.reveal > 0.0 && (self.fill_alpha > 0.0 || self.stroke_alpha > 0.0)
    }

    /// Drawn portion of the outline as a path.
    pub fn outline(&self) -> BezPath {
        let drawn = points::partial_outline(&self.points, self.closed, self.reveal);
        let mut path = polyline_path(&drawn);
        if self.closed && self.reveal >= 1.0 && drawn.len() > 2 {
            path.close_path();
        }
        path
    }

    /// Fill region, `None` for open outlines.
    pub fn fill_path(&self) -> Option<BezPath> {
        if !self.closed || self.points.len() < 3 {
            return None;
        }
        let mut path = polyline_path(&self.points);
        path.close_path();
        Some(path)
    }
}

fn polyline_path(pts: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = pts.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
