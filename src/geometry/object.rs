use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    foundation::color::{
        Color, DEFAULT_FILL, DEFAULT_FILL_OPACITY, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH,
    },
    foundation::core::{Point, Rect, Transform2D, Vec2},
    foundation::error::{KinemaError, KinemaResult},
    foundation::math::Lerp,
    geometry::points,
};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

const EXTENT_EPS: f64 = 1e-12;

/// Process-unique identity of a [`GeometricObject`].
///
/// Cloning an object keeps its identity; [`GeometricObject::duplicate`] allocates a new one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Allocate a never-before-used identifier.
    pub fn fresh() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&GeometricObject> for ObjectId {
    fn from(obj: &GeometricObject) -> Self {
        obj.id
    }
}

/// Unit direction vectors (y grows upward).
pub mod direction {
    use crate::foundation::core::Vec2;

    /// No direction: placement aligns centers.
    pub const ORIGIN: Vec2 = Vec2::new(0.0, 0.0);
    /// +y.
    pub const UP: Vec2 = Vec2::new(0.0, 1.0);
    /// -y.
    pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
    /// -x.
    pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
    /// +x.
    pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
    /// Up and left.
    pub const UL: Vec2 = Vec2::new(-1.0, 1.0);
    /// Up and right.
    pub const UR: Vec2 = Vec2::new(1.0, 1.0);
    /// Down and left.
    pub const DL: Vec2 = Vec2::new(-1.0, -1.0);
    /// Down and right.
    pub const DR: Vec2 = Vec2::new(1.0, -1.0);
}

/// Fill and stroke styling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    /// Fill color.
    pub fill: Color,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width in scene units.
    pub stroke_width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub stroke_opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL,
            fill_opacity: DEFAULT_FILL_OPACITY,
            stroke: DEFAULT_STROKE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_opacity: 1.0,
        }
    }
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            fill: Color::lerp(&a.fill, &b.fill, t),
            fill_opacity: f64::lerp(&a.fill_opacity, &b.fill_opacity, t),
            stroke: Color::lerp(&a.stroke, &b.stroke, t),
            stroke_width: f64::lerp(&a.stroke_width, &b.stroke_width, t),
            stroke_opacity: f64::lerp(&a.stroke_opacity, &b.stroke_opacity, t),
        }
    }
}

/// A styled, transformable point set.
///
/// The rendered geometry is always `transform ∘ points`. Affine operations only touch the
/// transform; the base points change only through whole point-set replacement (shape
/// morphing).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometricObject {
    id: ObjectId,
    points: Vec<Point>,
    closed: bool,
    style: Style,
    transform: Transform2D,
    opacity: f64,
    reveal: f64,
}

impl GeometricObject {
    /// Build an object from explicit local-space points with the default style.
    pub fn from_points(points: Vec<Point>, closed: bool) -> Self {
        Self {
            id: ObjectId::fresh(),
            points,
            closed,
            style: Style::default(),
            transform: Transform2D::IDENTITY,
            opacity: 1.0,
            reveal: 1.0,
        }
    }

    /// Identity of this object.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Base points in local space.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the outline joins its last point back to the first.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Current style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Current transform applied on top of the base points.
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Whole-object opacity multiplier in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Draw-in fraction in `[0, 1]`: how much of the outline is drawn.
    pub fn reveal(&self) -> f64 {
        self.reveal
    }

    /// Points after applying the transform.
    pub fn rendered_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| self.transform.apply(*p))
            .collect()
    }

    /// Bounds of the rendered points, `None` for an empty object.
    pub fn bounding_box(&self) -> Option<Rect> {
        points::bounding_box(&self.rendered_points())
    }

    /// Center of the rendered bounds, or the local origin for an empty object.
    pub fn center(&self) -> Point {
        self.bounding_box()
            .map(|r| r.center())
            .unwrap_or_else(|| self.local_origin())
    }

    /// Where the local-space origin lands after the transform.
    pub fn local_origin(&self) -> Point {
        self.transform.translate.to_point()
    }

    /// Copy with a fresh identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ObjectId::fresh(),
            ..self.clone()
        }
    }

    /// Set fill color and opacity.
    pub fn set_fill(&mut self, color: Color, opacity: f64) -> &mut Self {
        self.style.fill = color;
        self.style.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set fill opacity only.
    pub fn set_fill_opacity(&mut self, opacity: f64) -> &mut Self {
        self.style.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set stroke color and width.
    pub fn set_stroke(&mut self, color: Color, width: f64) -> &mut Self {
        self.style.stroke = color;
        self.style.stroke_width = width.max(0.0);
        self
    }

    /// Set stroke opacity only.
    pub fn set_stroke_opacity(&mut self, opacity: f64) -> &mut Self {
        self.style.stroke_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    /// Set the whole-object opacity multiplier.
    pub fn set_opacity(&mut self, opacity: f64) -> &mut Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the draw-in fraction.
    pub fn set_reveal(&mut self, reveal: f64) -> &mut Self {
        self.reveal = reveal.clamp(0.0, 1.0);
        self
    }

    /// Open or close the outline.
    pub fn set_closed(&mut self, closed: bool) -> &mut Self {
        self.closed = closed;
        self
    }

    /// Compose `op` after the current transform.
    ///
    /// Rotation and scale in `op` act around `pivot`, or around [`Self::local_origin`] when
    /// no pivot is given. Base points are untouched.
    pub fn apply_transform(&mut self, op: Transform2D, pivot: Option<Point>) -> &mut Self {
        let pivot = pivot.unwrap_or_else(|| self.local_origin());
        self.transform = self.transform.then(op.around(pivot));
        self
    }

    /// Translate by `delta`.
    pub fn shift(&mut self, delta: Vec2) -> &mut Self {
        self.apply_transform(Transform2D::translate(delta), None)
    }

    /// Move so that the bounds center lands on `target`.
    pub fn move_to(&mut self, target: Point) -> &mut Self {
        let delta = target - self.center();
        self.shift(delta)
    }

    /// Rotate around the local origin.
    pub fn rotate(&mut self, rad: f64) -> &mut Self {
        self.apply_transform(Transform2D::rotate(rad), None)
    }

    /// Rotate around an explicit pivot.
    pub fn rotate_about(&mut self, rad: f64, pivot: Point) -> &mut Self {
        self.apply_transform(Transform2D::rotate(rad), Some(pivot))
    }

    /// Uniformly scale around the local origin.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.apply_transform(Transform2D::scale(factor), None)
    }

    /// Position this object next to `other`.
    ///
    /// The bounds of `self` end up `gap` units away from the bounds of `other` along
    /// `direction`. A zero direction is purely positional and aligns the two centers.
    /// Fails when either object is empty, or when a non-zero direction is requested and
    /// either bounding box has zero extent.
    pub fn place_relative_to(
        &mut self,
        other: &GeometricObject,
        direction: Vec2,
        gap: f64,
    ) -> KinemaResult<&mut Self> {
        let mine = self.bounding_box().ok_or_else(|| {
            KinemaError::geometry(format!("object {} has no points to place", self.id))
        })?;
        let theirs = other.bounding_box().ok_or_else(|| {
            KinemaError::geometry(format!("reference object {} has no points", other.id))
        })?;

        if direction.hypot() <= EXTENT_EPS {
            let delta = theirs.center() - mine.center();
            return Ok(self.shift(delta));
        }
        for (rect, id) in [(mine, self.id), (theirs, other.id)] {
            if is_degenerate(rect) {
                return Err(KinemaError::geometry(format!(
                    "object {id} has a zero-extent bounding box"
                )));
            }
        }

        let target = critical_point(theirs, direction) + direction.normalize() * gap;
        let delta = target - critical_point(mine, -direction);
        Ok(self.shift(delta))
    }

    /// Replace the base points. Used by morphing, never by affine operations.
    pub(crate) fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Interpolate every numeric field from `a` to `b`; discrete fields switch at `t = 1`.
    ///
    /// Both states must describe the same object with equally sized point sets.
    pub(crate) fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        debug_assert_eq!(a.id, b.id);
        Self {
            id: a.id,
            points: points::lerp_aligned(&a.points, &b.points, t),
            closed: if t >= 1.0 { b.closed } else { a.closed },
            style: Style::lerp(&a.style, &b.style, t),
            transform: Transform2D::lerp(&a.transform, &b.transform, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            reveal: f64::lerp(&a.reveal, &b.reveal, t),
        }
    }
}

fn is_degenerate(r: Rect) -> bool {
    r.width() <= EXTENT_EPS && r.height() <= EXTENT_EPS
}

fn critical_point(r: Rect, direction: Vec2) -> Point {
    fn sign(v: f64) -> f64 {
        if v > EXTENT_EPS {
            1.0
        } else if v < -EXTENT_EPS {
            -1.0
        } else {
            0.0
        }
    }
    r.center() + Vec2::new(sign(direction.x) * r.width(), sign(direction.y) * r.height()) * 0.5
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/object.rs"]
mod tests;
