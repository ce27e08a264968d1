use crate::foundation::core::{Point, Transform2D, Vec2};

/// Linear interpolation between two values of the same type.
///
/// `t = 0` must return `a` and `t = 1` must return `b` exactly.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` at progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return *b;
        }
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(f64::lerp(&a.x, &b.x, t), f64::lerp(&a.y, &b.y, t))
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(f64::lerp(&a.x, &b.x, t), f64::lerp(&a.y, &b.y, t))
    }
}

impl Lerp for Transform2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            rotation_rad: f64::lerp(&a.rotation_rad, &b.rotation_rad, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
        }
    }
}
