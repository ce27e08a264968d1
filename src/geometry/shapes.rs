//! Shape factory: named primitives producing plain [`GeometricObject`] values.
//!
//! Tessellation is fixed per primitive so that repeated construction is deterministic.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::{KinemaError, KinemaResult},
    geometry::object::GeometricObject,
};

/// Number of vertices used to tessellate a circle.
pub const CIRCLE_SEGMENTS: usize = 64;

/// Serializable description of a primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Circle centered at the origin.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned square centered at the origin.
    Square {
        /// Side length.
        side: f64,
    },
    /// Axis-aligned rectangle centered at the origin.
    Rectangle {
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// Regular polygon with one vertex pointing up.
    RegularPolygon {
        /// Number of sides, at least 3.
        sides: u32,
        /// Circumradius.
        radius: f64,
    },
    /// Equilateral triangle with one vertex pointing up.
    Triangle {
        /// Circumradius.
        radius: f64,
    },
    /// Open two-point segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Single point.
    Dot {
        /// Position.
        at: Point,
    },
    /// Explicit point list.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Join the last vertex back to the first.
        closed: bool,
    },
}

impl ShapeKind {
    /// Unit-sized primitive for a name such as `"circle"` or `"square"`.
    pub fn named(name: &str) -> KinemaResult<Self> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "circle" => Self::Circle { radius: 1.0 },
            "square" => Self::Square { side: 2.0 },
            "rectangle" => Self::Rectangle {
                width: 4.0,
                height: 2.0,
            },
            "triangle" => Self::Triangle { radius: 1.0 },
            "hexagon" => Self::RegularPolygon {
                sides: 6,
                radius: 1.0,
            },
            "line" => Self::Line {
                from: Point::new(-1.0, 0.0),
                to: Point::new(1.0, 0.0),
            },
            "dot" => Self::Dot { at: Point::ORIGIN },
            other => {
                return Err(KinemaError::validation(format!(
                    "unknown shape '{other}'"
                )));
            }
        };
        Ok(kind)
    }

    /// Check parameters without building anything.
    pub fn validate(&self) -> KinemaResult<()> {
        fn positive(what: &str, v: f64) -> KinemaResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(KinemaError::geometry(format!("{what} must be finite and > 0")))
            }
        }

        match self {
            Self::Circle { radius } | Self::Triangle { radius } => positive("radius", *radius),
            Self::Square { side } => positive("side", *side),
            Self::Rectangle { width, height } => {
                positive("width", *width)?;
                positive("height", *height)
            }
            Self::RegularPolygon { sides, radius } => {
                if *sides < 3 {
                    return Err(KinemaError::geometry(
                        "regular polygon needs at least 3 sides",
                    ));
                }
                positive("radius", *radius)
            }
            Self::Line { from, to } => {
                if from == to {
                    return Err(KinemaError::geometry("line endpoints must differ"));
                }
                Ok(())
            }
            Self::Dot { .. } | Self::Polyline { .. } => Ok(()),
        }
    }
}

/// Build the object described by `kind`.
pub fn shape(kind: &ShapeKind) -> KinemaResult<GeometricObject> {
    kind.validate()?;
    let obj = match kind {
        ShapeKind::Circle { radius } => regular_points(CIRCLE_SEGMENTS, *radius, 0.0, true),
        ShapeKind::Square { side } => rectangle_points(*side, *side),
        ShapeKind::Rectangle { width, height } => rectangle_points(*width, *height),
        ShapeKind::RegularPolygon { sides, radius } => {
            regular_points(*sides as usize, *radius, FRAC_PI_2, true)
        }
        ShapeKind::Triangle { radius } => regular_points(3, *radius, FRAC_PI_2, true),
        ShapeKind::Line { from, to } => GeometricObject::from_points(vec![*from, *to], false),
        ShapeKind::Dot { at } => GeometricObject::from_points(vec![*at], false),
        ShapeKind::Polyline { points, closed } => {
            GeometricObject::from_points(points.clone(), *closed)
        }
    };
    Ok(obj)
}

/// Build a unit primitive by name.
pub fn named_shape(name: &str) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::named(name)?)
}

/// Circle of `radius` centered at the origin.
pub fn circle(radius: f64) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::Circle { radius })
}

/// Square with `side` length centered at the origin.
pub fn square(side: f64) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::Square { side })
}

/// Rectangle centered at the origin.
pub fn rectangle(width: f64, height: f64) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::Rectangle { width, height })
}

/// Regular polygon with `sides` vertices on a circle of `radius`.
pub fn regular_polygon(sides: u32, radius: f64) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::RegularPolygon { sides, radius })
}

/// Equilateral triangle inscribed in a circle of `radius`.
pub fn triangle(radius: f64) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::Triangle { radius })
}

/// Straight segment.
pub fn line(from: Point, to: Point) -> KinemaResult<GeometricObject> {
    shape(&ShapeKind::Line { from, to })
}

fn regular_points(n: usize, radius: f64, start: f64, closed: bool) -> GeometricObject {
    let points = (0..n)
        .map(|i| {
            let a = start + TAU * (i as f64) / (n as f64);
            (Vec2::from_angle(a) * radius).to_point()
        })
        .collect();
    GeometricObject::from_points(points, closed)
}

fn rectangle_points(width: f64, height: f64) -> GeometricObject {
    let (hw, hh) = (width / 2.0, height / 2.0);
    GeometricObject::from_points(
        vec![
            Point::new(hw, hh),
            Point::new(-hw, hh),
            Point::new(-hw, -hh),
            Point::new(hw, -hh),
        ],
        true,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
