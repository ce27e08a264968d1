use crate::foundation::error::{KinemaError, KinemaResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Global, zero-based index of an emitted frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds); must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> KinemaResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Check that both parts are non-zero. Deserialized values bypass [`Fps::new`].
    pub fn validate(self) -> KinemaResult<()> {
        if self.den == 0 {
            return Err(KinemaError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(KinemaError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one tick in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of whole ticks needed to cover `secs` (at least one for positive input).
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        if secs <= 0.0 {
            return 0;
        }
        // Absorb float noise so that e.g. 1.0s at 30fps is 30 ticks, not 31.
        let frames = secs * self.as_f64();
        let rounded = frames.round();
        if (frames - rounded).abs() < 1e-9 {
            (rounded as u64).max(1)
        } else {
            (frames.ceil() as u64).max(1)
        }
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Similarity transform: uniform scale, then rotation, then translation.
///
/// Stored decomposed so that animations interpolate angles and scale factors instead of
/// matrix entries. The set is closed under composition, so [`Transform2D::then`] never
/// loses information.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Translation applied last.
    pub translate: Vec2,
    /// Counter-clockwise rotation in radians.
    pub rotation_rad: f64,
    /// Uniform scale factor, default 1.
    pub scale: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        rotation_rad: 0.0,
        scale: 1.0,
    };

    /// Pure translation.
    pub fn translate(v: Vec2) -> Self {
        Self {
            translate: v,
            ..Self::IDENTITY
        }
    }

    /// Pure rotation about the origin.
    pub fn rotate(rotation_rad: f64) -> Self {
        Self {
            rotation_rad,
            ..Self::IDENTITY
        }
    }

    /// Pure uniform scale about the origin.
    pub fn scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Equivalent `kurbo` affine matrix.
    pub fn to_affine(self) -> Affine {
        // Canonical order: T(translate) * R(rot) * S(scale)
        Affine::translate(self.translate)
            * Affine::rotate(self.rotation_rad)
            * Affine::scale(self.scale)
    }

    /// Map a point through the transform.
    pub fn apply(self, p: Point) -> Point {
        let v = rotate_vec(p.to_vec2() * self.scale, self.rotation_rad) + self.translate;
        v.to_point()
    }

    /// Compose so that `op` is applied after `self`.
    pub fn then(self, op: Transform2D) -> Transform2D {
        Transform2D {
            translate: rotate_vec(self.translate * op.scale, op.rotation_rad) + op.translate,
            rotation_rad: self.rotation_rad + op.rotation_rad,
            scale: self.scale * op.scale,
        }
    }

    /// Inverse transform, `None` when the scale collapses everything to a point.
    pub fn inverse(self) -> Option<Transform2D> {
        if self.scale.abs() <= f64::EPSILON {
            return None;
        }
        let scale = 1.0 / self.scale;
        Some(Transform2D {
            translate: rotate_vec(-self.translate * scale, -self.rotation_rad),
            rotation_rad: -self.rotation_rad,
            scale,
        })
    }

    /// Re-express this transform so that its rotation and scale act around `pivot`.
    pub fn around(self, pivot: Point) -> Transform2D {
        let c = pivot.to_vec2();
        Transform2D {
            translate: self.translate + c - rotate_vec(c * self.scale, self.rotation_rad),
            ..self
        }
    }
}

pub(crate) fn rotate_vec(v: Vec2, rad: f64) -> Vec2 {
    let (s, c) = rad.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
