//! Kinema is a scene-graph and animation engine for programmatic 2D motion graphics.
//!
//! Authoring follows a single pattern:
//!
//! - Build [`GeometricObject`] values with the [`shapes`] factory and style them
//! - Open a [`Scene`] over a [`FrameSink`]
//! - Call [`Scene::play`] with one or more [`Animation`]s; every call runs to completion,
//!   emitting one [`SceneSnapshot`] per tick of the fixed-step clock
//!
//! Rendering pixels is left to the sink: snapshots carry world-space outlines, fills and
//! alphas ready for any rasterizer.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod player;

/// Frame sinks.
pub mod encode;
/// Scene graph and snapshots.
pub mod scene;
/// Tutorial scenes.
pub mod tutorial;

pub use crate::foundation::color::{self, Color};
pub use crate::foundation::core::{
    Affine, BezPath, Fps, FrameIndex, Point, Rect, Transform2D, Vec2,
};
pub use crate::foundation::error::{KinemaError, KinemaResult};
pub use crate::foundation::math::Lerp;

pub use crate::geometry::object::{GeometricObject, ObjectId, Style, direction};
pub use crate::geometry::points;
pub use crate::geometry::shapes::{self, ShapeKind};

pub use crate::animation::anim::{Animation, AnimationKind, ObjectLaw, PreparedAnimation};
pub use crate::animation::ease::Ease;
pub use crate::animation::mutation::{Animate, Mutation, animate};

pub use crate::encode::sink::{
    CapturedFrame, CountingSink, FrameSink, InMemorySink, JsonLinesSink, SinkConfig,
};
pub use crate::player::config::{PlayConfig, SceneConfig};
pub use crate::player::scene::{PlayReport, Scene};
pub use crate::scene::graph::{RenderedObject, SceneGraph, SceneSnapshot};
