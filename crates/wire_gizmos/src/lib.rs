//! # Wire Gizmos
//!
//! Immediate-mode wireframe debug shapes: circles, arcs, domes, cylinders,
//! capsules, cones, spherical cones and segments, bones, rectangles, axis
//! markers and camera frustums. Every shape is computed per call and emitted
//! as line segments into a [`LineSink`](draw::LineSink) supplied by the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use wire_gizmos::prelude::*;
//!
//! let mut lines = LineBuffer::new();
//! let mut gizmos = Gizmos::new(&mut lines);
//!
//! gizmos.set_color(Vec4::new(1.0, 0.5, 0.0, 1.0));
//! gizmos.draw_wire_cone(Vec3::zeros(), 1.0, 60.0, Axis::Y, true);
//! gizmos.draw_wire_capsule(Vec3::new(2.0, 0.0, 0.0), 2.0, 0.5);
//!
//! assert!(!lines.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod camera;
pub mod config;
pub mod draw;
pub mod foundation;

pub use config::{Config, ConfigError, GizmoConfig};
pub use draw::{Gizmos, LineBuffer, LineSink};

/// Common imports for gizmo users
pub mod prelude {
    pub use crate::{
        camera::{Camera, CameraMatrices},
        config::{AxisColors, Config, ConfigError, GizmoConfig},
        draw::{Axis, Gizmos, Label, LineBuffer, LineSegment, LineSink, LineVertex, Rect},
        foundation::math::{Mat4, Vec2, Vec3, Vec4},
    };
}
