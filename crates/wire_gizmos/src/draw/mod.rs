//! Wireframe gizmo drawing
//!
//! Each shape is built from points on the shared unit circle (or, for the
//! frustum, from unprojected NDC corners) and emitted segment by segment into a
//! host [`LineSink`]. The `*_points` functions expose the raw geometry for
//! callers that want it without drawing.

pub mod axis;
pub mod circle_table;
pub mod circles;
pub mod frustum;
pub mod gizmos;
pub mod markers;
pub mod shapes;
pub mod sink;

pub use axis::{Axis, AxisFrame, AXIS_FRAMES};
pub use circle_table::{unit_circle, CIRCLE_RESOLUTION};
pub use circles::{arc_points, circle_points};
pub use frustum::{frustum_corners, handedness_flip};
pub use gizmos::Gizmos;
pub use markers::Rect;
pub use shapes::{cone_base_radius, spherical_arc_offsets, spherical_cap};
pub use sink::{Label, LineBuffer, LineSegment, LineSink, LineVertex};
