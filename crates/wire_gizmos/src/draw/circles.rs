//! Circles and arcs
//!
//! Both sample the shared unit-circle table. Full circles project the table
//! straight onto the plane orthogonal to the axis; arcs rotate it by the start
//! angle in the XY plane first and remap the result into the target plane.

use crate::draw::axis::{place_in_plane, Axis};
use crate::draw::circle_table::{unit_circle, CIRCLE_RESOLUTION};
use crate::draw::gizmos::Gizmos;
use crate::draw::sink::LineSink;
use crate::foundation::math::{utils, Vec3};

/// Points of a full circle around `axis`, in table order.
///
/// Drawing connects point 31 to point 0 first, then each point to the next.
pub fn circle_points(center: &Vec3, radius: f32, axis: Axis) -> [Vec3; CIRCLE_RESOLUTION] {
    let plane = axis.frame().circle_plane;
    let table = unit_circle();
    std::array::from_fn(|i| place_in_plane(center, plane, &(table[i] * radius)))
}

/// Points of an arc around `axis` from `angle_begin` to `angle_end` (degrees).
///
/// The span is clamped to 360°. Table samples are used up to the span and the
/// exact point at `angle_end` is always the last point, so the result holds at
/// least two points even for an empty or negative span.
pub fn arc_points(
    center: &Vec3,
    radius: f32,
    angle_begin: f32,
    angle_end: f32,
    axis: Axis,
) -> Vec<Vec3> {
    let angle_end = if angle_end > angle_begin + 360.0 {
        angle_begin + 360.0
    } else {
        angle_end
    };
    let span = (angle_end - angle_begin).min(360.0);
    let sample_count = (CIRCLE_RESOLUTION as f32 * span / 360.0).ceil().max(0.0) as usize;

    let plane = axis.frame().arc_plane;
    let table = unit_circle();
    let sampled = |i: usize| {
        let rotated = utils::rotate_deg(table[i], angle_begin) * radius;
        place_in_plane(center, plane, &rotated)
    };

    let mut points = Vec::with_capacity(sample_count.max(1) + 1);
    points.push(sampled(0));
    points.extend((1..sample_count.min(CIRCLE_RESOLUTION)).map(sampled));
    points.push(place_in_plane(
        center,
        plane,
        &(utils::unit_direction_deg(angle_end) * radius),
    ));
    points
}

impl<S: LineSink + ?Sized> Gizmos<'_, S> {
    /// Draw a circle of `radius` around `center` in the plane orthogonal to `axis`.
    pub fn draw_wire_circle(&mut self, center: Vec3, radius: f32, axis: Axis) {
        let points = circle_points(&center, radius, axis);
        self.draw_loop(&points);
    }

    /// Draw an arc from `angle_begin` to `angle_end`, in degrees.
    ///
    /// Spans over 360° are clamped; the arc always ends exactly at `angle_end`.
    pub fn draw_wire_arc(
        &mut self,
        center: Vec3,
        radius: f32,
        angle_begin: f32,
        angle_end: f32,
        axis: Axis,
    ) {
        let points = arc_points(&center, radius, angle_begin, angle_end, axis);
        self.draw_polyline(&points);
    }
}
