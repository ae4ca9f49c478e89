//! Composite wire shapes
//!
//! Domes, cylinders, capsules, cones, spherical cones/segments and bones are
//! all assembled from circles, arcs and straight edges. The angle offsets of
//! the arcs decide which half of each circle faces outward.

use crate::draw::axis::Axis;
use crate::draw::gizmos::Gizmos;
use crate::draw::sink::LineSink;
use crate::foundation::math::{utils, Vec3};

/// Base radius of a cone with the given `height` and full opening `angle` (degrees)
pub fn cone_base_radius(height: f32, angle: f32) -> f32 {
    utils::deg_to_rad(angle * 0.5).tan() * height
}

/// Offset along the axis and radius of the cap circle where a cone with full
/// opening `angle` (degrees) meets the sphere of `radius`.
///
/// Returns `(offset, cap_radius)`.
pub fn spherical_cap(radius: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = utils::deg_to_rad(angle * 0.5).sin_cos();
    (cos * radius, sin * radius)
}

/// Angle offsets (degrees) added to the two great-circle arcs of a spherical
/// cone on `axis`.
///
/// The first arc lies on `axis.cycled(1)`, the second on `axis.cycled(2)`.
pub fn spherical_arc_offsets(axis: Axis) -> (f32, f32) {
    let first = if axis == Axis::Y { 90.0 } else { 0.0 };
    let second = if axis == Axis::X { 0.0 } else { 90.0 };
    (first, second)
}

impl<S: LineSink + ?Sized> Gizmos<'_, S> {
    /// Draw a hemisphere: the base circle on `axis` plus two half arcs.
    ///
    /// `mirror` turns all arcs by 180°.
    pub fn draw_wire_dome(&mut self, center: Vec3, radius: f32, axis: Axis, mirror: bool) {
        self.draw_wire_circle(center, radius, axis);

        let turn = if mirror { 180.0 } else { 0.0 };
        let [first, second] = axis.frame().dome_arcs;
        self.draw_wire_arc(center, radius, turn, 180.0 + turn, first);
        self.draw_wire_arc(center, radius, -90.0 + turn, 90.0 + turn, second);
    }

    /// Draw a Y-up cylinder of total `height` centered on `center`.
    pub fn draw_wire_cylinder(&mut self, center: Vec3, height: f32, radius: f32) {
        let half = Vec3::new(0.0, height * 0.5, 0.0);
        let bottom = center - half;
        let top = center + half;

        // Side lines.
        for side in side_offsets(radius) {
            self.draw_line(bottom + side, top + side);
        }

        // Lower and upper circles.
        self.draw_wire_circle(bottom, radius, Axis::Y);
        self.draw_wire_circle(top, radius, Axis::Y);
    }

    /// Draw a Y-up capsule whose cylindrical part has `height`.
    pub fn draw_wire_capsule(&mut self, center: Vec3, height: f32, radius: f32) {
        let half = Vec3::new(0.0, height * 0.5, 0.0);
        let top = center + half;
        let bottom = center - half;

        // Side lines.
        for side in side_offsets(radius) {
            self.draw_line(top + side, bottom + side);
        }

        // Lower and upper circles.
        self.draw_wire_circle(top, radius, Axis::Y);
        self.draw_wire_circle(bottom, radius, Axis::Y);

        // Caps.
        self.draw_wire_arc(top, radius, -90.0, 90.0, Axis::Z);
        self.draw_wire_arc(top, radius, 0.0, 180.0, Axis::X);
        self.draw_wire_arc(bottom, radius, 90.0, 270.0, Axis::Z);
        self.draw_wire_arc(bottom, radius, 180.0, 360.0, Axis::X);
    }

    /// Draw a cone of `height` with full opening `angle` (degrees) along `axis`.
    ///
    /// With `origin_at_bottom` the base circle sits at `position` and the apex
    /// at `position + axis * height`; otherwise the apex is at `position`.
    pub fn draw_wire_cone(
        &mut self,
        position: Vec3,
        height: f32,
        angle: f32,
        axis: Axis,
        origin_at_bottom: bool,
    ) {
        let radius = cone_base_radius(height, angle);
        let frame = axis.frame();
        let right = frame.right() * radius;
        let up = frame.up() * radius;
        let top = position + frame.forward() * height;

        if origin_at_bottom {
            self.draw_wire_circle(position, radius, axis);
            self.draw_spokes(top, position, right, up);
        } else {
            self.draw_wire_circle(top, radius, axis);
            self.draw_spokes(position, top, right, up);
        }
    }

    /// Draw a cone with apex at `position` capped by the sphere of `radius`.
    pub fn draw_wire_spherical_cone(&mut self, position: Vec3, radius: f32, angle: f32, axis: Axis) {
        let (offset, cap_radius) = spherical_cap(radius, angle);
        let frame = axis.frame();
        let cap_center = position + frame.forward() * offset;

        self.draw_wire_circle(cap_center, cap_radius, axis);
        self.draw_spokes(position, cap_center, frame.right() * cap_radius, frame.up() * cap_radius);
        self.draw_spherical_arcs(position, radius, angle, axis);
    }

    /// Draw the spherical cap of a spherical cone without its edges.
    pub fn draw_wire_spherical_segment(&mut self, position: Vec3, radius: f32, angle: f32, axis: Axis) {
        let (offset, cap_radius) = spherical_cap(radius, angle);
        let cap_center = position + axis.direction() * offset;

        self.draw_wire_circle(cap_center, cap_radius, axis);
        self.draw_spherical_arcs(position, radius, angle, axis);
    }

    /// Draw a bone: a dome at `position` and four edges meeting `length` along
    /// `axis` (backwards when `mirror` is set).
    pub fn draw_wire_bone(&mut self, position: Vec3, radius: f32, length: f32, axis: Axis, mirror: bool) {
        let frame = axis.frame();
        let right = frame.right() * radius;
        let up = frame.up() * radius;
        let sign = if mirror { -1.0 } else { 1.0 };
        let top = position + frame.forward() * (length * sign);

        self.draw_wire_dome(position, radius, axis, !mirror);
        self.draw_spokes(top, position, right, up);
    }

    fn draw_spherical_arcs(&mut self, position: Vec3, radius: f32, angle: f32, axis: Axis) {
        let half = angle * 0.5;
        let (first, second) = spherical_arc_offsets(axis);
        self.draw_wire_arc(position, radius, -half + first, half + first, axis.cycled(1));
        self.draw_wire_arc(position, radius, -half + second, half + second, axis.cycled(2));
    }
}

/// `-x`, `+x`, `-z`, `+z` offsets of the side lines of Y-up shapes
fn side_offsets(radius: f32) -> [Vec3; 4] {
    [
        Vec3::new(-radius, 0.0, 0.0),
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -radius),
        Vec3::new(0.0, 0.0, radius),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::circles::{arc_points, circle_points};
    use crate::draw::sink::{LineBuffer, LineSegment};
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn record(draw: impl FnOnce(&mut Gizmos<'_, LineBuffer>)) -> Vec<LineSegment> {
        let mut buffer = LineBuffer::new();
        draw(&mut Gizmos::new(&mut buffer));
        buffer.segments().to_vec()
    }

    fn arc_segment_count(begin: f32, end: f32) -> usize {
        arc_points(&Vec3::zeros(), 1.0, begin, end, Axis::Z).len() - 1
    }

    #[test]
    fn test_cone_base_radius() {
        for angle in [1.0_f32, 30.0, 60.0, 90.0, 120.0, 179.0] {
            let expected = (angle * 0.5).to_radians().tan() * 2.5;
            assert_relative_eq!(cone_base_radius(2.5, angle), expected, max_relative = 1e-4);
        }
        assert_relative_eq!(cone_base_radius(1.0, 90.0), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_spherical_cap_lies_on_sphere() {
        for angle in [10.0, 45.0, 90.0, 135.0, 180.0, 270.0] {
            let (offset, cap_radius) = spherical_cap(3.0, angle);
            assert_relative_eq!(offset * offset + cap_radius * cap_radius, 9.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_cone_scenario_origin_at_bottom() {
        let segments = record(|g| g.draw_wire_cone(Vec3::zeros(), 1.0, 90.0, Axis::Z, true));
        assert_eq!(segments.len(), 32 + 4);

        for segment in &segments[..32] {
            assert_relative_eq!(segment.start.magnitude(), 1.0, epsilon = EPSILON);
            assert_eq!(segment.start.z, 0.0);
        }

        let apex = Vec3::new(0.0, 0.0, 1.0);
        let rim: Vec<Vec3> = segments[32..].iter().map(|s| s.end).collect();
        for segment in &segments[32..] {
            assert_eq!(segment.start, apex);
        }
        assert_relative_eq!(rim[0], Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(rim[1], Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(rim[2], Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(rim[3], Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_cone_origin_at_apex() {
        let position = Vec3::new(1.0, 1.0, 1.0);
        let segments = record(|g| g.draw_wire_cone(position, 2.0, 90.0, Axis::X, false));

        let base_center = Vec3::new(3.0, 1.0, 1.0);
        for segment in &segments[..32] {
            assert_relative_eq!((segment.start - base_center).magnitude(), 2.0, epsilon = EPSILON);
        }
        for segment in &segments[32..] {
            assert_eq!(segment.start, position);
            assert_relative_eq!((segment.end - base_center).magnitude(), 2.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_dome_z_stays_in_upper_hemisphere() {
        let segments = record(|g| g.draw_wire_dome(Vec3::zeros(), 1.0, Axis::Z, false));
        assert_eq!(segments.len(), 32 + 16 + 16);
        for segment in &segments[32..] {
            assert!(segment.start.z >= -EPSILON && segment.end.z >= -EPSILON);
            assert_relative_eq!(segment.end.magnitude(), 1.0, epsilon = EPSILON);
        }

        let mirrored = record(|g| g.draw_wire_dome(Vec3::zeros(), 1.0, Axis::Z, true));
        for segment in &mirrored[32..] {
            assert!(segment.start.z <= EPSILON && segment.end.z <= EPSILON);
        }
    }

    #[test]
    fn test_dome_arc_planes() {
        // Axis Y: first arc in the X plane, second in the Z plane
        let segments = record(|g| g.draw_wire_dome(Vec3::zeros(), 1.0, Axis::Y, false));
        let first = &segments[32..48];
        let second = &segments[48..];
        assert!(first.iter().all(|s| s.start.x == 0.0 && s.end.x == 0.0));
        assert!(second.iter().all(|s| s.start.z == 0.0 && s.end.z == 0.0));
        assert_relative_eq!(second[0].start, Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_cylinder_layout() {
        let center = Vec3::new(0.0, 1.0, 0.0);
        let segments = record(|g| g.draw_wire_cylinder(center, 2.0, 0.5));
        assert_eq!(segments.len(), 4 + 32 + 32);

        assert_eq!(segments[0].start, Vec3::new(-0.5, 0.0, 0.0));
        assert_eq!(segments[0].end, Vec3::new(-0.5, 2.0, 0.0));
        assert_eq!(segments[3].start, Vec3::new(0.0, 0.0, 0.5));
        for segment in &segments[4..36] {
            assert_eq!(segment.start.y, 0.0);
        }
        for segment in &segments[36..] {
            assert_eq!(segment.start.y, 2.0);
        }
    }

    #[test]
    fn test_capsule_layout() {
        let segments = record(|g| g.draw_wire_capsule(Vec3::zeros(), 2.0, 0.5));
        let arcs = arc_segment_count(-90.0, 90.0) * 4;
        assert_eq!(segments.len(), 4 + 64 + arcs);

        // Side lines run top to bottom.
        assert_eq!(segments[1].start, Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(segments[1].end, Vec3::new(0.5, -1.0, 0.0));

        let top = Vec3::new(0.0, 1.0, 0.0);
        let bottom = Vec3::new(0.0, -1.0, 0.0);
        let caps = &segments[68..];
        let per_arc = arcs / 4;
        for segment in &caps[..2 * per_arc] {
            assert_relative_eq!((segment.end - top).magnitude(), 0.5, epsilon = EPSILON);
        }
        for segment in &caps[2 * per_arc..] {
            assert_relative_eq!((segment.end - bottom).magnitude(), 0.5, epsilon = EPSILON);
        }
        // The X-plane caps bulge away from the cylinder.
        assert!(caps[per_arc..2 * per_arc].iter().all(|s| s.end.y >= 1.0 - EPSILON));
        assert!(caps[3 * per_arc..].iter().all(|s| s.end.y <= -1.0 + EPSILON));
    }

    #[test]
    fn test_spherical_arc_offsets_table() {
        assert_eq!(spherical_arc_offsets(Axis::X), (0.0, 0.0));
        assert_eq!(spherical_arc_offsets(Axis::Y), (90.0, 90.0));
        assert_eq!(spherical_arc_offsets(Axis::Z), (0.0, 90.0));
    }

    #[test]
    fn test_spherical_cone_arcs_center_on_axis() {
        let angle = 60.0;
        for axis in Axis::ALL {
            let segments = record(|g| g.draw_wire_spherical_cone(Vec3::zeros(), 2.0, angle, axis));
            let arc_len = arc_segment_count(-30.0, 30.0);
            assert_eq!(segments.len(), 32 + 4 + 2 * arc_len);

            // Every arc point is within half the opening angle of the axis.
            let min_cos = (angle * 0.5_f32).to_radians().cos() - EPSILON;
            for segment in &segments[36..] {
                assert_relative_eq!(segment.end.magnitude(), 2.0, epsilon = EPSILON);
                let cos = segment.end.normalize().dot(&axis.direction());
                assert!(cos >= min_cos, "{axis:?}: arc point {:?} off axis", segment.end);
            }

            // Edges run from the apex to the cap rim on the sphere.
            for segment in &segments[32..36] {
                assert_eq!(segment.start, Vec3::zeros());
                assert_relative_eq!(segment.end.magnitude(), 2.0, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_spherical_segment_has_no_edges() {
        let segments = record(|g| g.draw_wire_spherical_segment(Vec3::zeros(), 1.0, 90.0, Axis::Y));
        let arc_len = arc_segment_count(-45.0, 45.0);
        assert_eq!(segments.len(), 32 + 2 * arc_len);

        let (offset, cap_radius) = spherical_cap(1.0, 90.0);
        for segment in &segments[..32] {
            assert_relative_eq!(segment.start.y, offset, epsilon = EPSILON);
            let radial = Vec3::new(segment.start.x, 0.0, segment.start.z);
            assert_relative_eq!(radial.magnitude(), cap_radius, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_bone_apex_and_dome() {
        let segments = record(|g| g.draw_wire_bone(Vec3::zeros(), 0.25, 2.0, Axis::Z, false));
        let edges = &segments[segments.len() - 4..];
        for edge in edges {
            assert_eq!(edge.start, Vec3::new(0.0, 0.0, 2.0));
        }
        // The dome is drawn mirrored, away from the apex.
        for segment in &segments[32..segments.len() - 4] {
            assert!(segment.end.z <= EPSILON);
        }

        let mirrored = record(|g| g.draw_wire_bone(Vec3::zeros(), 0.25, 2.0, Axis::Z, true));
        let edges = &mirrored[mirrored.len() - 4..];
        assert_eq!(edges[0].start, Vec3::new(0.0, 0.0, -2.0));
        for segment in &mirrored[32..mirrored.len() - 4] {
            assert!(segment.end.z >= -EPSILON);
        }
    }

    #[test]
    fn test_dome_starts_with_base_circle() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let segments = record(|g| g.draw_wire_dome(center, 0.5, Axis::X, false));
        let circle = circle_points(&center, 0.5, Axis::X);
        assert_eq!(segments[0].start, circle[31]);
        assert_eq!(segments[0].end, circle[0]);
    }
}
