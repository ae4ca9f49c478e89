//! Axis selection
//!
//! Every shape builder works from an [`AxisFrame`] looked up by [`Axis`]
//! instead of branching on the axis itself.

use crate::foundation::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// One of the three principal coordinate axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// +X
    X,
    /// +Y
    Y,
    /// +Z
    #[default]
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis (X = 0, Y = 1, Z = 2)
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Axis for a component index, wrapping modulo 3
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::X,
            1 => Self::Y,
            _ => Self::Z,
        }
    }

    /// The axis `steps` positions further along X → Y → Z → X
    pub const fn cycled(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// Lookup-table entry for this axis
    pub fn frame(self) -> &'static AxisFrame {
        &AXIS_FRAMES[self.index()]
    }

    /// Unit vector along this axis
    pub fn direction(self) -> Vec3 {
        self.frame().forward()
    }
}

/// Precomputed per-axis data used by the shape builders
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFrame {
    /// Principal axis direction
    pub forward: [f32; 3],
    /// `forward` with components rotated `(x, y, z) -> (y, z, x)`
    pub right: [f32; 3],
    /// `forward` with components rotated `(x, y, z) -> (z, x, y)`
    pub up: [f32; 3],
    /// Components receiving the `(x, y)` of a unit-circle point for full circles
    pub circle_plane: [usize; 2],
    /// Components receiving the `(x, y)` of a rotated point for arcs.
    ///
    /// For X this is transposed with respect to `circle_plane`.
    pub arc_plane: [usize; 2],
    /// Arc planes of a dome: first gets `0..180`, second `-90..90`
    pub dome_arcs: [Axis; 2],
}

impl AxisFrame {
    /// Principal axis direction
    pub fn forward(&self) -> Vec3 {
        Vec3::from(self.forward)
    }

    /// First permuted basis vector
    pub fn right(&self) -> Vec3 {
        Vec3::from(self.right)
    }

    /// Second permuted basis vector
    pub fn up(&self) -> Vec3 {
        Vec3::from(self.up)
    }
}

const fn axis_frame(
    forward: [f32; 3],
    circle_plane: [usize; 2],
    arc_plane: [usize; 2],
    dome_arcs: [Axis; 2],
) -> AxisFrame {
    let (right, up) = permuted_basis(forward);
    AxisFrame {
        forward,
        right,
        up,
        circle_plane,
        arc_plane,
        dome_arcs,
    }
}

/// Axis lookup table, indexed by [`Axis::index`]
pub static AXIS_FRAMES: [AxisFrame; 3] = [
    axis_frame([1.0, 0.0, 0.0], [1, 2], [2, 1], [Axis::Z, Axis::Y]),
    axis_frame([0.0, 1.0, 0.0], [0, 2], [0, 2], [Axis::X, Axis::Z]),
    axis_frame([0.0, 0.0, 1.0], [0, 1], [0, 1], [Axis::Y, Axis::X]),
];

/// Side vectors `(y, z, x)` and `(z, x, y)` of `forward`.
///
/// Only orthogonal when `forward` is a principal axis.
const fn permuted_basis(forward: [f32; 3]) -> ([f32; 3], [f32; 3]) {
    (
        [forward[1], forward[2], forward[0]],
        [forward[2], forward[0], forward[1]],
    )
}

/// Offset `center` by the 2D point `offset` laid out on the components `plane`
pub(crate) fn place_in_plane(center: &Vec3, plane: [usize; 2], offset: &Vec2) -> Vec3 {
    let mut point = *center;
    point[plane[0]] += offset.x;
    point[plane[1]] += offset.y;
    point
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_directions() {
        assert_eq!(Axis::X.direction(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Axis::Y.direction(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::Z.direction(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(Axis::default(), Axis::Z);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Axis::Z.cycled(1), Axis::X);
        assert_eq!(Axis::Y.cycled(2), Axis::X);
        assert_eq!(Axis::X.cycled(3), Axis::X);
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), axis);
        }
    }

    #[test]
    fn test_frame_side_vectors() {
        assert_eq!(Axis::X.frame().right(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(Axis::X.frame().up(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::Z.frame().right(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::Z.frame().up(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_principal_frames_are_orthonormal() {
        for axis in Axis::ALL {
            let frame = axis.frame();
            let (f, r, u) = (frame.forward(), frame.right(), frame.up());
            assert_eq!(f.dot(&r), 0.0);
            assert_eq!(f.dot(&u), 0.0);
            assert_eq!(r.dot(&u), 0.0);
            assert_eq!(r.magnitude(), 1.0);
            assert_eq!(u.magnitude(), 1.0);
        }
    }

    #[test]
    fn test_permutation_is_not_orthogonal_in_general() {
        let forward = Vec3::new(1.0, 1.0, 0.0).normalize();
        let (right, _) = permuted_basis([forward.x, forward.y, forward.z]);
        assert!(forward.dot(&Vec3::from(right)).abs() > 0.1);
    }

    #[test]
    fn test_planes_exclude_own_axis() {
        for axis in Axis::ALL {
            let frame = axis.frame();
            assert!(!frame.circle_plane.contains(&axis.index()));
            assert!(!frame.arc_plane.contains(&axis.index()));
            assert!(!frame.dome_arcs.contains(&axis));
        }
    }

    #[test]
    fn test_place_in_plane() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let placed = place_in_plane(&center, [2, 1], &Vec2::new(10.0, 20.0));
        assert_eq!(placed, Vec3::new(1.0, 22.0, 13.0));
    }
}
