//! Math utilities and types
//!
//! Provides the `nalgebra` aliases and angle helpers used by the gizmo builders.

pub use nalgebra::{Matrix4, Point3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Pt3 = Point3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Mat4, Vec2, Vec3, Vector4};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Unit vector at `degrees` counter-clockwise from +X in the XY plane
    pub fn unit_direction_deg(degrees: f32) -> Vec2 {
        let (sin, cos) = deg_to_rad(degrees).sin_cos();
        Vec2::new(cos, sin)
    }

    /// Rotate a 2D point counter-clockwise by `degrees`
    pub fn rotate_deg(point: Vec2, degrees: f32) -> Vec2 {
        let (sin, cos) = deg_to_rad(degrees).sin_cos();
        Vec2::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
    }

    /// Transform a point by a homogeneous matrix, applying the perspective divide.
    ///
    /// Returns `None` when the resulting `w` is zero.
    pub fn project_point(matrix: &Mat4, point: &Vec3) -> Option<Vec3> {
        let h = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        if h.w == 0.0 {
            return None;
        }
        Some(Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w))
    }
}
