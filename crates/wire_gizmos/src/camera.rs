//! Camera matrices for frustum gizmos
//!
//! The frustum gizmo only needs a view and a projection matrix, so it takes
//! anything implementing [`CameraMatrices`]. [`Camera`] is a small perspective
//! camera for hosts that do not have their own.
//!
//! # Coordinate System
//! Right-handed, Y-up view space looking down -Z. Projection matrices map depth
//! to the OpenGL `[-1, 1]` NDC range.

use crate::foundation::math::{utils, Mat4, Pt3, Vec3};

/// Source of view and projection matrices
pub trait CameraMatrices {
    /// World-to-view transform
    fn view_matrix(&self) -> Mat4;

    /// View-to-clip transform
    fn projection_matrix(&self) -> Mat4;

    /// Combined `projection * view`
    fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to the near clipping plane
    pub near: f32,

    /// Distance to the far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin with +Y up
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }
}

impl CameraMatrices for Camera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(&Pt3::from(self.position), &Pt3::from(self.target), &self.up)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }
}

impl Default for Camera {
    /// 45° camera at (0, 3, 3) looking at the origin
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
