//! Camera frustum outlines
//!
//! The eight corners of the NDC cube are unprojected through the inverse of
//! `projection * view`, then joined by the twelve cube edges.

use crate::camera::CameraMatrices;
use crate::draw::gizmos::Gizmos;
use crate::draw::sink::LineSink;
use crate::foundation::math::{utils, Mat4, Vec3};

/// NDC cube corners: near quad first, then far quad, both counter-clockwise
pub const NDC_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Corner index pairs: near quad, far quad, then near-to-far connectors
pub const FRUSTUM_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Mirror of view-space Z, for views built with the opposite handedness
pub fn handedness_flip() -> Mat4 {
    Mat4::new_nonuniform_scaling(&Vec3::new(1.0, 1.0, -1.0))
}

/// World-space frustum corners in [`NDC_CORNERS`] order.
///
/// Returns `None` when `projection * view` cannot be inverted or a corner
/// unprojects to infinity.
pub fn frustum_corners(view: &Mat4, projection: &Mat4, flip_handedness: bool) -> Option<[Vec3; 8]> {
    let view = if flip_handedness {
        handedness_flip() * view
    } else {
        *view
    };
    let inverse = (projection * view).try_inverse()?;

    let mut corners = [Vec3::zeros(); 8];
    for (corner, ndc) in corners.iter_mut().zip(NDC_CORNERS) {
        *corner = utils::project_point(&inverse, &Vec3::from(ndc))?;
    }
    log::debug!(
        "Frustum corners: near {:?}, far {:?}",
        corners[0],
        corners[6]
    );
    Some(corners)
}

impl<S: LineSink + ?Sized> Gizmos<'_, S> {
    /// Draw the frustum described by a view and projection matrix.
    ///
    /// Draws nothing if the combined matrix is singular.
    pub fn draw_frustum(&mut self, view: &Mat4, projection: &Mat4, flip_handedness: bool) {
        let Some(corners) = frustum_corners(view, projection, flip_handedness) else {
            log::warn!("Skipping frustum gizmo: view-projection matrix is not invertible");
            return;
        };
        for (a, b) in FRUSTUM_EDGES {
            self.draw_line(corners[a], corners[b]);
        }
    }

    /// Draw the frustum of `camera`
    pub fn draw_camera_frustum<C: CameraMatrices + ?Sized>(&mut self, camera: &C, flip_handedness: bool) {
        self.draw_frustum(&camera.view_matrix(), &camera.projection_matrix(), flip_handedness);
    }
}
