//! Rectangles, crosshairs, axis markers and labels

use crate::draw::gizmos::Gizmos;
use crate::draw::sink::LineSink;
use crate::foundation::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the XY plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X
    pub x: f32,
    /// Minimum Y
    pub y: f32,
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its minimum corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle spanning two corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Minimum corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }
}

impl<S: LineSink + ?Sized> Gizmos<'_, S> {
    /// Draw the outline of `rect` in the z = 0 plane.
    pub fn draw_wire_rect(&mut self, rect: &Rect) {
        let (min, max) = (rect.min(), rect.max());
        let corners = [
            Vec3::new(min.x, min.y, 0.0),
            Vec3::new(min.x, max.y, 0.0),
            Vec3::new(max.x, max.y, 0.0),
            Vec3::new(max.x, min.y, 0.0),
        ];
        for i in 0..corners.len() {
            self.draw_line(corners[i], corners[(i + 1) % corners.len()]);
        }
    }

    /// Draw three lines of length `size` crossing at `position`.
    pub fn draw_cross(&mut self, position: Vec3, size: f32) {
        let half = size * 0.5;
        for direction in [Vec3::x(), Vec3::y(), Vec3::z()] {
            self.draw_line(position - direction * half, position + direction * half);
        }
    }

    /// Draw the X, Y and Z axes from `position`, each `length` long.
    ///
    /// With `colored` the lines use the per-axis colors; otherwise the
    /// current color. The current color is left unchanged either way.
    pub fn draw_axis(&mut self, position: Vec3, length: f32, colored: bool) {
        for (index, direction) in [Vec3::x(), Vec3::y(), Vec3::z()].into_iter().enumerate() {
            let end = position + direction * length;
            if colored {
                let color = self.axis_colors().get(index);
                self.draw_line_colored(position, end, color);
            } else {
                self.draw_line(position, end);
            }
        }
    }

    /// Show `text` at `position`. Does nothing unless annotations are enabled.
    pub fn draw_label(&mut self, position: Vec3, text: &str) {
        if !self.annotations_enabled() {
            log::trace!("Dropping label {text:?}: annotations disabled");
            return;
        }
        self.draw_label_unchecked(position, text);
    }
}
