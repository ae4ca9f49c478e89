//! Gizmo drawing context
//!
//! [`Gizmos`] wraps a host [`LineSink`] together with the state the host would
//! normally keep for immediate-mode gizmos: the current line color and whether
//! text annotations are available. The shape operations live in the sibling
//! modules as further `impl` blocks on this type.

use crate::config::{AxisColors, GizmoConfig};
use crate::draw::sink::LineSink;
use crate::foundation::math::{Vec3, Vec4};

/// Immediate-mode wireframe drawing context
///
/// Every operation is a pure function of its arguments and emits its line
/// segments straight into the sink; nothing is retained between calls.
pub struct Gizmos<'a, S: LineSink + ?Sized> {
    sink: &'a mut S,
    color: Vec4,
    annotations: bool,
    axis_colors: AxisColors,
}

impl<'a, S: LineSink + ?Sized> Gizmos<'a, S> {
    /// Create a context with the default [`GizmoConfig`]
    pub fn new(sink: &'a mut S) -> Self {
        Self::with_config(sink, &GizmoConfig::default())
    }

    /// Create a context using the colors and annotation capability of `config`
    pub fn with_config(sink: &'a mut S, config: &GizmoConfig) -> Self {
        Self {
            sink,
            color: config.default_color,
            annotations: config.annotations,
            axis_colors: config.axis_colors.clone(),
        }
    }

    /// Enable or disable forwarding of labels to the sink
    pub fn with_annotations(mut self, enabled: bool) -> Self {
        self.annotations = enabled;
        self
    }

    /// Whether labels reach the sink
    pub fn annotations_enabled(&self) -> bool {
        self.annotations
    }

    /// Color used by subsequent lines
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Change the color used by subsequent lines
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    /// Colors used by the colored axis marker
    pub fn axis_colors(&self) -> &AxisColors {
        &self.axis_colors
    }

    /// Draw a single line in the current color
    pub fn draw_line(&mut self, start: Vec3, end: Vec3) {
        self.sink.draw_line(start, end, self.color);
    }

    pub(crate) fn draw_line_colored(&mut self, start: Vec3, end: Vec3, color: Vec4) {
        self.sink.draw_line(start, end, color);
    }

    pub(crate) fn draw_label_unchecked(&mut self, position: Vec3, text: &str) {
        self.sink.draw_label(position, text);
    }

    /// Connect consecutive points
    pub(crate) fn draw_polyline(&mut self, points: &[Vec3]) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1]);
        }
    }

    /// Connect consecutive points, then the last back to the first.
    ///
    /// The closing segment is emitted first so the loop starts at the last point.
    pub(crate) fn draw_loop(&mut self, points: &[Vec3]) {
        let Some(&last) = points.last() else {
            return;
        };
        let mut previous = last;
        for &point in points {
            self.draw_line(previous, point);
            previous = point;
        }
    }

    /// Draw `tip -> base ± right` and `tip -> base ± up`
    pub(crate) fn draw_spokes(&mut self, tip: Vec3, base: Vec3, right: Vec3, up: Vec3) {
        self.draw_line(tip, base + right);
        self.draw_line(tip, base - right);
        self.draw_line(tip, base + up);
        self.draw_line(tip, base - up);
    }
}
