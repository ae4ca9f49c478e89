//! Line sinks
//!
//! The host environment supplies the actual line and text primitives through
//! [`LineSink`]. [`LineBuffer`] is a recording sink that keeps every segment,
//! for hosts that batch lines into a vertex buffer and for inspecting geometry.

use crate::foundation::math::{Vec3, Vec4};
use bytemuck::{Pod, Zeroable};

/// Immediate-mode drawing primitives provided by the host
pub trait LineSink {
    /// Draw a single line segment
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4);

    /// Show a text annotation at `position`.
    ///
    /// Hosts without text support can leave the default, which ignores it.
    fn draw_label(&mut self, position: Vec3, text: &str) {
        let _ = (position, text);
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4) {
        (**self).draw_line(start, end, color);
    }

    fn draw_label(&mut self, position: Vec3, text: &str) {
        (**self).draw_label(position, text);
    }
}

/// A recorded line segment
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    /// Segment start in world space
    pub start: Vec3,
    /// Segment end in world space
    pub end: Vec3,
    /// RGBA color
    pub color: Vec4,
}

impl LineSegment {
    /// Segment length
    pub fn length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }
}

/// A recorded text annotation
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Anchor position in world space
    pub position: Vec3,
    /// Annotation text
    pub text: String,
}

/// Vertex layout for uploading recorded lines as a line list
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in world space
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    fn new(position: &Vec3, color: &Vec4) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color: [color.x, color.y, color.z, color.w],
        }
    }
}

/// Recording line sink
///
/// Keeps segments and labels in emission order until [`clear`](Self::clear)
/// is called, typically once per frame after the host has consumed them.
#[derive(Debug)]
pub struct LineBuffer {
    segments: Vec<LineSegment>,
    labels: Vec<Label>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl LineBuffer {
    /// Create an empty, enabled buffer
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            labels: Vec::new(),
            enabled: true,
        }
    }

    /// Recorded segments in emission order
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Recorded labels in emission order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of recorded segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.labels.is_empty()
    }

    /// Drop all recorded segments and labels
    pub fn clear(&mut self) {
        self.segments.clear();
        self.labels.clear();
    }

    /// Two vertices per segment, line-list order
    pub fn vertices(&self) -> Vec<LineVertex> {
        self.segments
            .iter()
            .flat_map(|s| [LineVertex::new(&s.start, &s.color), LineVertex::new(&s.end, &s.color)])
            .collect()
    }

    /// [`vertices`](Self::vertices) as raw bytes ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for LineBuffer {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4) {
        if !self.enabled {
            return;
        }

        self.segments.push(LineSegment { start, end, color });
    }

    fn draw_label(&mut self, position: Vec3, text: &str) {
        if !self.enabled {
            return;
        }

        self.labels.push(Label {
            position,
            text: text.to_string(),
        });
    }
}
