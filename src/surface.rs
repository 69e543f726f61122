// surface.rs - Host boundary
//
// The animator only ever sees two things: a container it can measure and a
// 2D raster surface it can draw on. The browser host implements both in
// `web`; tests and the native preview tool bring their own.

use crate::color::Color;

/// Pixel dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Something with measurable bounds (the page container)
pub trait Container {
    /// Visible width by full scroll height, or `None` while not mounted
    fn measure(&self) -> Option<Size>;
}

/// Fill/stroke color plus shadow blur radius (0 = no glow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub glow: f32,
}

/// Translation then rotation applied to a local-space figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

/// The subset of a 2D raster context the animator draws with
pub trait Surface {
    /// Resize the backing buffer. Content may be discarded.
    fn set_size(&mut self, size: Size);
    fn size(&self) -> Size;

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    /// Global alpha applied to every following draw
    fn set_alpha(&mut self, alpha: f32);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, brush: Brush);

    /// Segment from the pose origin along its angle
    fn stroke_segment(&mut self, pose: Pose, length: f32, width: f32, brush: Brush);

    /// Closed polygon; `outline` is in local space and multiplied by `scale`
    fn fill_polygon(&mut self, pose: Pose, scale: f32, outline: &[(f32, f32)], brush: Brush);
}
