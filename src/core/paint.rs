use glam::DVec2;
use std::fmt;

/// Straight (non-premultiplied) colour with 8-bit channels and a 0..1 alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// Formats as a CSS `rgba(...)` colour, the form canvas fill/stroke styles take.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// The small set of 2D drawing primitives the animations need.
///
/// The browser implementation wraps a `CanvasRenderingContext2d`; tests use a
/// recorder to check what a frame draws and in which order.
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgba, line_width: f64);
}
