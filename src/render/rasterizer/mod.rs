//! Scan conversion.
//!
//! Two families of rasterizers live here:
//!
//! - Integer primitives ([`line`], [`circle`], [`polygon`]) that only decide
//!   *which* pixels to touch and hand each one to a [`PixelSink`]. The caller
//!   decides what a plot means (write a color, collect points, count).
//! - The shaded triangle rasterizer ([`edgefunction`]) that writes directly to
//!   a [`Framebuffer`](super::framebuffer::Framebuffer) with depth testing and
//!   asks a [`PixelShader`] for every covered pixel's color.

pub mod circle;
pub mod edgefunction;
pub mod line;
pub mod polygon;
pub mod shader;

pub use circle::{draw_circle, fill_circle};
pub use edgefunction::fill_triangle;
pub use line::draw_line;
pub use polygon::{fill_polygon, fill_polygon_clipped, flood_fill};
pub use shader::{FlatShader, GouraudShader, PhongShader, PixelShader, TextureShader};

/// Receives the pixels produced by a scan-conversion routine.
///
/// Implemented for every `FnMut(i32, i32)`, so a closure can be passed
/// directly:
///
/// ```
/// use softrender::render::rasterizer::draw_line;
///
/// let mut points = Vec::new();
/// draw_line((0, 0), (3, 1), &mut |x, y| points.push((x, y)));
/// assert_eq!(points.first(), Some(&(0, 0)));
/// assert_eq!(points.last(), Some(&(3, 1)));
/// ```
pub trait PixelSink {
    fn plot(&mut self, x: i32, y: i32);
}

impl<F: FnMut(i32, i32)> PixelSink for F {
    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        self(x, y)
    }
}
