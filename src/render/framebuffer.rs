//! Owned color + depth framebuffer with BMP export.
//!
//! The color buffer holds `width * height` RGB triples (3 bytes per pixel,
//! row-major, top row first). The depth buffer holds one f32 per pixel.
//!
//! # Depth Buffer
//!
//! Smaller values are closer to the camera. A cleared buffer holds `1.0`,
//! the far plane, so any fragment inside the view volume passes its first
//! test.
//!
//! # BMP Layout
//!
//! ```text
//! offset  size  field
//!      0     2  "BM"
//!      2     4  file size (54 + w*h*3, row padding not counted)
//!      6     4  reserved (0)
//!     10     4  pixel data offset (54)
//!     14     4  info header size (40)
//!     18     4  width
//!     22     4  height (positive: rows stored bottom-up)
//!     26     2  planes (1)
//!     28     2  bits per pixel (24)
//!     30    24  compression, image size, resolution, palette (all 0)
//!     54     -  BGR rows, bottom row first, each padded to 4 bytes
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::clipping::ClipRect;
use crate::colors::Rgb;
use crate::render::rasterizer::{circle, line, polygon};

/// Depth of a cleared pixel.
pub const FAR_DEPTH: f32 = 1.0;

const BMP_FILE_HEADER_SIZE: u32 = 14;
const BMP_INFO_HEADER_SIZE: u32 = 40;
const BMP_HEADER_SIZE: u32 = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE;

/// Owns the color and depth buffers of one image.
///
/// Dimensions are fixed at construction. Every accessor is bounds checked:
/// writes outside the image are ignored and reads return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    color: Vec<u8>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Creates a black framebuffer with every depth at [`FAR_DEPTH`].
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color: vec![0; size * 3],
            depth: vec![FAR_DEPTH; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Fills the color buffer with `color`. Depth is left untouched.
    pub fn clear(&mut self, color: Rgb) {
        for px in self.color.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Fills the depth buffer with `value`.
    pub fn clear_depth(&mut self, value: f32) {
        self.depth.fill(value);
    }

    /// Writes a pixel without depth testing. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.color[i * 3..i * 3 + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| {
            let px = &self.color[i * 3..i * 3 + 3];
            Rgb::new(px[0], px[1], px[2])
        })
    }

    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    #[inline]
    pub fn set_depth(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.index(x, y) {
            self.depth[i] = value;
        }
    }

    /// Depth test: if `depth` is strictly nearer than the stored value, stores
    /// it and returns true. Out-of-bounds coordinates return false.
    #[inline]
    pub fn test_depth(&mut self, x: i32, y: i32, depth: f32) -> bool {
        match self.index(x, y) {
            Some(i) if depth < self.depth[i] => {
                self.depth[i] = depth;
                true
            }
            _ => false,
        }
    }

    /// Raw RGB bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.color
    }

    // =========================================================================
    // Solid-color drawing
    // =========================================================================

    /// Draws a Bresenham line between two pixels.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        line::draw_line(from, to, &mut |x, y| self.set_pixel(x, y, color));
    }

    /// Draws a circle outline.
    pub fn draw_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb) {
        circle::draw_circle(center, radius, &mut |x, y| self.set_pixel(x, y, color));
    }

    /// Draws a filled disc.
    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb) {
        circle::fill_circle(center, radius, &mut |x, y| self.set_pixel(x, y, color));
    }

    /// Fills a polygon with the even-odd rule, clipped to the buffer.
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) {
        let clip = ClipRect::from_size(self.width, self.height);
        polygon::fill_polygon_clipped(points, &clip, &mut |x, y| self.set_pixel(x, y, color));
    }

    // =========================================================================
    // BMP export
    // =========================================================================

    /// Encodes the color buffer as a 24-bit uncompressed BMP.
    pub fn to_bmp_bytes(&self) -> Vec<u8> {
        let row_bytes = self.width as usize * 3;
        let padding = (4 - row_bytes % 4) % 4;
        let pixel_bytes = (row_bytes + padding) * self.height as usize;
        // The size field counts unpadded pixel data
        let file_size = BMP_HEADER_SIZE + self.width * self.height * 3;

        let mut out = Vec::with_capacity(BMP_HEADER_SIZE as usize + pixel_bytes);

        // File header
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&BMP_HEADER_SIZE.to_le_bytes());

        // Info header
        out.extend_from_slice(&BMP_INFO_HEADER_SIZE.to_le_bytes());
        out.extend_from_slice(&(self.width as i32).to_le_bytes());
        out.extend_from_slice(&(self.height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&[0u8; 24]);

        for row in self.color.chunks_exact(row_bytes.max(1)).rev() {
            for px in row.chunks_exact(3) {
                out.extend_from_slice(&[px[2], px[1], px[0]]);
            }
            out.extend(std::iter::repeat(0u8).take(padding));
        }

        out
    }

    /// Writes the color buffer to `path` as a BMP file.
    ///
    /// The image is fully encoded before the file is created, so an encoding
    /// step never leaves a partial file behind.
    pub fn save_bmp<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = self.to_bmp_bytes();
        let mut file = File::create(path.as_ref())?;
        file.write_all(&bytes)?;
        log::info!(
            "wrote {}x{} BMP to {} ({} bytes)",
            self.width,
            self.height,
            path.as_ref().display(),
            bytes.len()
        );
        Ok(())
    }
}
