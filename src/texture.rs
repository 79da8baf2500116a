//! 2D RGB textures with repeat addressing.
//!
//! Texels are stored row-major starting at the top-left corner. UV coordinates
//! are wrapped into `[0, 1)` with Euclidean modulo, so negative coordinates
//! repeat the same way positive ones do.

use std::path::Path;

use crate::colors::Rgb;
use crate::error::{RenderError, Result};

/// A 2D texture of 8-bit RGB texels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Creates a texture filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            data: vec![color; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates a texture from tightly packed RGB bytes (`width * height * 3`).
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if width == 0 || height == 0 || bytes.len() != expected {
            return Err(RenderError::InvalidTexture {
                width,
                height,
                len: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Loads a texture from an image file (PNG, JPG, BMP, ...). Alpha is dropped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path.as_ref())?.to_rgb8();
        let (width, height) = img.dimensions();
        log::debug!(
            "loaded texture {} ({}x{})",
            path.as_ref().display(),
            width,
            height
        );
        Self::from_rgb8(width, height, img.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn texel(&self, x: u32, y: u32) -> Rgb {
        self.data[(y * self.width + x) as usize]
    }

    /// Samples the texel containing `(u, v)` (nearest neighbor).
    ///
    /// `(0, 0)` is the top-left texel. Empty textures sample as black.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Rgb {
        if self.data.is_empty() {
            return Rgb::BLACK;
        }
        let u = u.rem_euclid(1.0);
        let v = v.rem_euclid(1.0);

        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        self.texel(x, y)
    }

    /// Samples `(u, v)` with bilinear filtering between the four nearest
    /// texel centers. Neighbor indices are clamped to the texture edge.
    pub fn sample_bilinear(&self, u: f32, v: f32) -> Rgb {
        if self.data.is_empty() {
            return Rgb::BLACK;
        }
        let u = u.rem_euclid(1.0);
        let v = v.rem_euclid(1.0);

        let fx = u * self.width as f32 - 0.5;
        let fy = v * self.height as f32 - 0.5;
        let (x0f, y0f) = (fx.floor(), fy.floor());
        let (tx, ty) = (fx - x0f, fy - y0f);

        let max_x = self.width as i64 - 1;
        let max_y = self.height as i64 - 1;
        let clamp_x = |x: i64| x.clamp(0, max_x) as u32;
        let clamp_y = |y: i64| y.clamp(0, max_y) as u32;
        let (x0, y0) = (x0f as i64, y0f as i64);

        let c00 = self.texel(clamp_x(x0), clamp_y(y0)).to_color();
        let c10 = self.texel(clamp_x(x0 + 1), clamp_y(y0)).to_color();
        let c01 = self.texel(clamp_x(x0), clamp_y(y0 + 1)).to_color();
        let c11 = self.texel(clamp_x(x0 + 1), clamp_y(y0 + 1)).to_color();

        let top = c00.lerp(c10, tx);
        let bottom = c01.lerp(c11, tx);
        top.lerp(bottom, ty).to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 checker: black white / white black.
    fn checker() -> Texture {
        #[rustfmt::skip]
        let bytes = [
            0, 0, 0,        255, 255, 255,
            255, 255, 255,  0, 0, 0,
        ];
        Texture::from_rgb8(2, 2, &bytes).unwrap()
    }

    #[test]
    fn nearest_sampling_picks_containing_texel() {
        let tex = checker();
        assert_eq!(tex.sample(0.25, 0.25), Rgb::BLACK);
        assert_eq!(tex.sample(0.75, 0.25), Rgb::WHITE);
        assert_eq!(tex.sample(0.25, 0.75), Rgb::WHITE);
        assert_eq!(tex.sample(0.75, 0.75), Rgb::BLACK);
    }

    #[test]
    fn sampling_wraps_outside_unit_square() {
        let tex = checker();
        assert_eq!(tex.sample(1.25, 0.25), tex.sample(0.25, 0.25));
        assert_eq!(tex.sample(-0.25, 0.25), tex.sample(0.75, 0.25));
        assert_eq!(tex.sample(0.25, -3.75), tex.sample(0.25, 0.25));
    }

    #[test]
    fn bilinear_blends_between_texel_centers() {
        let tex = checker();
        // Exactly between all four texel centers
        let mid = tex.sample_bilinear(0.5, 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 128));
        // At a texel center the texel itself comes back
        assert_eq!(tex.sample_bilinear(0.25, 0.25), Rgb::BLACK);
    }

    #[test]
    fn solid_texture_is_uniform() {
        let tex = Texture::solid(4, 3, Rgb::RED);
        assert_eq!(tex.width(), 4);
        assert_eq!(tex.height(), 3);
        assert_eq!(tex.sample(0.9, 0.1), Rgb::RED);
        assert_eq!(tex.sample_bilinear(0.3, 0.6), Rgb::RED);
    }

    #[test]
    fn mismatched_data_is_rejected() {
        let err = Texture::from_rgb8(2, 2, &[0; 5]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidTexture {
                width: 2,
                height: 2,
                len: 5
            }
        ));
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let err = Texture::from_file("/no/such/texture.png").unwrap_err();
        assert!(matches!(err, RenderError::Image(_)));
    }
}
