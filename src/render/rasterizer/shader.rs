//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer owns coverage: the bounding box, edge functions, inside
//! test, barycentric weights and depth test. A shader only turns the weights
//! of a covered pixel into a color, usually by interpolating per-vertex
//! attributes:
//!
//! ```text
//! attr_at_pixel = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂
//! ```

use crate::colors::{Color, Rgb};
use crate::lighting::{gouraud, phong, Light, Material};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::Texture;

/// Per-pixel shading computation.
pub trait PixelShader {
    /// Computes the color of a pixel from its barycentric coordinates
    /// `[λ₀, λ₁, λ₂]`, which sum to 1 inside the triangle.
    fn shade(&self, lambda: [f32; 3]) -> Rgb;
}

#[inline]
fn interpolate_vec3(lambda: [f32; 3], values: &[Vec3; 3]) -> Vec3 {
    values[0] * lambda[0] + values[1] * lambda[1] + values[2] * lambda[2]
}

/// Same color for every pixel.
pub struct FlatShader {
    color: Rgb,
}

impl FlatShader {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> Rgb {
        self.color
    }
}

/// Blends colors computed once per vertex.
pub struct GouraudShader {
    colors: [Color; 3],
}

impl GouraudShader {
    pub fn new(vertex_colors: [Color; 3]) -> Self {
        Self {
            colors: vertex_colors,
        }
    }
}

impl PixelShader for GouraudShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Rgb {
        gouraud::blend(lambda, self.colors).to_rgb()
    }
}

/// Evaluates the Phong model per pixel from interpolated world-space
/// positions and normals.
pub struct PhongShader<'a> {
    positions: [Vec3; 3],
    normals: [Vec3; 3],
    view_pos: Vec3,
    light: &'a Light,
    material: &'a Material,
}

impl<'a> PhongShader<'a> {
    pub fn new(
        positions: [Vec3; 3],
        normals: [Vec3; 3],
        view_pos: Vec3,
        light: &'a Light,
        material: &'a Material,
    ) -> Self {
        Self {
            positions,
            normals,
            view_pos,
            light,
            material,
        }
    }
}

impl PixelShader for PhongShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Rgb {
        let position = interpolate_vec3(lambda, &self.positions);
        // phong::shade renormalizes
        let normal = interpolate_vec3(lambda, &self.normals);
        phong::shade(position, normal, self.view_pos, self.light, self.material).to_rgb()
    }
}

/// Samples a texture at interpolated UV coordinates.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uvs: [Vec2; 3],
    bilinear: bool,
}

impl<'a> TextureShader<'a> {
    /// Nearest-neighbor sampling.
    pub fn new(texture: &'a Texture, uvs: [Vec2; 3]) -> Self {
        Self {
            texture,
            uvs,
            bilinear: false,
        }
    }

    /// Switches to bilinear filtering.
    pub fn bilinear(mut self) -> Self {
        self.bilinear = true;
        self
    }

    #[inline]
    fn interpolate_uv(&self, lambda: [f32; 3]) -> Vec2 {
        self.uvs[0] * lambda[0] + self.uvs[1] * lambda[1] + self.uvs[2] * lambda[2]
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Rgb {
        let uv = self.interpolate_uv(lambda);
        if self.bilinear {
            self.texture.sample_bilinear(uv.x, uv.y)
        } else {
            self.texture.sample(uv.x, uv.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNERS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    #[test]
    fn flat_ignores_weights() {
        let shader = FlatShader::new(Rgb::GREEN);
        assert_eq!(shader.shade([0.2, 0.3, 0.5]), Rgb::GREEN);
    }

    #[test]
    fn gouraud_returns_vertex_colors_at_corners() {
        let shader = GouraudShader::new([
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.0, 1.0, 0.0),
            Color::new(0.0, 0.0, 1.0),
        ]);
        assert_eq!(shader.shade(CORNERS[0]), Rgb::RED);
        assert_eq!(shader.shade(CORNERS[1]), Rgb::GREEN);
        assert_eq!(shader.shade(CORNERS[2]), Rgb::BLUE);
        assert_eq!(shader.shade([0.5, 0.5, 0.0]), Rgb::new(128, 128, 0));
    }

    #[test]
    fn phong_matches_direct_evaluation_at_vertex() {
        let light = Light::default();
        let material = Material::default();
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let normals = [Vec3::Z; 3];
        let eye = Vec3::new(0.0, 0.0, 4.0);
        let shader = PhongShader::new(positions, normals, eye, &light, &material);

        let direct = phong::shade(Vec3::X, Vec3::Z, eye, &light, &material).to_rgb();
        assert_eq!(shader.shade(CORNERS[1]), direct);
    }

    #[test]
    fn texture_shader_samples_interpolated_uv() {
        #[rustfmt::skip]
        let bytes = [
            255, 0, 0,   0, 255, 0,
            0, 0, 255,   255, 255, 255,
        ];
        let texture = Texture::from_rgb8(2, 2, &bytes).unwrap();
        let uvs = [Vec2::new(0.25, 0.25), Vec2::new(0.75, 0.25), Vec2::new(0.25, 0.75)];
        let shader = TextureShader::new(&texture, uvs);

        assert_eq!(shader.shade(CORNERS[0]), Rgb::RED);
        assert_eq!(shader.shade(CORNERS[1]), Rgb::GREEN);
        assert_eq!(shader.shade(CORNERS[2]), Rgb::BLUE);

        let filtered = TextureShader::new(&texture, uvs).bilinear();
        assert_eq!(filtered.shade(CORNERS[0]), Rgb::RED);
    }
}
