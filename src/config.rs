//! Render settings and their defaults.

use crate::colors::Rgb;
use crate::render::renderer::ShadingMode;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

pub const COLOR_BACKGROUND: Rgb = Rgb::new(0x1E, 0x1E, 0x1E);
pub const COLOR_WIREFRAME: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Output size and drawing options for a [`Renderer`](crate::render::renderer::Renderer).
///
/// ```
/// use softrender::config::RenderSettings;
/// use softrender::render::renderer::ShadingMode;
///
/// let settings = RenderSettings::default()
///     .with_size(320, 240)
///     .with_shading(ShadingMode::Gouraud);
/// assert_eq!(settings.width, 320);
/// assert!(settings.cull_back_faces);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub wire_color: Rgb,
    pub shading: ShadingMode,
    pub cull_back_faces: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: COLOR_BACKGROUND,
            wire_color: COLOR_WIREFRAME,
            shading: ShadingMode::default(),
            cull_back_faces: true,
        }
    }
}

impl RenderSettings {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn with_wire_color(mut self, wire_color: Rgb) -> Self {
        self.wire_color = wire_color;
        self
    }

    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_culling(mut self, cull_back_faces: bool) -> Self {
        self.cull_back_faces = cull_back_faces;
        self
    }

    /// Width divided by height, for building a matching projection.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
