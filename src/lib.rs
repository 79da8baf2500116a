//! A CPU software 3D rendering pipeline.
//!
//! Everything runs on the CPU in a single thread and renders into an owned
//! [`Framebuffer`] that can be written out as a BMP file.
//!
//! # Quick Start
//!
//! ```no_run
//! use softrender::prelude::*;
//!
//! let renderer = Renderer::new(RenderSettings::default().with_size(320, 240));
//! let mut framebuffer = renderer.create_framebuffer();
//!
//! let mut scene = Scene::default();
//! scene.camera.set_projection(45.0, 320.0 / 240.0, 0.1, 100.0);
//!
//! let torus = generate_torus(1.0, 0.4, 48, 24);
//! renderer.draw_mesh(&mut framebuffer, &torus, &Mat4::rotation_x(0.6), &scene);
//! framebuffer.save_bmp("torus.bmp")?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod camera;
pub mod clipping;
pub mod colors;
pub mod config;
pub mod error;
pub mod lighting;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod texture;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use config::RenderSettings;
pub use error::{RenderError, Result};
pub use mesh::Mesh;
pub use projection::Projection;
pub use render::{Framebuffer, RenderStats, Renderer, Scene, ShadingMode};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use softrender::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::Camera;
    pub use crate::projection::Projection;

    // Colors
    pub use crate::colors::{Color, Rgb};

    // Config
    pub use crate::config::RenderSettings;

    // Lighting
    pub use crate::lighting::{Light, Material};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Meshes
    pub use crate::mesh::generator::{generate_cube, generate_sphere, generate_torus};
    pub use crate::mesh::Mesh;

    // Rendering
    pub use crate::render::framebuffer::Framebuffer;
    pub use crate::render::renderer::{RenderStats, Renderer, Scene, ShadingMode};
    pub use crate::texture::Texture;

    // Transform
    pub use crate::transform::Transform;
}
