//! Framebuffer, scan conversion and the mesh renderer.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::Framebuffer;
pub use renderer::{RenderStats, Renderer, Scene, ShadingMode};
