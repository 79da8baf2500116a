//! Mesh rendering.
//!
//! [`Renderer::draw_mesh`] runs one mesh through the whole pipeline:
//!
//! ```text
//! model space ──model──► world ──cull──► view_projection ──÷w──► NDC ──viewport──► screen
//!                          │                                                         │
//!                          └──────────── lighting (world space) ─────────────────────┤
//!                                                                                    ▼
//!                                                        wireframe / fill_triangle + shader
//! ```
//!
//! Lighting happens in world space, so shaders receive world positions and
//! normals while coverage uses the projected screen positions. All scene
//! state arrives through a [`Scene`] value; the renderer itself only holds
//! [`RenderSettings`].

use crate::camera::Camera;
use crate::clipping::{clip_line, is_back_face, ClipRect};
use crate::colors::Color;
use crate::config::RenderSettings;
use crate::lighting::{gouraud, phong, Light, Material, AMBIENT_STRENGTH};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::{Vec4, W_EPSILON};
use crate::mesh::Mesh;
use crate::render::framebuffer::{Framebuffer, FAR_DEPTH};
use crate::render::rasterizer::{fill_triangle, FlatShader, GouraudShader, PhongShader};

/// How triangles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Clipped Bresenham edges in the wire color, no depth test.
    Wireframe,
    /// One Phong evaluation per triangle at its centroid with the face normal.
    Flat,
    /// Diffuse lighting per vertex, blended across the triangle.
    Gouraud,
    /// Phong lighting per pixel from interpolated normals.
    #[default]
    Phong,
}

impl std::fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadingMode::Wireframe => write!(f, "Wireframe"),
            ShadingMode::Flat => write!(f, "Flat"),
            ShadingMode::Gouraud => write!(f, "Gouraud"),
            ShadingMode::Phong => write!(f, "Phong"),
        }
    }
}

/// Everything a draw call needs to know about the world besides the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scene {
    pub camera: Camera,
    pub light: Light,
    pub material: Material,
}

impl Scene {
    pub fn new(camera: Camera, light: Light, material: Material) -> Self {
        Self {
            camera,
            light,
            material,
        }
    }
}

/// Counters for one [`Renderer::draw_mesh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Triangles in the mesh.
    pub triangles: usize,
    /// Triangles rejected by back-face culling.
    pub culled: usize,
    /// Triangles discarded because a vertex was behind the camera.
    pub behind_camera: usize,
    /// Triangles skipped because an index has no position or normal.
    pub invalid: usize,
    /// Triangles handed to the rasterizer.
    pub drawn: usize,
    /// Pixels written (filled modes only).
    pub pixels: usize,
}

/// A triangle after the vertex stage.
struct ProcessedTriangle {
    world: [Vec3; 3],
    normals: [Vec3; 3],
    screen: [Vec3; 3],
}

pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    /// A framebuffer sized to the settings and cleared to the background.
    pub fn create_framebuffer(&self) -> Framebuffer {
        let mut fb = Framebuffer::new(self.settings.width, self.settings.height);
        self.clear(&mut fb);
        fb
    }

    /// Clears color to the background and depth to the far plane.
    pub fn clear(&self, framebuffer: &mut Framebuffer) {
        framebuffer.clear(self.settings.background);
        framebuffer.clear_depth(FAR_DEPTH);
    }

    /// Maps NDC to pixel coordinates and depth to `[0, 1]`.
    ///
    /// `x` runs left to right and `y` top to bottom, so NDC `+y` (up) maps to
    /// row 0.
    pub fn viewport(ndc: Vec3, width: u32, height: u32) -> Vec3 {
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * width as f32,
            (1.0 - ndc.y) * 0.5 * height as f32,
            ndc.z * 0.5 + 0.5,
        )
    }

    /// Projects a world-space point to screen space, or `None` if it is on or
    /// behind the camera plane.
    fn project(view_projection: &Mat4, point: Vec3, width: u32, height: u32) -> Option<Vec3> {
        let clip = *view_projection * Vec4::point(point);
        if clip.w <= W_EPSILON {
            return None;
        }
        Some(Self::viewport(clip.to_vec3_perspective(), width, height))
    }

    /// Draws `mesh` transformed by `model` into `framebuffer`.
    ///
    /// Normals are transformed with [`Mat4::multiply_vector`] and renormalized,
    /// which is exact for rotations and uniform scale.
    pub fn draw_mesh(
        &self,
        framebuffer: &mut Framebuffer,
        mesh: &Mesh,
        model: &Mat4,
        scene: &Scene,
    ) -> RenderStats {
        let mut stats = RenderStats {
            triangles: mesh.num_triangles(),
            ..RenderStats::default()
        };

        let (width, height) = (framebuffer.width(), framebuffer.height());
        let view_projection = scene.camera.view_projection();
        let eye = scene.camera.position();

        for [a, b, c] in mesh.triangles() {
            let idx = [a as usize, b as usize, c as usize];
            let (Some(positions), Some(normals)) =
                (gather(mesh.positions(), idx), gather(mesh.normals(), idx))
            else {
                stats.invalid += 1;
                continue;
            };
            let world = positions.map(|p| model.multiply_point(p));

            if self.settings.cull_back_faces && is_back_face(world[0], world[1], world[2], eye) {
                stats.culled += 1;
                continue;
            }

            let projected = world.map(|p| Self::project(&view_projection, p, width, height));
            let screen = match projected {
                [Some(s0), Some(s1), Some(s2)] => [s0, s1, s2],
                _ => {
                    stats.behind_camera += 1;
                    continue;
                }
            };

            let triangle = ProcessedTriangle {
                world,
                normals: normals.map(|n| model.multiply_vector(n).normalize()),
                screen,
            };
            stats.drawn += 1;
            stats.pixels += self.draw_triangle(framebuffer, &triangle, scene);
        }

        log::debug!(
            "{} '{}': {} triangles, {} culled, {} behind camera, {} invalid, {} drawn, {} pixels",
            self.settings.shading,
            mesh.name(),
            stats.triangles,
            stats.culled,
            stats.behind_camera,
            stats.invalid,
            stats.drawn,
            stats.pixels
        );
        stats
    }

    fn draw_triangle(&self, framebuffer: &mut Framebuffer, tri: &ProcessedTriangle, scene: &Scene) -> usize {
        let eye = scene.camera.position();
        match self.settings.shading {
            ShadingMode::Wireframe => {
                self.draw_wireframe(framebuffer, &tri.screen);
                0
            }
            ShadingMode::Flat => {
                let [p0, p1, p2] = tri.world;
                let centroid = (p0 + p1 + p2) / 3.0;
                let normal = (p1 - p0).cross(p2 - p0);
                let color = phong::shade(centroid, normal, eye, &scene.light, &scene.material);
                fill_triangle(framebuffer, tri.screen, &FlatShader::new(color.to_rgb()))
            }
            ShadingMode::Gouraud => {
                let colors = [0, 1, 2].map(|i| {
                    gouraud_vertex_color(tri.world[i], tri.normals[i], &scene.light, &scene.material)
                });
                fill_triangle(framebuffer, tri.screen, &GouraudShader::new(colors))
            }
            ShadingMode::Phong => {
                let shader = PhongShader::new(tri.world, tri.normals, eye, &scene.light, &scene.material);
                fill_triangle(framebuffer, tri.screen, &shader)
            }
        }
    }

    fn draw_wireframe(&self, framebuffer: &mut Framebuffer, screen: &[Vec3; 3]) {
        let rect = ClipRect::from_size(framebuffer.width(), framebuffer.height());
        let pixel = |v: Vec3| (v.x as i32, v.y as i32);

        for i in 0..3 {
            let from = pixel(screen[i]);
            let to = pixel(screen[(i + 1) % 3]);
            if let Some((from, to)) = clip_line(from, to, &rect) {
                framebuffer.draw_line(from, to, self.settings.wire_color);
            }
        }
    }
}

/// The three elements of `buffer` at `idx`, or `None` if any is missing.
fn gather(buffer: &[Vec3], idx: [usize; 3]) -> Option<[Vec3; 3]> {
    Some([*buffer.get(idx[0])?, *buffer.get(idx[1])?, *buffer.get(idx[2])?])
}

/// Gouraud vertex color tinted by the material: the diffuse term scaled by
/// the light intensity plus the ambient term.
fn gouraud_vertex_color(position: Vec3, normal: Vec3, light: &Light, material: &Material) -> Color {
    let lit = gouraud::vertex_color(position, normal, light.position, light.color * light.intensity);
    (material.diffuse * lit + material.ambient * AMBIENT_STRENGTH).clamp01()
}
