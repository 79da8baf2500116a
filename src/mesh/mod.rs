//! Indexed triangle meshes.
//!
//! A [`Mesh`] owns four parallel buffers that share one lifetime: vertex
//! positions, vertex normals, texture coordinates and triangle indices.
//! Meshes come from the parametric builders in [`generator`] or from OBJ
//! files via `tobj`.
//!
//! # Invariants
//! - `positions`, `normals` and `tex_coords` have the same length
//! - every index is `< num_vertices()`
//! - `num_indices()` is a multiple of 3

pub mod generator;
pub mod normals;

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    name: String,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh from its buffers.
    ///
    /// Buffers that violate the mesh invariants are kept as given and logged;
    /// see [`Mesh::is_valid`]. The renderer skips triangles that reference
    /// missing vertices.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        tex_coords: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Self {
        let mesh = Self {
            name: name.into(),
            positions,
            normals,
            tex_coords,
            indices,
        };
        if !mesh.is_valid() {
            log::warn!("mesh '{}' violates its invariants", mesh.name);
        }
        mesh
    }

    /// Creates a mesh from positions and indices only; normals are
    /// face-averaged and texture coordinates are zero.
    pub fn from_positions(name: impl Into<String>, positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let normals = normals::face_averaged(&positions, &indices);
        let tex_coords = vec![Vec2::ZERO; positions.len()];
        Self::new(name, positions, normals, tex_coords, indices)
    }

    /// Loads every object of an OBJ file as a separate mesh.
    ///
    /// Faces are triangulated and positions, normals and UVs are unified to a
    /// single index buffer. Objects without normals get face-averaged ones.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>> {
        let path = path.as_ref();
        log::info!("Loading OBJ file: {}", path.display());
        let (models, _materials) = tobj::load_obj(path, &Self::obj_load_options())?;
        Ok(Self::from_obj_models(models))
    }

    /// Like [`Mesh::load_obj`] but reads OBJ text from any buffered reader.
    /// Material libraries referenced by the source are ignored.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Vec<Mesh>> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &Self::obj_load_options(), |_: &Path| {
                Err(tobj::LoadError::OpenFileFailed)
            })?;
        Ok(Self::from_obj_models(models))
    }

    fn obj_load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        }
    }

    fn from_obj_models(models: Vec<tobj::Model>) -> Vec<Mesh> {
        models
            .into_iter()
            .map(|model| {
                let obj = model.mesh;
                let positions: Vec<Vec3> = obj.positions.chunks_exact(3).map(Vec3::from_slice).collect();

                let normals = if obj.normals.len() == obj.positions.len() {
                    obj.normals.chunks_exact(3).map(Vec3::from_slice).collect()
                } else {
                    log::warn!(
                        "OBJ object '{}' has no normals, using face-averaged normals",
                        model.name
                    );
                    normals::face_averaged(&positions, &obj.indices)
                };

                let tex_coords = if obj.texcoords.len() / 2 == positions.len() {
                    obj.texcoords.chunks_exact(2).map(|uv| Vec2::new(uv[0], uv[1])).collect()
                } else {
                    vec![Vec2::ZERO; positions.len()]
                };

                log::debug!(
                    "OBJ object '{}': {} vertices, {} triangles",
                    model.name,
                    positions.len(),
                    obj.indices.len() / 3
                );
                Mesh::new(model.name, positions, normals, tex_coords, obj.indices)
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Checks the buffer-length and index-range invariants.
    pub fn is_valid(&self) -> bool {
        let n = self.positions.len();
        self.normals.len() == n
            && self.tex_coords.len() == n
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < n)
    }

    /// Replaces the normals with face-averaged normals.
    pub fn recompute_normals(&mut self) {
        self.normals = normals::face_averaged(&self.positions, &self.indices);
    }
}
