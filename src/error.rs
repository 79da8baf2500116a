//! Error type shared by the fallible parts of the pipeline.
//!
//! Most of the renderer never fails: out-of-bounds writes, zero-length
//! normalization and near-zero `w` divides all degrade silently. Errors are
//! reserved for I/O boundaries and for operations that have no implementation
//! yet, so a caller can never mistake a placeholder for a real result.

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// An OBJ file could not be parsed.
    Obj(tobj::LoadError),
    /// An image file could not be decoded.
    Image(image::ImageError),
    /// Texture data does not match the declared dimensions.
    InvalidTexture { width: u32, height: u32, len: usize },
    /// The named operation is declared but not implemented.
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<tobj::LoadError> for RenderError {
    fn from(err: tobj::LoadError) -> Self {
        RenderError::Obj(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Obj(e) => write!(f, "OBJ load error: {}", e),
            RenderError::Image(e) => write!(f, "image error: {}", e),
            RenderError::InvalidTexture { width, height, len } => write!(
                f,
                "texture data has {} bytes, expected {} for {}x{} RGB",
                len,
                *width as usize * *height as usize * 3,
                width,
                height
            ),
            RenderError::NotImplemented(what) => write!(f, "{} is not implemented", what),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Obj(e) => Some(e),
            RenderError::Image(e) => Some(e),
            RenderError::InvalidTexture { .. } | RenderError::NotImplemented(_) => None,
        }
    }
}
