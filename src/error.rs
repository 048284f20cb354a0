//! Error types for scene loading and output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a scene or writing an image. Intersection and
/// shading queries never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A geometry or output file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `v` or `f` record could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A triangle refers to a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidIndex {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },

    /// No loaded object has any extent, so there is nothing to frame.
    #[error("scene contains no bounded geometry")]
    EmptyScene,

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for loading and output operations.
pub type Result<T> = std::result::Result<T, Error>;
