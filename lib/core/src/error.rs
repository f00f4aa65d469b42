use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Matrix shape mismatch: expected {expected} scores, got {actual}")]
    MatrixShape { expected: usize, actual: usize },

    #[error("Matrix row {row} has {actual} scores, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Catalog/matrix misaligned: {courses} courses vs {dim}x{dim} matrix")]
    Misaligned { courses: usize, dim: usize },

    #[error("Unsupported artifact version: {0}")]
    ArtifactVersion(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
