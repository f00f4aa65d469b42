//! # kindred Storage
//!
//! Artifact layer for the kindred course recommender: the on-disk formats
//! for the precomputed catalog and similarity matrix, and the one-time
//! load step that turns them into a ready [`kindred_core::Engine`].

pub mod artifact;
pub mod loader;

pub use artifact::{
    read_catalog, read_matrix, write_catalog, write_matrix, CourseRecord, MatrixArtifact,
    MATRIX_ARTIFACT_VERSION,
};
pub use loader::load_engine;
