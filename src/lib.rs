//! # kindred
//!
//! A fast, in-memory course recommendation engine.
//!
//! kindred resolves a free-text query to a course in a fixed catalog via
//! two-phase fuzzy matching, then ranks every other course by a
//! precomputed pairwise similarity score and serves the top-K.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install kindred
//! kindred --catalog models/catalog.json --matrix models/similarity.bin
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     ("Rust Basics".to_string(), "https://example.com/rust".to_string()),
//!     ("Advanced Rust".to_string(), "https://example.com/advanced".to_string()),
//! ]);
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.8],
//!     vec![0.8, 1.0],
//! ]).unwrap();
//!
//! let engine = Engine::new(catalog, matrix).unwrap();
//! let recommendations = engine.recommend_query("rust");
//! assert_eq!(recommendations.len(), 1);
//! ```
//!
//! ## Crate Structure
//!
//! kindred is composed of several crates:
//!
//! - [`kindred-core`](https://docs.rs/kindred-core) - Catalog, similarity matrix, matcher, engine
//! - [`kindred-storage`](https://docs.rs/kindred-storage) - Artifact formats and the one-time load step
//! - [`kindred-api`](https://docs.rs/kindred-api) - REST API
//!
//! ## Features
//!
//! - **Two-Phase Matching**: Substring then token-overlap resolution, first match wins
//! - **Deterministic Ranking**: Stable score-descending order with index tie-breaks
//! - **Immutable State**: Catalog and matrix load once and are shared lock-free
//! - **REST API**: JSON endpoints for recommendation, catalog listing, and health

// Re-export core types
pub use kindred_core::{
    Catalog, Course, Engine, Error, Recommendation, Result, SimilarityMatrix, DEFAULT_TOP_K,
    matcher,
};

// Re-export storage
pub use kindred_storage::{
    load_engine, read_catalog, read_matrix, write_catalog, write_matrix, CourseRecord,
    MatrixArtifact,
};

// Re-export API
pub use kindred_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Course, CourseRecord, Engine, Error, MatrixArtifact, Recommendation, Result,
        RestApi, SimilarityMatrix, DEFAULT_TOP_K, load_engine,
    };
}
