//! # kindred Core
//!
//! Core library for the kindred course recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Course`] - A catalog entry with a stable index, name, and URL
//! - [`Catalog`] - Immutable ordered collection of courses
//! - [`SimilarityMatrix`] - Precomputed pairwise similarity scores
//! - [`matcher`] - Two-phase fuzzy resolution of free-text queries
//! - [`Engine`] - Top-K ranking of courses against a resolved seed
//!
//! ## Example
//!
//! ```rust
//! use kindred_core::{Catalog, Engine, SimilarityMatrix};
//!
//! let catalog = Catalog::new(vec![
//!     ("Rust Basics".to_string(), "https://example.com/rust".to_string()),
//!     ("Advanced Rust".to_string(), "https://example.com/advanced".to_string()),
//!     ("Python Basics".to_string(), "https://example.com/python".to_string()),
//! ]);
//!
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.8, 0.3],
//!     vec![0.8, 1.0, 0.2],
//!     vec![0.3, 0.2, 1.0],
//! ]).unwrap();
//!
//! let engine = Engine::new(catalog, matrix).unwrap();
//! let recommendations = engine.recommend_query("rust");
//! assert_eq!(recommendations[0].name, "Advanced Rust");
//! ```

pub mod catalog;
pub mod course;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod matrix;

pub use catalog::Catalog;
pub use course::{Course, Recommendation};
pub use engine::{Engine, DEFAULT_TOP_K};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
