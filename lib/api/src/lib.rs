//! # kindred API
//!
//! JSON-over-HTTP surface for the kindred course recommender. All
//! handlers share one read-only [`kindred_core::Engine`] snapshot.

pub mod rest;

pub use rest::{RestApi, EMPTY_QUERY_MESSAGE, NO_MATCH_MESSAGE};
