use std::path::Path;

use kindred_core::{Catalog, Engine, Result, SimilarityMatrix};
use tracing::info;

use crate::artifact::{read_catalog, read_matrix};

/// One-time load step: read both artifacts and assemble the engine.
///
/// Called before any request is served; every error here is a startup
/// failure the caller must treat as fatal. The alignment between catalog
/// length and matrix dimension is checked in [`Engine::new`].
pub fn load_engine(catalog_path: &Path, matrix_path: &Path) -> Result<Engine> {
    let records = read_catalog(catalog_path)?;
    let artifact = read_matrix(matrix_path)?;

    let catalog = Catalog::new(
        records
            .into_iter()
            .map(|record| (record.name, record.url))
            .collect(),
    );
    let matrix = SimilarityMatrix::new(artifact.dim, artifact.scores)?;

    let engine = Engine::new(catalog, matrix)?;
    info!(
        courses = engine.catalog().len(),
        "catalog and similarity matrix loaded"
    );
    Ok(engine)
}
