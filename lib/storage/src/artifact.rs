//! On-disk artifact formats for the catalog and similarity matrix.
//!
//! Both artifacts are produced offline by the training job and read
//! exactly once at startup. Writers go through an atomic rename so a
//! half-written file can never be loaded.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use atomicwrites::{AtomicFile, OverwriteBehavior::AllowOverwrite};
use kindred_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Current matrix artifact version. Bumped on any layout change; readers
/// reject versions they do not know.
pub const MATRIX_ARTIFACT_VERSION: u32 = 1;

/// One catalog entry as stored on disk. A course's index is its position
/// in the artifact array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub url: String,
}

/// Versioned container for the similarity matrix: `scores` is row-major
/// with `dim * dim` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixArtifact {
    pub version: u32,
    pub dim: usize,
    pub scores: Vec<f32>,
}

impl MatrixArtifact {
    #[must_use]
    pub fn new(dim: usize, scores: Vec<f32>) -> Self {
        Self {
            version: MATRIX_ARTIFACT_VERSION,
            dim,
            scores,
        }
    }
}

/// Read the catalog artifact (JSON array of records, stored order).
pub fn read_catalog(path: &Path) -> Result<Vec<CourseRecord>> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::Serialization(e.to_string()))
}

/// Write the catalog artifact atomically.
pub fn write_catalog(path: &Path, records: &[CourseRecord]) -> Result<()> {
    let data =
        serde_json::to_vec_pretty(records).map_err(|e| Error::Serialization(e.to_string()))?;
    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(&data))
        .map_err(std::io::Error::from)?;
    Ok(())
}

/// Read and version-check the matrix artifact (bincode).
pub fn read_matrix(path: &Path) -> Result<MatrixArtifact> {
    let data = std::fs::read(path)?;
    let artifact: MatrixArtifact =
        bincode::deserialize(&data).map_err(|e| Error::Serialization(e.to_string()))?;
    if artifact.version != MATRIX_ARTIFACT_VERSION {
        return Err(Error::ArtifactVersion(artifact.version));
    }
    Ok(artifact)
}

/// Write the matrix artifact atomically.
pub fn write_matrix(path: &Path, artifact: &MatrixArtifact) -> Result<()> {
    let data =
        bincode::serialize(artifact).map_err(|e| Error::Serialization(e.to_string()))?;
    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(&data))
        .map_err(std::io::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let records = vec![
            CourseRecord {
                name: "Rust Basics".to_string(),
                url: "https://e.com/rust".to_string(),
            },
            CourseRecord {
                name: "Python Basics".to_string(),
                url: "https://e.com/python".to_string(),
            },
        ];

        write_catalog(&path, &records).unwrap();
        assert_eq!(read_catalog(&path).unwrap(), records);
    }

    #[test]
    fn test_matrix_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("similarity.bin");

        let artifact = MatrixArtifact::new(2, vec![1.0, 0.4, 0.4, 1.0]);
        write_matrix(&path, &artifact).unwrap();
        assert_eq!(read_matrix(&path).unwrap(), artifact);
    }

    #[test]
    fn test_unknown_matrix_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("similarity.bin");

        let artifact = MatrixArtifact {
            version: 99,
            dim: 1,
            scores: vec![1.0],
        };
        write_matrix(&path, &artifact).unwrap();
        assert!(matches!(
            read_matrix(&path).unwrap_err(),
            Error::ArtifactVersion(99)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(read_catalog(&path).unwrap_err(), Error::Io(_)));
    }
}
