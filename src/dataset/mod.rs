//! Registry dataset loading
//!
//! The registry is a single JSON array of center records, loaded once at
//! startup and never mutated afterwards. Loading is strict where the file is
//! concerned (missing or malformed input is fatal, the server must not start
//! half-blind) and lenient where individual values are concerned (field
//! normalization lives in the record types, not here).

mod sample;

pub use sample::generate_sample;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::types::ServiceCenter;

/// Errors that stop the dataset from loading.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize the registry JSON array.
pub fn load_dataset(path: &Path) -> Result<Vec<ServiceCenter>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let records: Vec<ServiceCenter> = serde_json::from_str(&raw).map_err(|e| DatasetError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(count = records.len(), path = %path.display(), "Registry dataset loaded");
    Ok(records)
}
