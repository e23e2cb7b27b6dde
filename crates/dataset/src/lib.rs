//! # Marquee Dataset Loader
//!
//! Reads the release dataset once and turns it into the enriched
//! `MovieTable` every view is computed from.
//!
//! - `load_and_process`: read a file and derive every column. No caching.
//! - `load_cached` / `DatasetCache`: the same, at most once per path for the
//!   life of the process.

pub mod cache;
pub mod error;
pub mod reader;
pub mod transform;

use core_types::MovieTable;
use std::path::Path;
use tracing::info;

pub use cache::{load_cached, DatasetCache};
pub use error::LoadError;
pub use reader::{RawRow, REQUIRED_COLUMNS};
pub use transform::{enrich, NOT_RATED, UNKNOWN_GENRE};

/// Reads the file at `path` and returns the enriched table.
pub fn load_and_process(path: impl AsRef<Path>) -> Result<MovieTable, LoadError> {
    let path = path.as_ref();
    let rows = reader::read_path(path)?;
    let table = enrich(rows)?;
    info!(path = %path.display(), rows = table.len(), "Dataset loaded.");
    Ok(table)
}

/// Same as [`load_and_process`] for a source already in memory.
pub fn load_from_bytes(bytes: impl Into<Vec<u8>>) -> Result<MovieTable, LoadError> {
    enrich(reader::read_bytes(bytes.into())?)
}
