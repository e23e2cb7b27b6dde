use crate::error::LoadError;
use crate::load_and_process;
use core_types::MovieTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{debug, info};

static GLOBAL: OnceLock<DatasetCache> = OnceLock::new();

/// Holds enriched tables keyed by source path.
///
/// Each path is loaded at most once; later lookups hand back the same `Arc`.
/// Entries are never invalidated. A failed load stores nothing, so the next
/// call retries.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<MovieTable>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance, created on first use.
    pub fn global() -> &'static DatasetCache {
        GLOBAL.get_or_init(DatasetCache::new)
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<MovieTable>, LoadError> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        // The lock is held across the load so concurrent callers never load twice.
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(table) = entries.get(&key) {
            debug!(path = %key.display(), "Dataset served from cache.");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load_and_process(path)?);
        entries.insert(key.clone(), Arc::clone(&table));
        info!(path = %key.display(), rows = table.len(), "Dataset cached.");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads `path` through the process-wide cache.
pub fn load_cached(path: impl AsRef<Path>) -> Result<Arc<MovieTable>, LoadError> {
    DatasetCache::global().get_or_load(path.as_ref())
}
