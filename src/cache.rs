//! Load-once memoization of datasets by source path.
//!
//! An analysis session loads its dataset exactly once; every later request
//! for the same path gets the cached [`Dataset`] back without touching the
//! filesystem. The cache is an explicit value, not a global. Clone the
//! returned `Arc` freely; the dataset behind it is immutable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::io::csv::load_dataset;

#[derive(Debug, Default)]
pub struct DatasetCache {
    loaded: RwLock<HashMap<PathBuf, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        DatasetCache::default()
    }

    /// The dataset for `path`, loading it on first request.
    ///
    /// A repeated request returns the already-loaded dataset, so changes
    /// to the underlying file after the first load are not observed; there
    /// is no invalidation. Paths are compared as given, without
    /// canonicalization. A failed load caches nothing.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, LoadError> {
        let path = path.as_ref();
        if let Some(dataset) = self
            .loaded
            .read()
            .expect("dataset cache lock poisoned")
            .get(path)
        {
            debug!("dataset cache hit for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_dataset(path)?);
        debug!(
            "dataset cache stored {} records for {}",
            dataset.len(),
            path.display()
        );
        let mut loaded = self.loaded.write().expect("dataset cache lock poisoned");
        // Keep whichever load won if another caller raced us here.
        Ok(Arc::clone(
            loaded.entry(path.to_path_buf()).or_insert(dataset),
        ))
    }

    /// Whether `path` has already been loaded.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.loaded
            .read()
            .expect("dataset cache lock poisoned")
            .contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.loaded.read().expect("dataset cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
