//! Time-boxed dataset cache.
//!
//! The engine stays a pure function of whatever snapshot it receives;
//! memoizing the expensive part (reading and validating the CSV files)
//! lives here, keyed by dataset identity with an explicit expiry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use theft_trends_records_models::VehicleType;

use crate::DatasetError;
use crate::load::Dataset;

/// Default time-to-live for cached snapshots: two hours.
pub const DEFAULT_TTL: Duration = Duration::from_secs(7200);

struct CacheEntry {
    loaded_at: Instant,
    dataset: Arc<Dataset>,
}

/// Caches loaded [`Dataset`] snapshots keyed by `(vehicle type, data
/// directory)`, reloading once an entry is older than the TTL.
pub struct DatasetCache {
    ttl: Duration,
    entries: BTreeMap<(VehicleType, PathBuf), CacheEntry>,
}

impl DatasetCache {
    /// Creates a cache with the given time-to-live.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the cached snapshot for `(vehicle_type, data_dir)`,
    /// loading from disk if it is missing or expired.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if a reload fails. A failed reload
    /// leaves no stale entry behind.
    pub fn get_or_load(
        &mut self,
        data_dir: &Path,
        vehicle_type: VehicleType,
    ) -> Result<Arc<Dataset>, DatasetError> {
        self.get_or_load_with(data_dir, vehicle_type, || {
            Dataset::load(data_dir, vehicle_type).map(Arc::new)
        })
    }

    /// Like [`get_or_load`](Self::get_or_load) but with an explicit
    /// loader, so callers (and tests) control where snapshots come from.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the loader returns.
    pub fn get_or_load_with(
        &mut self,
        data_dir: &Path,
        vehicle_type: VehicleType,
        loader: impl FnOnce() -> Result<Arc<Dataset>, DatasetError>,
    ) -> Result<Arc<Dataset>, DatasetError> {
        let key = (vehicle_type, data_dir.to_path_buf());

        if let Some(entry) = self.entries.get(&key) {
            if entry.loaded_at.elapsed() < self.ttl {
                log::debug!("dataset cache hit for {vehicle_type}");
                return Ok(Arc::clone(&entry.dataset));
            }
            log::debug!("dataset cache entry for {vehicle_type} expired");
            self.entries.remove(&key);
        }

        let dataset = loader()?;
        self.entries.insert(
            key,
            CacheEntry {
                loaded_at: Instant::now(),
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drops all cached snapshots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
