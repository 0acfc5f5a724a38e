pub mod aggregate;
pub mod error;
pub mod ops;
pub mod persist;
pub mod snapshot;

use std::sync::Mutex;

use tracing::{error, warn};

use crate::error::StoreError;
use crate::persist::Persist;
use crate::snapshot::Snapshot;

pub struct Store {
    data: Mutex<Snapshot>,
    persist: Box<dyn Persist>,
}

impl Store {
    /// Load whatever the persister has and wrap it. A missing document
    /// starts the store empty; an unreadable one is logged and replaced by
    /// the empty snapshot rather than refusing to start.
    pub fn open(persist: Box<dyn Persist>) -> Self {
        let data = match persist.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => Snapshot::default(),
            Err(e) => {
                warn!("Error loading persisted data, starting empty: {e:#}");
                Snapshot::default()
            }
        };
        Self {
            data: Mutex::new(data),
            persist,
        }
    }

    pub(crate) fn with_data<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Snapshot) -> Result<T, StoreError>,
    {
        let data = self
            .data
            .lock()
            .map_err(|e| StoreError::Internal(format!("store lock poisoned: {e}")))?;
        f(&data)
    }

    /// Transactional boundary for every mutating operation: apply the
    /// mutation, then mirror the whole snapshot to durable storage. A
    /// failed write is logged and swallowed; the in-memory mutation stands.
    pub(crate) fn with_data_mut<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Snapshot) -> Result<T, StoreError>,
    {
        let mut data = self
            .data
            .lock()
            .map_err(|e| StoreError::Internal(format!("store lock poisoned: {e}")))?;
        let out = f(&mut data)?;
        if let Err(e) = self.persist.save(&data) {
            error!("Error saving data: {e:#}");
        }
        Ok(out)
    }
}
