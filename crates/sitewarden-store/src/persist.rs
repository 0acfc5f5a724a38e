use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::snapshot::Snapshot;

/// Storage seam for the store: one whole-document load at startup, one
/// whole-document save per mutating call. Swapping this for an embedded
/// database touches nothing above it.
pub trait Persist: Send + Sync {
    /// `Ok(None)` means no document exists yet.
    fn load(&self) -> Result<Option<Snapshot>>;

    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Whole-file JSON persistence, pretty-printed with two-space indent so the
/// on-disk document stays diffable and compatible with older data files.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persist for JsonFile {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw)?;
        info!("Loaded store from {}", self.path.display());
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory only; nothing survives the process. Used by tests.
pub struct Ephemeral;

impl Persist for Ephemeral {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(None)
    }

    fn save(&self, _snapshot: &Snapshot) -> Result<()> {
        Ok(())
    }
}
