//! Persistence module: save/load handler descriptions using bincode.
//!
//! Only the handler's metadata is persisted (path, right flag, csv options).
//! Cached columns are NEVER serialized — they are re-read on activation.

use std::path::Path;

use crate::error::{Error, Result};
use crate::handler::Metadata;

impl Metadata {
    /// Save the description to a binary file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = bincode::serialize(self)?;
        std::fs::write(path, encoded).map_err(|e| Error::io(path, e))?;
        Ok(())
    }

    /// Load a description from a binary file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let metadata: Self = bincode::deserialize(&data)?;
        Ok(metadata)
    }
}
