//! JSON file implementation of the sales store

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::collaborators::SalesStore;
use crate::app::models::ParsedSale;
use crate::{Error, Result};

/// Stores the full record set as a pretty-printed JSON array
///
/// Each replace writes a temporary file next to the target and renames it
/// over the previous content, so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored records; a missing file reads as an empty store
    pub async fn load(&self) -> Result<Vec<ParsedSale>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io(
                    format!("Failed to read store {}", self.path.display()),
                    e,
                ));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            Error::serialization(
                format!("Store {} is not a JSON record array", self.path.display()),
                e,
            )
        })
    }
}

impl SalesStore for JsonFileStore {
    async fn replace_all(&self, sales: &[ParsedSale]) -> Result<()> {
        let payload = serde_json::to_vec_pretty(sales)
            .map_err(|e| Error::serialization("Failed to encode sales", e))?;

        let target = self.path.clone();
        debug!(
            "Writing {} records ({} bytes) to {}",
            sales.len(),
            payload.len(),
            target.display()
        );

        tokio::task::spawn_blocking(move || write_atomically(&target, &payload))
            .await
            .map_err(|e| Error::storage(format!("Store write task failed: {}", e)))??;

        info!("Replaced store {} with {} records", self.path.display(), sales.len());
        Ok(())
    }
}

fn write_atomically(target: &Path, payload: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .map_err(|e| Error::io(format!("Failed to create {}", dir.display()), e))?;

    let mut file = NamedTempFile::new_in(&dir)
        .map_err(|e| Error::io(format!("Failed to create temp file in {}", dir.display()), e))?;
    file.write_all(payload)
        .map_err(|e| Error::io("Failed to write store payload", e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| Error::io("Failed to flush store payload", e))?;
    file.persist(target).map_err(|e| {
        Error::io(format!("Failed to replace {}", target.display()), e.error)
    })?;

    Ok(())
}
