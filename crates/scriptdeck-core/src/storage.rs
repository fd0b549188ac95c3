//! File persistence helpers
//!
//! Both the registry and the settings file are small JSON documents that are
//! rewritten in full on every mutation. Writes go through a sibling temp file
//! that is synced and renamed over the target, so a reader never observes a
//! half-written document.

use crate::error::{DeckError, DeckResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Read a file to a string, returning `None` if it does not exist
pub async fn read_optional(path: &Path) -> DeckResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DeckError::storage_with_path(
            format!("Failed to read {}: {}", path.display(), e),
            path.display().to_string(),
        )),
    }
}

/// Atomically replace `path` with `contents`
pub async fn write_atomic(path: &Path, contents: &str) -> DeckResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| {
                DeckError::storage_with_path(
                    format!("Failed to create directory {}: {}", parent.display(), e),
                    parent.display().to_string(),
                )
            })?;
        }
    }

    let temp_path = temp_sibling(path);
    let write_result = async {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)
            .await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(e) = write_result {
        // Leave the previous document in place; only the temp file is discarded.
        let _ = fs::remove_file(&temp_path).await;
        return Err(DeckError::storage_with_path(
            format!("Failed to write {}: {}", path.display(), e),
            path.display().to_string(),
        ));
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
