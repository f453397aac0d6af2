//! Disk storage for uploaded files
//!
//! Files land in the configured upload directory under a generated unique
//! name that preserves the original extension, e.g. `photo-<uuid>.png`.

use std::path::{Path, PathBuf};

use slotbook_domain::{Result, SlotbookError, StoredFileMeta};
use slotbook_infra::InfraError;
use tracing::debug;
use uuid::Uuid;

/// File store rooted at the upload directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root` (created lazily on first write)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Upload directory root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist one uploaded file and return its metadata
    pub async fn store(
        &self,
        field_name: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFileMeta> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| SlotbookError::from(InfraError::from(e)))?;

        let file_name = unique_file_name(field_name, original_name);
        let path = self.root.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| SlotbookError::from(InfraError::from(e)))?;

        debug!(%field_name, %file_name, size = bytes.len(), "stored uploaded file");
        Ok(StoredFileMeta {
            field_name: field_name.to_string(),
            original_name: original_name.to_string(),
            file_name,
            path: path.display().to_string(),
            size: bytes.len() as u64,
        })
    }
}

fn unique_file_name(field_name: &str, original_name: &str) -> String {
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{field_name}-{}.{ext}", Uuid::new_v4()),
        None => format!("{field_name}-{}", Uuid::new_v4()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_under_generated_name_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let meta = store.store("photo", "avatar.png", b"png-bytes").await.unwrap();
        assert_eq!(meta.field_name, "photo");
        assert_eq!(meta.original_name, "avatar.png");
        assert!(meta.file_name.starts_with("photo-"));
        assert!(meta.file_name.ends_with(".png"));
        assert_eq!(meta.size, 9);

        let written = tokio::fs::read(dir.path().join(&meta.file_name)).await.unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn file_without_extension_gets_no_trailing_dot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let meta = store.store("photo", "avatar", b"x").await.unwrap();
        assert!(!meta.file_name.contains('.'));
    }

    #[tokio::test]
    async fn repeated_stores_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let a = store.store("photo", "same.jpg", b"a").await.unwrap();
        let b = store.store("photo", "same.jpg", b"b").await.unwrap();
        assert_ne!(a.file_name, b.file_name);
    }
}
