//! Storage abstraction for uploaded images.
//!
//! Images are written under a per-entity folder and addressed by a storage
//! key (`{folder}/{file name}`); rows store the public URL of that key.

use std::{fmt, path::PathBuf, sync::Arc};

use rand::Rng;

use crate::{AppError, AppResult};

/// Folder an uploaded image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFolder {
    Categories,
    Products,
    Campaigns,
    Info,
}

impl ImageFolder {
    /// Directory name of this folder.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Campaigns => "campaigns",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ImageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored file metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Storage key (path relative to the storage root).
    pub key: String,
    /// Public URL to access the file.
    pub url: String,
    /// File size in bytes.
    pub size: u64,
}

/// Storage backend trait.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store an uploaded file.
    async fn store(
        &self,
        folder: ImageFolder,
        original_name: &str,
        data: &[u8],
    ) -> AppResult<StoredFile>;

    /// Delete a file. Deleting a file that does not exist succeeds.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check if a file exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Get the public URL for a key.
    fn public_url(&self, key: &str) -> String;

    /// Recover the storage key from a public URL.
    ///
    /// Returns `None` for URLs this backend did not hand out.
    fn key_from_url(&self, url: &str) -> Option<String>;
}

/// Shared handle to the configured storage backend.
pub type StorageService = Arc<dyn StorageBackend>;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new local storage backend.
    #[must_use]
    pub fn new(base_path: PathBuf, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_path,
            base_url,
        }
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if !is_safe_key(key) {
            return Err(AppError::Storage(format!("Invalid storage key: {key}")));
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalStorage {
    async fn store(
        &self,
        folder: ImageFolder,
        original_name: &str,
        data: &[u8],
    ) -> AppResult<StoredFile> {
        let key = format!("{folder}/{}", generate_file_name(original_name));
        let path = self.path_for(&key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Storage(format!("Failed to create directory: {e}")))?;
        }

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write file: {e}")))?;

        tracing::debug!(key = %key, size = data.len(), "Stored file");

        Ok(StoredFile {
            url: self.public_url(&key),
            key,
            size: data.len() as u64,
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Failed to delete file: {e}"))),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let path = self.path_for(key)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to inspect file: {e}")))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        let key = url.strip_prefix(&self.base_url)?.strip_prefix('/')?;
        is_safe_key(key).then(|| key.to_string())
    }
}

/// Keys are relative paths without parent or empty components.
fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('/')
        && key
            .split('/')
            .all(|part| !part.is_empty() && part != "." && part != "..")
}

/// Generate a unique file name that keeps the uploaded name readable.
///
/// Format: `{unix millis}-{random}-{sanitized original name}`.
#[must_use]
pub fn generate_file_name(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let mut sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.trim_matches('.').is_empty() {
        sanitized = "file".to_string();
    }

    format!("{millis}-{suffix}-{sanitized}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_storage() -> (LocalStorage, PathBuf) {
        let dir = std::env::temp_dir().join(format!("menuboard-storage-{}", uuid::Uuid::new_v4()));
        (
            LocalStorage::new(dir.clone(), "https://menu.example.com/files/"),
            dir,
        )
    }

    #[test]
    fn test_generate_file_name_keeps_original_name() {
        let name = generate_file_name("burger.png");
        assert!(name.ends_with("-burger.png"));
        assert_eq!(name.splitn(3, '-').count(), 3);
    }

    #[test]
    fn test_generate_file_name_sanitizes() {
        let name = generate_file_name("../../etc/pass wd");
        assert!(name.ends_with("-pass_wd"));
        assert!(!name.contains('/'));

        let name = generate_file_name("..");
        assert!(name.ends_with("-file"));
    }

    #[test]
    fn test_key_from_url() {
        let (storage, _) = temp_storage();

        assert_eq!(
            storage.key_from_url("https://menu.example.com/files/products/1-2-a.png"),
            Some("products/1-2-a.png".to_string())
        );
        assert_eq!(storage.key_from_url("https://elsewhere.com/files/a.png"), None);
        assert_eq!(
            storage.key_from_url("https://menu.example.com/files/../secret"),
            None
        );
    }

    #[tokio::test]
    async fn test_store_and_delete_round() {
        let (storage, dir) = temp_storage();

        let stored = storage
            .store(ImageFolder::Categories, "drinks.jpg", b"jpeg")
            .await
            .unwrap();
        assert!(stored.key.starts_with("categories/"));
        assert_eq!(stored.url, storage.public_url(&stored.key));
        assert_eq!(stored.size, 4);
        assert!(storage.exists(&stored.key).await.unwrap());

        storage.delete(&stored.key).await.unwrap();
        assert!(!storage.exists(&stored.key).await.unwrap());

        tokio::fs::remove_dir_all(dir).await.ok();
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_ok() {
        let (storage, _) = temp_storage();
        assert!(storage.delete("products/missing.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_traversal_keys() {
        let (storage, _) = temp_storage();
        assert!(storage.delete("../outside.png").await.is_err());
    }
}
