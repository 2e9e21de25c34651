//! Uploaded image handling shared by the entity services.

use bytes::Bytes;
use menuboard_common::{AppResult, ImageFolder, StorageService};

/// An image file received with a create or update request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name as sent by the client.
    pub file_name: String,
    /// File contents.
    pub data: Bytes,
}

impl ImageUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// Store an upload and return its public URL.
pub(crate) async fn store_image(
    storage: &StorageService,
    folder: ImageFolder,
    upload: &ImageUpload,
) -> AppResult<String> {
    let stored = storage.store(folder, &upload.file_name, &upload.data).await?;
    tracing::debug!(key = %stored.key, size = stored.size, "Stored image");
    Ok(stored.url)
}

/// Store an optional upload.
pub(crate) async fn store_optional_image(
    storage: &StorageService,
    folder: ImageFolder,
    upload: Option<&ImageUpload>,
) -> AppResult<Option<String>> {
    match upload {
        Some(upload) => store_image(storage, folder, upload).await.map(Some),
        None => Ok(None),
    }
}

/// Delete the file behind an image URL.
///
/// Never fails: a missing or undeletable file only leaves an orphan behind.
pub async fn discard_image(storage: &StorageService, url: &str) {
    let Some(key) = storage.key_from_url(url) else {
        tracing::warn!(url, "Image URL is not served by this storage, leaving it in place");
        return;
    };

    if let Err(e) = storage.delete(&key).await {
        tracing::warn!(error = %e, key = %key, "Failed to delete image file");
    }
}

/// Discard every URL that is present.
pub(crate) async fn discard_images<'a, I>(storage: &StorageService, urls: I)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    for url in urls.into_iter().flatten() {
        discard_image(storage, url).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::testing::MemoryStorage;

    #[tokio::test]
    async fn test_store_image_returns_url() {
        let (storage, memory) = MemoryStorage::service();

        let url = store_image(
            &storage,
            ImageFolder::Categories,
            &ImageUpload::new("drinks.png", &b"png"[..]),
        )
        .await
        .unwrap();

        assert!(url.starts_with("https://menu.example.com/files/categories/"));
        assert_eq!(memory.file_count(), 1);
    }

    #[tokio::test]
    async fn test_discard_image_deletes_file() {
        let (storage, memory) = MemoryStorage::service();
        let url = memory.put("products/old.png");

        discard_image(&storage, &url).await;

        assert!(!memory.contains("products/old.png"));
        assert_eq!(memory.deleted(), vec!["products/old.png".to_string()]);
    }

    #[tokio::test]
    async fn test_discard_image_ignores_foreign_urls() {
        let (storage, memory) = MemoryStorage::service();

        discard_image(&storage, "https://cdn.elsewhere.com/a.png").await;

        assert!(memory.deleted().is_empty());
    }

    #[tokio::test]
    async fn test_discard_image_swallows_delete_failures() {
        let (storage, memory) = MemoryStorage::service();
        let url = memory.put("campaigns/locked.png");
        memory.fail_deletes();

        discard_image(&storage, &url).await;

        assert!(memory.contains("campaigns/locked.png"));
    }
}
