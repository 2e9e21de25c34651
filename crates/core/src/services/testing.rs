//! In-memory storage backend for service tests.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use menuboard_common::{
    AppError, AppResult, ImageFolder, StorageBackend, StorageService, StoredFile,
    generate_file_name,
};

pub const BASE_URL: &str = "https://menu.example.com/files";

#[derive(Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, usize>>,
    deleted: Mutex<Vec<String>>,
    fail_deletes: AtomicBool,
}

#[allow(clippy::unwrap_used)]
impl MemoryStorage {
    pub fn service() -> (StorageService, Arc<Self>) {
        let memory = Arc::new(Self::default());
        let storage: StorageService = memory.clone();
        (storage, memory)
    }

    /// Place a file and return its URL.
    pub fn put(&self, key: &str) -> String {
        self.files.lock().unwrap().insert(key.to_string(), 0);
        self.public_url(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.files.lock().unwrap().contains_key(key)
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }
}

#[allow(clippy::unwrap_used)]
#[async_trait::async_trait]
impl StorageBackend for MemoryStorage {
    async fn store(
        &self,
        folder: ImageFolder,
        original_name: &str,
        data: &[u8],
    ) -> AppResult<StoredFile> {
        let key = format!("{folder}/{}", generate_file_name(original_name));
        self.files.lock().unwrap().insert(key.clone(), data.len());
        Ok(StoredFile {
            url: self.public_url(&key),
            key,
            size: data.len() as u64,
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("permission denied".to_string()));
        }
        self.files.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.contains(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{BASE_URL}/{key}")
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(BASE_URL)?
            .strip_prefix('/')
            .map(ToString::to_string)
    }
}
