use async_trait::async_trait;
use contact_book_core::error::{RepositoryError, RepositoryResult};
use contact_book_core::image::BlobKeyPolicy;
use contact_book_core::repositories::BlobStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock blob store for testing.
///
/// Tracks method calls and can be configured to fail deletes, for
/// exercising the best-effort cleanup path.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBlobStore {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_deletes: Arc<Mutex<bool>>,
    keys: BlobKeyPolicy,
}

#[allow(dead_code)]
impl MockBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_deletes: Arc::new(Mutex::new(false)),
            keys: BlobKeyPolicy::default(),
        }
    }

    /// Make every subsequent delete call fail with a backend error.
    pub fn fail_deletes(&self) {
        *self.fail_deletes.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    /// Whether a blob is currently stored under the key.
    pub fn contains(&self, key: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(key)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl Default for MockBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn store(&self, bytes: &[u8], content_type: &str) -> RepositoryResult<String> {
        self.track_call("store");
        let key = self.keys.generate(content_type);
        self.blobs.lock().unwrap().insert(key.clone(), bytes.to_vec());
        Ok(key)
    }

    async fn load(&self, key: &str) -> RepositoryResult<Option<Vec<u8>>> {
        self.track_call("load");
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    async fn update(&self, key: &str, bytes: &[u8]) -> RepositoryResult<()> {
        self.track_call("update");
        let mut blobs = self.blobs.lock().unwrap();
        match blobs.get_mut(key) {
            Some(entry) => {
                *entry = bytes.to_vec();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(key.to_string())),
        }
    }

    async fn delete(&self, key: &str) -> RepositoryResult<()> {
        self.track_call("delete");
        if *self.fail_deletes.lock().unwrap() {
            return Err(RepositoryError::Backend(
                "injected delete failure".to_string(),
            ));
        }
        self.blobs.lock().unwrap().remove(key);
        Ok(())
    }
}
