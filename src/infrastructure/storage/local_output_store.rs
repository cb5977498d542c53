use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{OutputStore, OutputStoreError};

pub struct LocalOutputStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalOutputStore {
    pub fn new(base_path: PathBuf) -> Result<Self, OutputStoreError> {
        std::fs::create_dir_all(&base_path).map_err(OutputStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| OutputStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait]
impl OutputStore for LocalOutputStore {
    async fn persist(&self, filename: &str, bytes: &[u8]) -> Result<(), OutputStoreError> {
        let path = StorePath::from(filename);
        self.inner
            .put(&path, PutPayload::from(bytes.to_vec()))
            .await
            .map_err(|e| OutputStoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, OutputStoreError> {
        let path = StorePath::from(filename);
        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| OutputStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| OutputStoreError::NotFound(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
