use async_trait::async_trait;

/// Durable storage for generated documents, keyed by output filename.
/// There is no eviction; files stay available for later retrieval.
#[async_trait]
pub trait OutputStore: Send + Sync {
    async fn persist(&self, filename: &str, bytes: &[u8]) -> Result<(), OutputStoreError>;

    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, OutputStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutputStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
