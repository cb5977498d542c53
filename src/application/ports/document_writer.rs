use async_trait::async_trait;

use crate::domain::{DocumentBlock, DocumentMeta};

/// Renders an assembled block sequence into a complete document byte stream.
#[async_trait]
pub trait DocumentWriter: Send + Sync {
    async fn render(
        &self,
        blocks: &[DocumentBlock],
        meta: &DocumentMeta,
    ) -> Result<Vec<u8>, DocumentWriterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentWriterError {
    #[error("document packing failed: {0}")]
    Pack(String),
}
