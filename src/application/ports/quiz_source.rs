use async_trait::async_trait;

use crate::domain::Quiz;

/// Turns an uploaded question-bank export into the typed quiz model.
///
/// Implementations absorb per-question omissions (a question missing its
/// name or text is dropped with a warning); only structural problems with
/// the document as a whole surface as errors.
#[async_trait]
pub trait QuizSource: Send + Sync {
    async fn parse(&self, data: &[u8]) -> Result<Quiz, QuizSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QuizSourceError {
    #[error("malformed xml: {0}")]
    MalformedXml(String),
    #[error("unexpected schema: {0}")]
    UnexpectedSchema(String),
}
