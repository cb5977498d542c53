use std::sync::Arc;

use crate::application::ports::{
    DocumentWriter, DocumentWriterError, OutputStore, OutputStoreError, QuizSource,
    QuizSourceError,
};
use crate::application::services::{OutputNamer, assemble, document_title};
use crate::domain::{DocumentMeta, ExamKind};

pub struct ConversionService<Q, W, S>
where
    Q: QuizSource,
    W: DocumentWriter,
    S: OutputStore,
{
    quiz_source: Arc<Q>,
    document_writer: Arc<W>,
    output_store: Arc<S>,
    namer: OutputNamer,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub question_count: usize,
}

impl<Q, W, S> ConversionService<Q, W, S>
where
    Q: QuizSource,
    W: DocumentWriter,
    S: OutputStore,
{
    pub fn new(quiz_source: Arc<Q>, document_writer: Arc<W>, output_store: Arc<S>) -> Self {
        Self {
            quiz_source,
            document_writer,
            output_store,
            namer: OutputNamer::new(),
        }
    }

    /// Runs the whole pipeline for one uploaded question bank: parse,
    /// assemble, render, persist. Each stage short-circuits; nothing is
    /// written unless rendering succeeded.
    pub async fn convert(
        &self,
        xml: &[u8],
        subject: &str,
        kind: ExamKind,
    ) -> Result<ConversionOutput, ConversionError> {
        let quiz = self.quiz_source.parse(xml).await?;

        if quiz.questions.is_empty() {
            tracing::warn!(
                subject = %subject,
                "No questions survived validation, producing a title-only document"
            );
        }

        let blocks = assemble(&quiz, subject, kind);
        let meta = DocumentMeta {
            title: document_title(subject, kind),
            creator: "examforge".to_string(),
            description: "Generated from a Moodle question-bank XML export".to_string(),
        };

        let bytes = self.document_writer.render(&blocks, &meta).await?;

        let filename = self.namer.next(subject, kind);
        self.output_store.persist(&filename, &bytes).await?;

        Ok(ConversionOutput {
            filename,
            bytes,
            question_count: quiz.questions.len(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("quiz parsing: {0}")]
    Parse(#[from] QuizSourceError),
    #[error("document rendering: {0}")]
    Render(#[from] DocumentWriterError),
    #[error("output persistence: {0}")]
    Persist(#[from] OutputStoreError),
}
