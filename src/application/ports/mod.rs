mod document_writer;
mod output_store;
mod quiz_source;

pub use document_writer::{DocumentWriter, DocumentWriterError};
pub use output_store::{OutputStore, OutputStoreError};
pub use quiz_source::{QuizSource, QuizSourceError};
