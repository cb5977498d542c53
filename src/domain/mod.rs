mod block;
mod exam_kind;
mod quiz;

pub use block::{DocumentBlock, DocumentMeta, QUESTION_HEADING_LEVEL};
pub use exam_kind::ExamKind;
pub use quiz::{Answer, Question, Quiz, fraction_marks_correct};
