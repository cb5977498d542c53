use crate::domain::{DocumentBlock, ExamKind, QUESTION_HEADING_LEVEL, Quiz};

pub fn document_title(subject: &str, kind: ExamKind) -> String {
    format!("Questions for {} - {}", subject, kind)
}

/// Lays a quiz out as an ordered block sequence: one title, then per
/// question a sub-heading and body paragraph, then one paragraph per
/// answer with the correct ones suffixed. Never fails; an empty quiz
/// yields the title block alone.
pub fn assemble(quiz: &Quiz, subject: &str, kind: ExamKind) -> Vec<DocumentBlock> {
    let block_count = 1 + quiz
        .questions
        .iter()
        .map(|q| 2 + q.answers.len())
        .sum::<usize>();
    let mut blocks = Vec::with_capacity(block_count);

    blocks.push(DocumentBlock::Title(document_title(subject, kind)));

    for question in &quiz.questions {
        blocks.push(DocumentBlock::Heading(
            format!("Question name: {}", question.name),
            QUESTION_HEADING_LEVEL,
        ));
        blocks.push(DocumentBlock::Paragraph(format!(
            "Question: {}",
            question.text
        )));

        for answer in &question.answers {
            let text = if answer.is_correct {
                format!("{} (correct)", answer.text)
            } else {
                answer.text.clone()
            };
            blocks.push(DocumentBlock::Paragraph(text));
        }
    }

    blocks
}
