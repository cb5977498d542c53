use std::collections::BTreeSet;
use std::io::Cursor;

use async_trait::async_trait;
use docx_rs::{Docx, Paragraph, Run, Style, StyleType};

use crate::application::ports::{DocumentWriter, DocumentWriterError};
use crate::domain::{DocumentBlock, DocumentMeta};

const TITLE_STYLE: &str = "ExamTitle";

/// Renders the block sequence into a DOCX package. The title and each
/// heading level present in the sequence get a named paragraph style;
/// paragraph blocks become plain body text.
pub struct DocxWriter;

#[async_trait]
impl DocumentWriter for DocxWriter {
    async fn render(
        &self,
        blocks: &[DocumentBlock],
        meta: &DocumentMeta,
    ) -> Result<Vec<u8>, DocumentWriterError> {
        let mut docx = Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Exam Title")
                    .size(36)
                    .bold(),
            )
            .custom_property("title", meta.title.as_str())
            .custom_property("creator", meta.creator.as_str())
            .custom_property("description", meta.description.as_str());

        let heading_levels: BTreeSet<u8> = blocks
            .iter()
            .filter_map(|block| match block {
                DocumentBlock::Heading(_, level) => Some(*level),
                _ => None,
            })
            .collect();
        for level in heading_levels {
            docx = docx.add_style(
                Style::new(heading_style_id(level), StyleType::Paragraph)
                    .name(format!("Heading {}", level))
                    .size(heading_size(level))
                    .bold(),
            );
        }

        for block in blocks {
            docx = docx.add_paragraph(match block {
                DocumentBlock::Title(text) => styled_paragraph(text, TITLE_STYLE),
                DocumentBlock::Heading(text, level) => {
                    styled_paragraph(text, &heading_style_id(*level))
                }
                DocumentBlock::Paragraph(text) => body_paragraph(text),
            });
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| DocumentWriterError::Pack(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level)
}

/// Half-point sizes stepping down per level, floored at body-adjacent size.
fn heading_size(level: u8) -> usize {
    32usize.saturating_sub(2 * level as usize).max(24)
}

fn styled_paragraph(text: &str, style: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style)
}

fn body_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}
