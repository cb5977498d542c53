use async_trait::async_trait;
use roxmltree::Node;

use crate::application::ports::{QuizSource, QuizSourceError};
use crate::domain::{Answer, Question, Quiz};
use crate::infrastructure::text_processing::strip_markup;

/// Parses the Moodle question-bank XML export shape:
/// `quiz > question > {name, questiontext, answer*}`, where every labelled
/// field wraps its content in a `<text>` child.
pub struct MoodleXmlAdapter;

#[async_trait]
impl QuizSource for MoodleXmlAdapter {
    async fn parse(&self, data: &[u8]) -> Result<Quiz, QuizSourceError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| QuizSourceError::MalformedXml(format!("invalid utf-8: {}", e)))?;
        let doc = roxmltree::Document::parse(text)
            .map_err(|e| QuizSourceError::MalformedXml(e.to_string()))?;
        build_quiz(doc.root_element())
    }
}

fn build_quiz(root: Node) -> Result<Quiz, QuizSourceError> {
    if !root.has_tag_name("quiz") {
        return Err(QuizSourceError::UnexpectedSchema(format!(
            "expected a quiz root element, found {}",
            root.tag_name().name()
        )));
    }

    let question_nodes: Vec<Node> = root
        .children()
        .filter(|n| n.has_tag_name("question"))
        .collect();
    if question_nodes.is_empty() {
        return Err(QuizSourceError::UnexpectedSchema(
            "quiz element contains no question elements".to_string(),
        ));
    }

    let mut questions = Vec::with_capacity(question_nodes.len());
    for (index, node) in question_nodes.iter().enumerate() {
        match build_question(node) {
            Some(question) => questions.push(question),
            None => tracing::warn!(
                question = index + 1,
                "Question is missing its name or text, skipping"
            ),
        }
    }

    Ok(Quiz { questions })
}

/// None when the question lacks a usable name or body; the caller drops it
/// without aborting the batch. The name is kept verbatim, the body and the
/// answers run through the markup stripper.
fn build_question(node: &Node) -> Option<Question> {
    let name = nested_text(node, "name")?;
    let text = strip_markup(&nested_text(node, "questiontext")?);

    let answers = node
        .children()
        .filter(|n| n.has_tag_name("answer"))
        .map(|answer| {
            let answer_text = answer
                .children()
                .find(|c| c.has_tag_name("text"))
                .map(|t| element_text(&t))
                .unwrap_or_default();
            Answer::from_fraction(strip_markup(&answer_text), answer.attribute("fraction"))
        })
        .collect();

    Some(Question {
        name,
        text,
        answers,
    })
}

/// Text content of `<parent><tag><text>…</text></tag></parent>`.
fn nested_text(parent: &Node, tag: &str) -> Option<String> {
    let field = parent.children().find(|c| c.has_tag_name(tag))?;
    let text = field.children().find(|c| c.has_tag_name("text"))?;
    Some(element_text(&text))
}

fn element_text(node: &Node) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}
