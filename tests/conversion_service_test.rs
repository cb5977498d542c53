use std::sync::Arc;

use async_trait::async_trait;

use examforge::application::ports::{
    DocumentWriter, DocumentWriterError, OutputStore, QuizSourceError,
};
use examforge::application::services::{ConversionError, ConversionService};
use examforge::domain::{DocumentBlock, DocumentMeta, ExamKind};
use examforge::infrastructure::docx::DocxWriter;
use examforge::infrastructure::storage::LocalOutputStore;
use examforge::infrastructure::xml::MoodleXmlAdapter;

const SAMPLE_QUIZ: &str = r#"<quiz>
  <question>
    <name><text>Q1</text></name>
    <questiontext><text><![CDATA[<b>What is 2+2?</b>]]></text></questiontext>
    <answer fraction="0"><text>3</text></answer>
    <answer fraction="100"><text>4</text></answer>
  </question>
</quiz>"#;

fn create_service(
    dir: &tempfile::TempDir,
) -> (
    Arc<LocalOutputStore>,
    ConversionService<MoodleXmlAdapter, DocxWriter, LocalOutputStore>,
) {
    let store = Arc::new(LocalOutputStore::new(dir.path().to_path_buf()).unwrap());
    let service = ConversionService::new(
        Arc::new(MoodleXmlAdapter),
        Arc::new(DocxWriter),
        Arc::clone(&store),
    );
    (store, service)
}

#[tokio::test]
async fn given_valid_quiz_when_converting_then_docx_is_returned_and_persisted() {
    let dir = tempfile::TempDir::new().unwrap();
    let (store, service) = create_service(&dir);

    let output = service
        .convert(SAMPLE_QUIZ.as_bytes(), "Math", ExamKind::Final)
        .await
        .unwrap();

    assert_eq!(output.question_count, 1);
    assert!(output.filename.starts_with("Math-final-"));
    assert!(output.filename.ends_with(".docx"));
    assert!(!output.bytes.is_empty());
    assert_eq!(&output.bytes[..2], b"PK");

    let persisted = store.fetch(&output.filename).await.unwrap();
    assert_eq!(persisted, output.bytes);
}

#[tokio::test]
async fn given_two_conversions_when_naming_then_filenames_are_distinct() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_store, service) = create_service(&dir);

    let first = service
        .convert(SAMPLE_QUIZ.as_bytes(), "Math", ExamKind::Final)
        .await
        .unwrap();
    let second = service
        .convert(SAMPLE_QUIZ.as_bytes(), "Math", ExamKind::Final)
        .await
        .unwrap();

    assert_ne!(first.filename, second.filename);
}

#[tokio::test]
async fn given_malformed_xml_when_converting_then_parse_error_and_nothing_is_written() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_store, service) = create_service(&dir);

    let err = service
        .convert(b"<quiz><question>", "Math", ExamKind::Final)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ConversionError::Parse(QuizSourceError::MalformedXml(_))
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_non_quiz_document_when_converting_then_schema_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_store, service) = create_service(&dir);

    let err = service
        .convert(b"<catalog><item/></catalog>", "Math", ExamKind::Final)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ConversionError::Parse(QuizSourceError::UnexpectedSchema(_))
    ));
}

#[tokio::test]
async fn given_quiz_with_no_surviving_questions_when_converting_then_title_only_document_succeeds()
{
    let dir = tempfile::TempDir::new().unwrap();
    let (_store, service) = create_service(&dir);

    let xml = r#"<quiz>
      <question><name><text>Nameless body</text></name></question>
    </quiz>"#;

    let output = service
        .convert(xml.as_bytes(), "Math", ExamKind::Final)
        .await
        .unwrap();

    assert_eq!(output.question_count, 0);
    assert!(!output.bytes.is_empty());
}

struct FailingWriter;

#[async_trait]
impl DocumentWriter for FailingWriter {
    async fn render(
        &self,
        _blocks: &[DocumentBlock],
        _meta: &DocumentMeta,
    ) -> Result<Vec<u8>, DocumentWriterError> {
        Err(DocumentWriterError::Pack("disk full".to_string()))
    }
}

#[tokio::test]
async fn given_failing_writer_when_converting_then_render_error_and_nothing_is_written() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalOutputStore::new(dir.path().to_path_buf()).unwrap());
    let service = ConversionService::new(
        Arc::new(MoodleXmlAdapter),
        Arc::new(FailingWriter),
        Arc::clone(&store),
    );

    let err = service
        .convert(SAMPLE_QUIZ.as_bytes(), "Math", ExamKind::Final)
        .await
        .unwrap_err();

    assert!(matches!(err, ConversionError::Render(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
