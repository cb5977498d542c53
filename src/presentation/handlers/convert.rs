use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{DocumentWriter, OutputStore, QuizSource};
use crate::domain::ExamKind;
use crate::presentation::state::AppState;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a multipart upload carrying the question-bank XML (`file`) plus
/// the `subject` and `kind` text fields, runs the conversion pipeline, and
/// streams the generated DOCX back as an attachment. Input problems are
/// rejected with 400 before the pipeline runs; pipeline failures map to a
/// generic 500 with the real cause confined to the server log.
#[tracing::instrument(skip(state, multipart))]
pub async fn convert_handler<Q, W, S>(
    State(state): State<AppState<Q, W, S>>,
    mut multipart: Multipart,
) -> Response
where
    Q: QuizSource + 'static,
    W: DocumentWriter + 'static,
    S: OutputStore + 'static,
{
    let mut file: Option<Bytes> = None;
    let mut subject: Option<String> = None;
    let mut kind: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("Failed to read multipart body: {}", e));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => match field.bytes().await {
                Ok(data) => file = Some(data),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read uploaded file");
                    return bad_request(format!("Failed to read uploaded file: {}", e));
                }
            },
            "subject" => match field.text().await {
                Ok(value) => subject = Some(value),
                Err(e) => return bad_request(format!("Failed to read subject field: {}", e)),
            },
            "kind" => match field.text().await {
                Ok(value) => kind = Some(value),
                Err(e) => return bad_request(format!("Failed to read kind field: {}", e)),
            },
            other => tracing::debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    let Some(file) = file.filter(|f| !f.is_empty()) else {
        return bad_request("No XML file uploaded".to_string());
    };
    let Some(subject) = subject.filter(|s| !s.trim().is_empty()) else {
        return bad_request("Missing subject field".to_string());
    };
    let kind = match kind {
        Some(raw) => match ExamKind::try_from(raw) {
            Ok(kind) => kind,
            Err(e) => return bad_request(e),
        },
        None => return bad_request("Missing kind field".to_string()),
    };

    tracing::debug!(
        bytes = file.len(),
        subject = %subject,
        kind = %kind,
        "Converting uploaded question bank"
    );

    match state.conversion_service.convert(&file, &subject, kind).await {
        Ok(output) => {
            tracing::info!(
                filename = %output.filename,
                questions = output.question_count,
                bytes = output.bytes.len(),
                "Conversion succeeded"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, DOCX_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", output.filename),
                    ),
                ],
                output.bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, subject = %subject, "Conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "conversion failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}
