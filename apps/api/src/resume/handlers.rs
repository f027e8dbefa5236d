//! Axum route handlers for resume parsing.
//!
//! Both endpoints return the normalized client-shape structure; the client
//! applies it with overwrite semantics (the parsed data replaces the whole
//! working copy, it is not merged per field).

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::auth::extractor::CurrentUser;
use crate::errors::AppError;
use crate::llm_client::{ImageAttachment, LlmClient, LlmError};
use crate::portfolio::models::PortfolioData;
use crate::resume::extract::{extract_resume_content, ResumeContent, MIN_TEXT_LEN};
use crate::resume::normalize::normalize_parsed_resume;
use crate::resume::prompts::{RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM};
use crate::resume::upload::validate_resume_upload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub message: String,
    pub data: PortfolioData,
}

/// POST /api/resume/parse-text
pub async fn handle_parse_text(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let text = req.text.trim();
    if text.len() < MIN_TEXT_LEN {
        return Err(AppError::Validation(
            "Please provide resume text (minimum 50 characters)".to_string(),
        ));
    }

    let data = parse_resume(&state.llm, text, None).await?;
    Ok(Json(ParseResponse {
        success: true,
        message: "Resume parsed successfully".to_string(),
        data,
    }))
}

/// POST /api/resume/parse
///
/// Multipart upload with the file under the `resume` field.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let (file_name, content_type, data) = read_resume_field(&mut multipart).await?;
    validate_resume_upload(&file_name, &content_type, data.len())?;

    info!("Parsing resume: {file_name} ({content_type})");

    let parsed = match extract_resume_content(&file_name, &content_type, &data)? {
        ResumeContent::Text(text) => {
            let text = text.trim().to_string();
            if text.len() < MIN_TEXT_LEN {
                return Err(AppError::Validation(
                    "Could not extract enough text from the file. Please try a different format."
                        .to_string(),
                ));
            }
            parse_resume(&state.llm, &text, None).await?
        }
        ResumeContent::Image(attachment) => {
            // The model reads the resume from the image itself; the prompt
            // only names the file.
            let placeholder = format!("File: {file_name}");
            parse_resume(&state.llm, &placeholder, Some(&attachment)).await?
        }
    };

    Ok(Json(ParseResponse {
        success: true,
        message: "Resume parsed successfully".to_string(),
        data: parsed,
    }))
}

async fn read_resume_field(
    multipart: &mut Multipart,
) -> Result<(String, String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("Failed to read upload: {e}")))?;
        return Ok((file_name, content_type, data));
    }
    Err(AppError::Validation(
        "Please upload a resume file".to_string(),
    ))
}

async fn parse_resume(
    llm: &LlmClient,
    resume_text: &str,
    attachment: Option<&ImageAttachment>,
) -> Result<PortfolioData, AppError> {
    let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text);
    let raw: Value = llm
        .call_json_with_attachment(&prompt, RESUME_PARSE_SYSTEM, attachment)
        .await
        .map_err(|e| match e {
            LlmError::Parse(parse_err) => AppError::Llm(format!(
                "Failed to parse resume: the model returned malformed output ({parse_err})"
            )),
            other => AppError::Llm(format!("Failed to parse resume: {other}")),
        })?;

    normalize_parsed_resume(&raw)
}
