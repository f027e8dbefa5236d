//! Per-format resume content extraction.
//!
//! PDF, TXT and DOC/DOCX are reduced to plain text before the LLM call;
//! PNG/JPEG are passed through as an inline image for multimodal parsing.

use bytes::Bytes;

use crate::errors::AppError;
use crate::llm_client::ImageAttachment;

/// What the LLM will be asked to read.
#[derive(Debug)]
pub enum ResumeContent {
    Text(String),
    Image(ImageAttachment),
}

/// Minimum amount of extracted text worth sending to the model.
pub const MIN_TEXT_LEN: usize = 50;

pub fn extract_resume_content(
    file_name: &str,
    content_type: &str,
    data: &Bytes,
) -> Result<ResumeContent, AppError> {
    match classify(file_name, content_type) {
        FileKind::Pdf => {
            let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
                tracing::warn!("PDF text extraction failed for {file_name}: {e}");
                AppError::Upload(
                    "Could not extract text from the PDF. Please try a different format."
                        .to_string(),
                )
            })?;
            Ok(ResumeContent::Text(text))
        }
        FileKind::Text => Ok(ResumeContent::Text(
            String::from_utf8_lossy(data).into_owned(),
        )),
        // Word documents get a crude tag-strip over the raw bytes. Good
        // enough for the model to work with; not a real DOCX parser.
        FileKind::Word => Ok(ResumeContent::Text(strip_markup(
            &String::from_utf8_lossy(data),
        ))),
        FileKind::Image(media_type) => {
            use base64::Engine as _;
            Ok(ResumeContent::Image(ImageAttachment {
                media_type,
                data_base64: base64::engine::general_purpose::STANDARD.encode(data),
            }))
        }
    }
}

enum FileKind {
    Pdf,
    Text,
    Word,
    Image(String),
}

fn classify(file_name: &str, content_type: &str) -> FileKind {
    match content_type {
        "application/pdf" => return FileKind::Pdf,
        "text/plain" | "text/markdown" => return FileKind::Text,
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            return FileKind::Word
        }
        "image/png" => return FileKind::Image("image/png".to_string()),
        "image/jpeg" | "image/jpg" => return FileKind::Image("image/jpeg".to_string()),
        _ => {}
    }
    // The MIME type was generic; fall back to the extension the upload
    // validator already accepted.
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        FileKind::Pdf
    } else if lower.ends_with(".doc") || lower.ends_with(".docx") {
        FileKind::Word
    } else if lower.ends_with(".png") {
        FileKind::Image("image/png".to_string())
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        FileKind::Image("image/jpeg".to_string())
    } else {
        FileKind::Text
    }
}

/// Drops `<...>` tag runs and collapses whitespace.
fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    let mut last_was_space = true;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                if !last_was_space {
                    out.push(' ');
                    last_was_space = true;
                }
            }
            _ if in_tag => {}
            c if c.is_whitespace() => {
                if !last_was_space {
                    out.push(' ');
                    last_was_space = true;
                }
            }
            c => {
                out.push(c);
                last_was_space = false;
            }
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let data = Bytes::from_static(b"Jane Doe\nSoftware Engineer");
        match extract_resume_content("resume.txt", "text/plain", &data).unwrap() {
            ResumeContent::Text(text) => assert!(text.contains("Jane Doe")),
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn test_image_becomes_base64_attachment() {
        let data = Bytes::from_static(b"\x89PNG fake");
        match extract_resume_content("resume.png", "image/png", &data).unwrap() {
            ResumeContent::Image(att) => {
                assert_eq!(att.media_type, "image/png");
                assert!(!att.data_base64.is_empty());
            }
            _ => panic!("expected image"),
        }
    }

    #[test]
    fn test_jpg_normalizes_media_type() {
        let data = Bytes::from_static(b"fake");
        match extract_resume_content("resume.jpg", "image/jpg", &data).unwrap() {
            ResumeContent::Image(att) => assert_eq!(att.media_type, "image/jpeg"),
            _ => panic!("expected image"),
        }
    }

    #[test]
    fn test_generic_mime_falls_back_to_extension() {
        let data = Bytes::from_static(b"fake");
        match extract_resume_content("scan.png", "application/octet-stream", &data).unwrap() {
            ResumeContent::Image(att) => assert_eq!(att.media_type, "image/png"),
            _ => panic!("expected image"),
        }
    }

    #[test]
    fn test_strip_markup_removes_tags() {
        let input = "<w:p><w:t>Jane</w:t></w:p> <w:t>Doe</w:t>";
        assert_eq!(strip_markup(input), "Jane Doe");
    }

    #[test]
    fn test_strip_markup_collapses_whitespace() {
        assert_eq!(strip_markup("a   b\n\nc"), "a b c");
    }

    #[test]
    fn test_strip_markup_plain_text_untouched() {
        assert_eq!(strip_markup("hello world"), "hello world");
    }
}
