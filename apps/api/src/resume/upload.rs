//! Resume upload validation: size cap and type allowlist.

use crate::errors::AppError;

/// 10MB max file size.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Body-size ceiling for the multipart route, with headroom for the
/// multipart framing around a max-size file.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "image/png",
    "image/jpeg",
    "image/jpg",
];

const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt", ".png", ".jpg", ".jpeg"];

/// Accepts a file when either its MIME type or its extension is on the
/// allowlist.
pub fn validate_resume_upload(
    file_name: &str,
    content_type: &str,
    size: usize,
) -> Result<(), AppError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::Upload(
            "File too large. Maximum size is 10MB.".to_string(),
        ));
    }

    let ext = extension_of(file_name);
    let mime_ok = ALLOWED_MIME_TYPES.contains(&content_type);
    let ext_ok = ext
        .as_deref()
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e));

    if mime_ok || ext_ok {
        Ok(())
    } else {
        Err(AppError::Upload(
            "Invalid file type. Allowed types: PDF, DOC, DOCX, TXT, PNG, JPG, JPEG".to_string(),
        ))
    }
}

/// Lowercased extension including the dot, e.g. ".pdf".
fn extension_of(file_name: &str) -> Option<String> {
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot + 1 == file_name.len() {
        return None;
    }
    Some(file_name[dot..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_by_mime() {
        assert!(validate_resume_upload("resume", "application/pdf", 1024).is_ok());
    }

    #[test]
    fn test_accepts_by_extension_when_mime_is_generic() {
        assert!(validate_resume_upload("resume.PDF", "application/octet-stream", 1024).is_ok());
        assert!(validate_resume_upload("resume.docx", "application/octet-stream", 1024).is_ok());
    }

    #[test]
    fn test_rejects_disallowed_type() {
        let err = validate_resume_upload("resume.exe", "application/x-msdownload", 1024);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_oversize_file() {
        let err = validate_resume_upload("resume.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1);
        assert!(matches!(err, Err(AppError::Upload(msg)) if msg.contains("10MB")));
    }

    #[test]
    fn test_accepts_exactly_max_size() {
        assert!(validate_resume_upload("resume.pdf", "application/pdf", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_extension_of_edge_cases() {
        assert_eq!(extension_of("a.PDF").as_deref(), Some(".pdf"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("trailing."), None);
    }
}
