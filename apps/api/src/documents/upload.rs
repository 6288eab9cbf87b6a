//! Upload validation and capture of `UploadedDocumentMetadata`.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::AppError;
use crate::models::document::UploadedDocumentMetadata;

/// MIME types accepted for upload: PDF, DOCX, PNG, JPEG.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/png",
    "image/jpeg",
];

pub fn is_accepted_mime_type(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.iter().any(|m| *m == mime_type)
}

/// Encodes raw bytes as a `data:` URI.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Validates an uploaded file and captures its metadata.
///
/// Checks, in order: non-empty name, accepted MIME type, non-empty body,
/// size within `max_bytes`.
pub fn capture_document(
    name: &str,
    mime_type: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<UploadedDocumentMetadata, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("file name cannot be empty".to_string()));
    }

    if !is_accepted_mime_type(mime_type) {
        return Err(AppError::UnsupportedMediaType(mime_type.to_string()));
    }

    if bytes.is_empty() {
        return Err(AppError::Validation(format!("'{name}' is empty")));
    }

    if bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge { limit: max_bytes });
    }

    Ok(UploadedDocumentMetadata {
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        size_bytes: bytes.len() as u64,
        data_uri: to_data_uri(mime_type, bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_supported_types() {
        for mime in ACCEPTED_MIME_TYPES {
            let doc = capture_document("file", mime, b"abc", 10).unwrap();
            assert_eq!(doc.mime_type, *mime);
        }
    }

    #[test]
    fn test_rejects_plain_text() {
        let err = capture_document("notes.txt", "text/plain", b"abc", 10).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(m) if m == "text/plain"));
    }

    #[test]
    fn test_rejects_oversize_file() {
        let err = capture_document("big.pdf", "application/pdf", &[0u8; 11], 10).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge { limit: 10 }));
    }

    #[test]
    fn test_file_at_exact_limit_is_accepted() {
        let doc = capture_document("edge.pdf", "application/pdf", &[7u8; 10], 10).unwrap();
        assert_eq!(doc.size_bytes, 10);
    }

    #[test]
    fn test_rejects_empty_file_and_blank_name() {
        assert!(matches!(
            capture_document("empty.pdf", "application/pdf", b"", 10),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            capture_document("   ", "application/pdf", b"abc", 10),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_data_uri_format() {
        assert_eq!(to_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");

        let doc = capture_document(" notice.pdf ", "application/pdf", b"%PDF", 10).unwrap();
        assert_eq!(doc.name, "notice.pdf");
        assert_eq!(doc.data_uri, "data:application/pdf;base64,JVBERg==");
    }
}
