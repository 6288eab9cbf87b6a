use serde::{Deserialize, Serialize};

/// Metadata of an uploaded document, captured once at upload time.
/// `data_uri` holds the raw bytes as `data:<mime>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocumentMetadata {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub data_uri: String,
}

/// Plain-language explanation of a document plus the steps the reader should take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationResult {
    pub simplified_text: String,
    pub action_items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyRequest {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
}

/// Which preview branch a client should render for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewKind {
    Pdf,
    Image,
    Unsupported,
}

impl PreviewKind {
    pub fn for_mime(mime_type: &str) -> Self {
        if mime_type == "application/pdf" {
            PreviewKind::Pdf
        } else if mime_type.starts_with("image/") {
            PreviewKind::Image
        } else {
            PreviewKind::Unsupported
        }
    }
}
