use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A file selected in the browser, before it is attached to a record.
///
/// Only metadata travels; the bytes stay with the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, size_bytes: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_type: content_type.into(),
        }
    }
}

/// A file attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
    pub uploaded_at: NaiveDateTime,
}

impl Attachment {
    pub fn from_upload(id: impl Into<String>, upload: FileUpload, uploaded_at: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            file_name: upload.name,
            size_bytes: upload.size_bytes,
            content_type: upload.content_type,
            uploaded_at,
        }
    }
}

/// Guess a MIME type from a file name when the browser reports none.
pub fn mime_from_filename(name: &str) -> String {
    let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
    .to_string()
}
