use shared_types::{CaseStatus, FileUpload};
use thiserror::Error;

/// Why a dialog could not be confirmed. The message is shown in a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("يرجى اختيار ملف واحد على الأقل")]
    NoFiles,
    #[error("يرجى كتابة نص الرسالة")]
    EmptyMessage,
}

/// Status picked in the status-change dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDraft {
    selected: CaseStatus,
}

impl StatusDraft {
    /// Start from the case's current status.
    pub fn new(current: CaseStatus) -> Self {
        Self { selected: current }
    }

    pub fn selected(&self) -> CaseStatus {
        self.selected
    }

    pub fn select(&mut self, status: CaseStatus) {
        self.selected = status;
    }

    pub fn confirm(&self) -> CaseStatus {
        self.selected
    }
}

/// Files picked in the attach-file dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttachmentDraft {
    files: Vec<FileUpload>,
}

impl AttachmentDraft {
    pub fn files(&self) -> &[FileUpload] {
        &self.files
    }

    /// Replace the selection with a new pick from the file input.
    pub fn replace(&mut self, files: Vec<FileUpload>) {
        self.files = files;
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    /// Hand over the selected files and empty the draft. With nothing
    /// selected the draft is left as it was.
    pub fn confirm(&mut self) -> Result<Vec<FileUpload>, DraftError> {
        if self.files.is_empty() {
            return Err(DraftError::NoFiles);
        }
        Ok(std::mem::take(&mut self.files))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

/// Text typed in the send-message dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDraft {
    body: String,
}

impl MessageDraft {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Trimmed message text, clearing the draft. Blank text is rejected and
    /// kept for editing.
    pub fn confirm(&mut self) -> Result<String, DraftError> {
        let text = self.body.trim();
        if text.is_empty() {
            return Err(DraftError::EmptyMessage);
        }
        let text = text.to_string();
        self.body.clear();
        Ok(text)
    }
}
