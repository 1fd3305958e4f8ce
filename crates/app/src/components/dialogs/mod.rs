//! Action dialogs built on the modal shell. Each keeps its in-progress
//! value in a draft and hands the finished value to the parent.

mod attach_file;
mod drafts;
mod logout_confirm;
mod send_message;
mod status_change;

pub use attach_file::AttachFileDialog;
pub use drafts::{AttachmentDraft, DraftError, MessageDraft, StatusDraft};
pub use logout_confirm::LogoutConfirmDialog;
pub use send_message::SendMessageDialog;
pub use status_change::StatusChangeDialog;
