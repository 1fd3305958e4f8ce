use dioxus::prelude::*;
use shared_types::FileUpload;
use shared_ui::{use_toast, Button, ButtonVariant, ModalShell, ToastOptions};

use super::drafts::{AttachmentDraft, DraftError};
use crate::format_helpers::format_file_size;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Submit path of [`AttachFileDialog`]. An empty selection is an error and
/// neither handler runs; otherwise the files go to `on_attach`, the draft
/// is emptied and the dialog closes.
pub(super) fn submit_files(
    mut draft: Signal<AttachmentDraft>,
    on_attach: EventHandler<Vec<FileUpload>>,
    on_open_change: EventHandler<bool>,
) -> Result<usize, DraftError> {
    let files = draft.write().confirm()?;
    let count = files.len();
    on_attach.call(files);
    on_open_change.call(false);
    Ok(count)
}

/// Choose files to attach to a case.
///
/// Only file metadata is handed to `on_attach`. Confirming with nothing
/// selected shows an error toast and keeps the dialog open.
#[component]
pub fn AttachFileDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    on_attach: EventHandler<Vec<FileUpload>>,
    #[props(default = false)] is_loading: bool,
) -> Element {
    let toast = use_toast();
    let mut draft = use_signal(AttachmentDraft::default);

    let close = move |next: bool| {
        if !next {
            draft.write().clear();
        }
        on_open_change.call(next);
    };

    let pick = move |evt: FormEvent| {
        let picked = evt
            .files()
            .iter()
            .map(|file| {
                FileUpload::new(
                    file.name(),
                    file.size(),
                    file.content_type()
                        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
                )
            })
            .collect();
        draft.write().replace(picked);
    };

    let confirm = move |_| match submit_files(draft, on_attach, on_open_change) {
        Ok(count) => {
            toast.success(format!("تم إرفاق {count} ملف"), ToastOptions::new());
        }
        Err(err) => {
            toast.error(err.to_string(), ToastOptions::new());
        }
    };

    let files = draft.read().files().to_vec();

    rsx! {
        ModalShell {
            open,
            on_open_change: close,
            title: "إرفاق ملفات",
            description: Some("اختر ملفاً أو أكثر لإرفاقه بالقضية".to_string()),
            on_submit: confirm,
            is_loading,
            submit_text: "إرفاق",
            div { class: "attach-picker",
                input {
                    r#type: "file",
                    multiple: true,
                    disabled: is_loading,
                    onchange: pick,
                }
            }
            if files.is_empty() {
                p { class: "attach-empty", "لم يتم اختيار أي ملف" }
            } else {
                ul { class: "attach-list",
                    for (index, file) in files.into_iter().enumerate() {
                        li { key: "{index}-{file.name}", class: "attach-item",
                            span { class: "attach-name", "{file.name}" }
                            span { class: "attach-size", "{format_file_size(file.size_bytes)}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: is_loading,
                                onclick: move |_| draft.write().remove(index),
                                "إزالة"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dialogs::test_support::{in_dom, recorder};

    #[test]
    fn empty_selection_calls_nothing() {
        in_dom(|| {
            let (attached, on_attach) = recorder::<Vec<FileUpload>>();
            let (opens, on_open_change) = recorder::<bool>();
            let draft = Signal::new(AttachmentDraft::default());

            assert_eq!(
                submit_files(draft, on_attach, on_open_change),
                Err(DraftError::NoFiles)
            );
            assert!(attached.borrow().is_empty());
            assert!(opens.borrow().is_empty());
        });
    }

    #[test]
    fn selection_is_handed_over_exactly_then_closes() {
        for n in 1..=3 {
            in_dom(|| {
                let (attached, on_attach) = recorder::<Vec<FileUpload>>();
                let (opens, on_open_change) = recorder::<bool>();
                let picked: Vec<FileUpload> = (0..n)
                    .map(|i| FileUpload::new(format!("f{i}.pdf"), 10, "application/pdf"))
                    .collect();
                let mut draft = Signal::new(AttachmentDraft::default());
                draft.write().replace(picked.clone());

                assert_eq!(submit_files(draft, on_attach, on_open_change), Ok(n));
                assert_eq!(*attached.borrow(), vec![picked]);
                assert_eq!(*opens.borrow(), vec![false]);
                assert!(draft.read().files().is_empty());
            });
        }
    }
}
