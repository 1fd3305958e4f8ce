use dioxus::prelude::*;
use shared_types::CaseStatus;
use shared_ui::{use_toast, ModalShell, ToastOptions};

use super::drafts::StatusDraft;
use crate::components::StatusBadge;

/// Submit path of [`StatusChangeDialog`]: report the picked status, reset
/// the draft to it and close.
pub(super) fn submit_status(
    mut draft: Signal<StatusDraft>,
    on_change: EventHandler<CaseStatus>,
    on_open_change: EventHandler<bool>,
) -> CaseStatus {
    let status = draft.read().confirm();
    on_change.call(status);
    draft.set(StatusDraft::new(status));
    on_open_change.call(false);
    status
}

/// Pick a new status for a case.
///
/// The parent performs the update in `on_change`; the dialog then toasts,
/// resets its selection and closes.
#[component]
pub fn StatusChangeDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    current: CaseStatus,
    on_change: EventHandler<CaseStatus>,
) -> Element {
    let toast = use_toast();
    let mut draft = use_signal(|| StatusDraft::new(current));

    let close = move |next: bool| {
        if !next {
            draft.set(StatusDraft::new(current));
        }
        on_open_change.call(next);
    };

    let confirm = move |_| {
        let status = submit_status(draft, on_change, on_open_change);
        toast.success(
            format!("تم تغيير حالة القضية إلى {}", status.label()),
            ToastOptions::new(),
        );
    };

    let selected = draft.read().selected();

    rsx! {
        ModalShell {
            open,
            on_open_change: close,
            title: "تغيير حالة القضية",
            description: Some(format!("الحالة الحالية: {}", current.label())),
            on_submit: confirm,
            submit_text: "تغيير",
            div { class: "status-options", role: "radiogroup",
                for status in CaseStatus::ALL.iter().copied() {
                    label {
                        key: "{status.as_str()}",
                        class: "status-option",
                        "data-selected": if status == selected { "true" } else { "false" },
                        input {
                            r#type: "radio",
                            name: "case-status",
                            value: status.as_str(),
                            checked: status == selected,
                            onchange: move |_| draft.write().select(status),
                        }
                        StatusBadge { key_name: status.as_str(), label: status.label() }
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
    fn each_status_is_reported_once_and_closes() {
        for status in CaseStatus::ALL.iter().copied() {
            in_dom(|| {
                let (changes, on_change) = recorder::<CaseStatus>();
                let (opens, on_open_change) = recorder::<bool>();
                let mut draft = Signal::new(StatusDraft::new(CaseStatus::Active));
                draft.write().select(status);

                assert_eq!(submit_status(draft, on_change, on_open_change), status);
                assert_eq!(*changes.borrow(), vec![status]);
                assert_eq!(*opens.borrow(), vec![false]);
                assert_eq!(draft.read().selected(), status);
            });
        }
    }
}
