use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::{use_toast, ModalShell, Textarea, ToastOptions};

use super::drafts::MessageDraft;
use crate::lifetime::{sleep_ms, use_lifetime};

/// Compose a message to a client.
///
/// Sending is simulated: the dialog waits the configured delay, then
/// reports success. If the dialog unmounts while waiting the result is
/// dropped.
#[component]
pub fn SendMessageDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    recipient: String,
) -> Element {
    let toast = use_toast();
    let config = use_context::<Signal<AppConfig>>();
    let lifetime = use_lifetime();
    let mut draft = use_signal(MessageDraft::default);
    let mut sending = use_signal(|| false);

    let close = move |next: bool| {
        if !next && *sending.peek() {
            return;
        }
        if !next {
            draft.write().set_body("");
        }
        on_open_change.call(next);
    };

    let send = {
        let recipient = recipient.clone();
        move |_| {
            if *sending.peek() {
                return;
            }
            let body = match draft.write().confirm() {
                Ok(body) => body,
                Err(err) => {
                    toast.error(err.to_string(), ToastOptions::new());
                    return;
                }
            };
            let delay = config.read().office.message_delay_ms;
            let recipient = recipient.clone();
            let lifetime = lifetime.clone();
            sending.set(true);
            spawn(async move {
                if lifetime.guard(sleep_ms(delay)).await.is_none() {
                    return;
                }
                sending.set(false);
                tracing::info!(%recipient, chars = body.chars().count(), "message sent");
                toast.success(format!("تم إرسال الرسالة إلى {recipient}"), ToastOptions::new());
                on_open_change.call(false);
            });
        }
    };

    let is_loading = *sending.read();
    let body = draft.read().body().to_string();

    rsx! {
        ModalShell {
            open,
            on_open_change: close,
            title: "إرسال رسالة",
            description: Some(format!("إلى: {recipient}")),
            on_submit: send,
            is_loading,
            submit_text: "إرسال",
            Textarea {
                label: "نص الرسالة",
                placeholder: "اكتب رسالتك هنا...",
                value: body,
                rows: 5,
                disabled: is_loading,
                on_input: move |evt: FormEvent| draft.write().set_body(evt.value()),
            }
        }
    }
}
