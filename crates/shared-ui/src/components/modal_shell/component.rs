use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::dialog::{DialogContent, DialogDescription, DialogRoot, DialogTitle};

/// Submit label shown while the parent reports work in flight.
pub const LOADING_LABEL: &str = "جارٍ الحفظ...";

/// Label for the submit button given the loading flag.
pub fn submit_label(is_loading: bool, label: &str) -> &str {
    if is_loading {
        LOADING_LABEL
    } else {
        label
    }
}

/// Controlled modal panel: header, scrollable body, sticky footer.
///
/// Built on [`DialogRoot`], so focus stays inside the panel and Escape or a
/// click on the backdrop reports `on_open_change(false)`, as do the close
/// and cancel buttons. The shell keeps no state of its own.
#[component]
pub fn ModalShell(
    /// Whether the panel is shown.
    open: bool,
    /// Called with `false` whenever the user dismisses the panel.
    on_open_change: EventHandler<bool>,
    /// Heading, also used as the dialog's accessible name.
    title: String,
    /// Optional line under the heading.
    #[props(default)]
    description: Option<String>,
    /// Submit action. Without it only the cancel button is rendered.
    #[props(default)]
    on_submit: Option<EventHandler<()>>,
    /// Disables both buttons and swaps the submit label.
    #[props(default = false)]
    is_loading: bool,
    /// Submit label when idle.
    #[props(default = "حفظ".to_string())]
    submit_text: String,
    /// Cancel label.
    #[props(default = "إلغاء".to_string())]
    cancel_text: String,
    /// Style of the submit button.
    #[props(default)]
    submit_variant: ButtonVariant,
    /// Body content, scrolled when taller than the viewport.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        DialogRoot {
            open,
            on_open_change,
            DialogContent {
                header { class: "modal-header",
                    div {
                        DialogTitle { "{title}" }
                        if let Some(description) = description.as_ref() {
                            DialogDescription { "{description}" }
                        }
                    }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "إغلاق",
                        disabled: is_loading,
                        onclick: move |_| on_open_change.call(false),
                        "\u{2715}"
                    }
                }
                div { class: "modal-body", {children} }
                ModalFooter {
                    on_open_change,
                    on_submit,
                    is_loading,
                    submit_text,
                    cancel_text,
                    submit_variant,
                }
            }
        }
    }
}

/// Action row of a [`ModalShell`]: optional submit, then cancel.
#[component]
pub fn ModalFooter(
    /// Called with `false` by the cancel button.
    on_open_change: EventHandler<bool>,
    /// Submit action. Omitted means no submit button.
    #[props(default)]
    on_submit: Option<EventHandler<()>>,
    /// Disables both buttons and swaps the submit label.
    #[props(default = false)]
    is_loading: bool,
    /// Submit label when idle.
    #[props(default = "حفظ".to_string())]
    submit_text: String,
    /// Cancel label.
    #[props(default = "إلغاء".to_string())]
    cancel_text: String,
    /// Style of the submit button.
    #[props(default)]
    submit_variant: ButtonVariant,
) -> Element {
    let submit_text = submit_label(is_loading, &submit_text).to_string();

    rsx! {
        footer { class: "modal-footer",
            if let Some(on_submit) = on_submit {
                Button {
                    variant: submit_variant,
                    disabled: is_loading,
                    onclick: move |_| on_submit.call(()),
                    "{submit_text}"
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: is_loading,
                onclick: move |_| on_open_change.call(false),
                "{cancel_text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_label_switches_while_loading() {
        assert_eq!(submit_label(false, "تغيير"), "تغيير");
        assert_eq!(submit_label(true, "تغيير"), LOADING_LABEL);
    }

    fn loading_footer() -> Element {
        rsx! {
            ModalFooter {
                on_open_change: |_| {},
                on_submit: |_| {},
                is_loading: true,
                submit_text: "إرفاق",
            }
        }
    }

    fn cancel_only_footer() -> Element {
        rsx! {
            ModalFooter { on_open_change: |_| {}, cancel_text: "إغلاق" }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn loading_footer_disables_submit_and_shows_progress_label() {
        let html = render(loading_footer);
        assert!(html.contains(LOADING_LABEL));
        assert!(!html.contains("إرفاق"));
        assert_eq!(html.matches("disabled").count(), 2);
    }

    #[test]
    fn footer_without_submit_renders_only_cancel() {
        let html = render(cancel_only_footer);
        assert!(html.contains("إغلاق"));
        assert!(!html.contains("حفظ"));
        assert_eq!(html.matches("<button").count(), 1);
    }
}
