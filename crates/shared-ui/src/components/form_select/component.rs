use dioxus::prelude::*;

/// A value/label pair for [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>` for filters and short fixed lists.
///
/// When `placeholder` is set an extra empty-valued option is rendered first,
/// which filters use as "all".
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Choices in display order.
    options: Vec<SelectOption>,
    /// Called with the newly selected value.
    #[props(default)]
    onchange: Option<EventHandler<String>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Text of the leading empty-valued option. Empty means no such option.
    #[props(default)]
    placeholder: String,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-wrapper",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
