use dioxus::prelude::*;

/// Form wrapper that keeps the browser from navigating on submit.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Inline error line under a form or field.
#[component]
pub fn FormError(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        p { class: "form-error", role: "alert", "{message}" }
    }
}
