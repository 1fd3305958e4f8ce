use dioxus::prelude::*;

/// Vertical list of label/value rows in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One label/value row inside a `DetailList`.
///
/// Plain text goes in `value`; badges or links go in children, which win
/// when present.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else if value.is_empty() {
                    span { class: "detail-item-empty", "—" }
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

/// Responsive grid of cards on a detail page.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}
