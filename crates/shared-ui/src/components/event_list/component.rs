use dioxus::prelude::*;

use crate::components::badge::{Badge, BadgeTone};

/// A row in an [`EventList`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventItem {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub meta: String,
    pub badge: Option<(String, BadgeTone)>,
}

/// Compact list of dated events (upcoming sessions, recent payments).
#[component]
pub fn EventList(
    items: Vec<EventItem>,
    #[props(default = "لا توجد عناصر".to_string())] empty_text: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if items.is_empty() {
            p { class: "event-list-empty", "{empty_text}" }
        } else {
            ul { class: "event-list",
                for item in items {
                    li { key: "{item.key}", class: "event-list-item",
                        div { class: "event-list-text",
                            span { class: "event-list-title", "{item.title}" }
                            span { class: "event-list-subtitle", "{item.subtitle}" }
                        }
                        div { class: "event-list-side",
                            span { class: "event-list-meta", "{item.meta}" }
                            if let Some((label, tone)) = item.badge {
                                Badge { tone, "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
