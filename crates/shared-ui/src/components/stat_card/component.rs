use dioxus::prelude::*;

use crate::components::badge::BadgeTone;

/// Headline figure on the dashboard: a label, a big value and a hint line.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] hint: String,
    #[props(default)] tone: BadgeTone,
    #[props(default)] icon: Option<Element>,
) -> Element {
    let tone_key = match tone {
        BadgeTone::Success => "success",
        BadgeTone::Warning => "warning",
        BadgeTone::Info => "info",
        BadgeTone::Danger => "danger",
        BadgeTone::Muted | BadgeTone::Neutral => "neutral",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-tone": tone_key,
            div { class: "stat-card-head",
                span { class: "stat-card-title", "{title}" }
                if let Some(icon) = icon {
                    span { class: "stat-card-icon", {icon} }
                }
            }
            div { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                div { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Responsive row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
