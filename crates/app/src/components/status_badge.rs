use dioxus::prelude::*;
use shared_types::status_tone;
use shared_ui::{Badge, BadgeTone};

/// Badge for any record status, toned by its wire key.
#[component]
pub fn StatusBadge(key_name: &'static str, label: &'static str) -> Element {
    rsx! {
        Badge { tone: BadgeTone::from_key(status_tone(key_name)), "{label}" }
    }
}
