use dioxus::prelude::*;

/// Colour tone for badges. Status keys map onto tones via [`BadgeTone::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Info,
    Muted,
    Danger,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Info => "info",
            BadgeTone::Muted => "muted",
            BadgeTone::Danger => "danger",
        }
    }

    /// Parse a tone name. Unknown names are neutral.
    pub fn from_key(key: &str) -> Self {
        match key {
            "success" => BadgeTone::Success,
            "warning" => BadgeTone::Warning,
            "info" => BadgeTone::Info,
            "muted" => BadgeTone::Muted,
            "danger" => BadgeTone::Danger,
            _ => BadgeTone::Neutral,
        }
    }
}

/// Small inline pill for statuses and types.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_falls_back_to_neutral() {
        assert_eq!(BadgeTone::from_key("success"), BadgeTone::Success);
        assert_eq!(BadgeTone::from_key("danger"), BadgeTone::Danger);
        assert_eq!(BadgeTone::from_key("purple"), BadgeTone::Neutral);
    }
}
