use dioxus::prelude::*;

use crate::components::popover::{PopoverContent, PopoverRoot, PopoverTrigger};

/// One selectable entry: a stable id and the text shown and searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxOption {
    pub id: String,
    pub label: String,
}

impl ComboboxOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Options whose label contains `query`, ignoring case. A blank query keeps
/// everything. Surrounding spaces in a non-blank query are part of the
/// match. Order is preserved.
pub fn filter_options(options: &[ComboboxOption], query: &str) -> Vec<ComboboxOption> {
    if query.trim().is_empty() {
        return options.to_vec();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The value to report after the user picks `picked` while `current` is
/// selected. Re-picking the current value clears it only when deselection
/// is allowed.
pub fn next_selection(current: &str, picked: &str, allow_deselect: bool) -> String {
    if allow_deselect && current == picked {
        String::new()
    } else {
        picked.to_string()
    }
}

/// Label of the selected option, if the value names one.
pub fn selected_label<'a>(options: &'a [ComboboxOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.id == value)
        .map(|o| o.label.as_str())
}

/// Searchable single-select picker.
///
/// The selected id is owned by the parent; the component only keeps its
/// open flag and the typed query. The list floats in a [`PopoverContent`]
/// anchored to the trigger.
#[component]
pub fn Combobox(
    /// Every selectable entry, in display order.
    options: Vec<ComboboxOption>,
    /// Id of the selected option. Empty means nothing is selected.
    value: String,
    /// Called with the id to select next, or `""` after a deselect.
    on_change: EventHandler<String>,
    /// Trigger text while nothing is selected.
    #[props(default = "اختر...".to_string())]
    placeholder: String,
    #[props(default = "ابحث...".to_string())]
    search_placeholder: String,
    /// Shown in the list when the query matches nothing.
    #[props(default = "لا توجد نتائج".to_string())]
    empty_text: String,
    /// Whether picking the selected option again clears the selection.
    #[props(default = false)]
    allow_deselect: bool,
    /// Optional label displayed above the trigger.
    #[props(default)]
    label: String,
) -> Element {
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);

    let shown = selected_label(&options, &value)
        .map(str::to_string)
        .unwrap_or_else(|| placeholder.clone());
    let has_value = !value.is_empty();
    let visible = filter_options(&options, &query.read());

    let mut set_open = move |next: bool| {
        open.set(next);
        if !next {
            query.set(String::new());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "combobox",
            if !label.is_empty() {
                span { class: "combobox-label", "{label}" }
            }
            PopoverRoot {
                open: open(),
                on_open_change: move |next: bool| set_open(next),
                PopoverTrigger {
                    span {
                        class: "combobox-value",
                        "data-placeholder": if has_value { "false" } else { "true" },
                        "{shown}"
                    }
                    span { class: "combobox-chevron", "aria-hidden": "true", "\u{25BE}" }
                }
                PopoverContent {
                    input {
                        class: "combobox-search",
                        r#type: "text",
                        autofocus: true,
                        placeholder: search_placeholder,
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }
                    ul { class: "combobox-list", role: "listbox",
                        if visible.is_empty() {
                            li { class: "combobox-empty", "{empty_text}" }
                        }
                        for opt in visible {
                            li {
                                key: "{opt.id}",
                                class: "combobox-option",
                                role: "option",
                                "aria-selected": if opt.id == value { "true" } else { "false" },
                                onclick: {
                                    let picked = opt.id.clone();
                                    let current = value.clone();
                                    move |_| {
                                        on_change.call(next_selection(&current, &picked, allow_deselect));
                                        set_open(false);
                                    }
                                },
                                span { class: "combobox-check",
                                    if opt.id == value { "\u{2713}" }
                                }
                                "{opt.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn customers() -> Vec<ComboboxOption> {
        vec![
            ComboboxOption::new("1", "Ahmed Al-Harbi"),
            ComboboxOption::new("2", "Noor Trading Company"),
            ComboboxOption::new("3", "AHMAD Saleh"),
            ComboboxOption::new("4", "شركة النور"),
        ]
    }

    fn ids(options: &[ComboboxOption]) -> Vec<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        assert_eq!(ids(&filter_options(&customers(), "ahm")), vec!["1", "3"]);
        assert_eq!(ids(&filter_options(&customers(), "TRADING")), vec!["2"]);
    }

    #[test]
    fn filter_matches_arabic_verbatim() {
        assert_eq!(ids(&filter_options(&customers(), "النور")), vec!["4"]);
    }

    #[test]
    fn blank_query_keeps_all() {
        assert_eq!(filter_options(&customers(), "  ").len(), 4);
    }

    #[test]
    fn leading_space_is_part_of_the_query() {
        let options = vec![
            ComboboxOption::new("1", "Ahmed Al-Harbi"),
            ComboboxOption::new("2", "Alia Nasser"),
        ];
        assert_eq!(ids(&filter_options(&options, " al")), vec!["1"]);
        assert_eq!(ids(&filter_options(&options, "al")), vec!["1", "2"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_options(&customers(), "zzz").is_empty());
    }

    #[test]
    fn reselecting_clears_only_with_deselect() {
        assert_eq!(next_selection("2", "2", true), "");
        assert_eq!(next_selection("2", "2", false), "2");
        assert_eq!(next_selection("2", "3", true), "3");
        assert_eq!(next_selection("", "1", false), "1");
    }

    #[test]
    fn selected_label_lookup() {
        let opts = customers();
        assert_eq!(selected_label(&opts, "2"), Some("Noor Trading Company"));
        assert_eq!(selected_label(&opts, ""), None);
    }
}
