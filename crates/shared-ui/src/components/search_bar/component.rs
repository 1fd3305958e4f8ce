use dioxus::prelude::*;

/// Filter row: a search box followed by any extra filter controls.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    #[props(default = "بحث...".to_string())] placeholder: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            input {
                class: "search-bar-input",
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_search.call(evt.value()),
            }
            {children}
        }
    }
}
