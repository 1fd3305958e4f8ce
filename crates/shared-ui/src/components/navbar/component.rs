use dioxus::prelude::*;

/// Top bar of the authenticated layout.
///
/// `start` sits on the right in RTL (menu trigger and page title), `end`
/// on the left (user menu).
#[component]
pub fn Navbar(start: Element, end: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "office-navbar",
            div { class: "office-navbar-start", {start} }
            div { class: "office-navbar-end", {end} }
        }
    }
}

/// Avatar bubble plus name, shown in the navbar.
#[component]
pub fn NavbarUser(name: String, initials: String, #[props(default)] role: String) -> Element {
    rsx! {
        div { class: "office-navbar-user",
            span { class: "office-navbar-avatar", "{initials}" }
            div { class: "office-navbar-user-text",
                span { class: "office-navbar-user-name", "{name}" }
                if !role.is_empty() {
                    span { class: "office-navbar-user-role", "{role}" }
                }
            }
        }
    }
}
