use dioxus::prelude::*;

use crate::routes::Route;

/// Shown for any path the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "الصفحة غير موجودة" }
                p { class: "not-found-message",
                    "لا توجد صفحة على العنوان "
                    code { "{path}" }
                }
                Link { to: Route::Dashboard {},
                    class: "not-found-link",
                    "العودة إلى لوحة التحكم"
                }
            }
        }
    }
}
