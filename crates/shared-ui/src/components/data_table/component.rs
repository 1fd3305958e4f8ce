use dioxus::prelude::*;

/// Scrollable table. Column headers come in as plain strings.
#[component]
pub fn DataTable(columns: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for col in columns {
                            th { key: "{col}", "{col}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// Table row, clickable when a handler is supplied.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when a table has nothing to list.
#[component]
pub fn DataTableEmpty(colspan: u32, message: String) -> Element {
    rsx! {
        tr {
            td { class: "data-table-empty", colspan: colspan, "{message}" }
        }
    }
}
