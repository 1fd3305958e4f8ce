use dioxus::prelude::*;
use shared_types::{Agency, DataProvider};
use shared_ui::{
    DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader, SearchBar, SkeletonRows,
};

use crate::components::StatusBadge;
use crate::data::provider;
use crate::format_helpers::{format_date, format_optional_date, today};

#[component]
pub fn Agencies() -> Element {
    let mut search_query = use_signal(String::new);

    let agencies = use_resource(move || {
        let q = search_query.read().clone();
        async move { provider::<Agency>().search(&q).await }
    });
    let today = today();

    rsx! {
        PageHeader { title: "الوكالات", subtitle: "وكالات العملاء الشرعية" }

        SearchBar {
            value: search_query(),
            on_search: move |q: String| search_query.set(q),
            placeholder: "ابحث برقم الوكالة أو اسم العميل...",
        }

        match &*agencies.read() {
            Some(Ok(rows)) => rsx! {
                DataTable { columns: vec!["رقم الوكالة", "العميل", "النوع", "تاريخ الإصدار", "تاريخ الانتهاء", "الصلاحية"],
                    if rows.is_empty() {
                        DataTableEmpty { colspan: 6, message: "لا توجد وكالات مطابقة" }
                    }
                    for agency in rows.iter() {
                        DataTableRow { key: "{agency.id}",
                            DataTableCell { "{agency.agency_number}" }
                            DataTableCell { "{agency.client.name}" }
                            DataTableCell { "{agency.agency_type.label()}" }
                            DataTableCell { "{format_date(agency.issued_on)}" }
                            DataTableCell { "{format_optional_date(agency.expires_on)}" }
                            DataTableCell {
                                StatusBadge {
                                    key_name: agency.validity(today).as_str(),
                                    label: agency.validity(today).label(),
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading agencies failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل الوكالات" }
                }
            }
            None => rsx! { SkeletonRows { rows: 4 } },
        }
    }
}
