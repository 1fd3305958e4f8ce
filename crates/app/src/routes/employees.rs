use dioxus::prelude::*;
use shared_types::{DataProvider, Employee};
use shared_ui::{
    DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader, SearchBar, SkeletonRows,
};

use crate::components::StatusBadge;
use crate::data::provider;

#[component]
pub fn Employees() -> Element {
    let mut search_query = use_signal(String::new);

    let employees = use_resource(move || {
        let q = search_query.read().clone();
        async move { provider::<Employee>().search(&q).await }
    });

    rsx! {
        PageHeader { title: "الموظفون", subtitle: "فريق المكتب" }

        SearchBar {
            value: search_query(),
            on_search: move |q: String| search_query.set(q),
            placeholder: "ابحث بالاسم أو المسمى الوظيفي أو القسم...",
        }

        match &*employees.read() {
            Some(Ok(rows)) => rsx! {
                DataTable { columns: vec!["الاسم", "المسمى الوظيفي", "القسم", "الهاتف", "البريد الإلكتروني", "الحالة"],
                    if rows.is_empty() {
                        DataTableEmpty { colspan: 6, message: "لا يوجد موظفون مطابقون" }
                    }
                    for employee in rows.iter() {
                        DataTableRow { key: "{employee.id}",
                            DataTableCell { "{employee.name}" }
                            DataTableCell { "{employee.position}" }
                            DataTableCell { "{employee.department}" }
                            DataTableCell { span { dir: "ltr", "{employee.phone}" } }
                            DataTableCell { "{employee.email}" }
                            DataTableCell {
                                StatusBadge { key_name: employee.status.as_str(), label: employee.status.label() }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading employees failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل الموظفين" }
                }
            }
            None => rsx! { SkeletonRows { rows: 5 } },
        }
    }
}
