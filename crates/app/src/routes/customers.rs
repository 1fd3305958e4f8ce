use dioxus::prelude::*;
use shared_types::{AppConfig, Customer, CustomerType, DataProvider};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableCell, DataTableEmpty, DataTableRow, FormSelect,
    PageHeader, SearchBar, SelectOption, SkeletonRows,
};

use crate::components::dialogs::SendMessageDialog;
use crate::components::StatusBadge;
use crate::data::provider;

pub fn filter_by_type(customers: &[Customer], customer_type: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| customer_type.is_empty() || c.customer_type.as_str() == customer_type)
        .cloned()
        .collect()
}

#[component]
pub fn Customers() -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let mut search_query = use_signal(String::new);
    let mut filter_type = use_signal(String::new);
    let mut recipient = use_signal(|| None::<String>);

    let customers = use_resource(move || {
        let q = search_query.read().clone();
        async move { provider::<Customer>().search(&q).await }
    });

    let messaging = config.read().features.messaging;
    let type_options: Vec<SelectOption> = CustomerType::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect();

    rsx! {
        PageHeader { title: "العملاء", subtitle: "الأفراد والشركات والمؤسسات" }

        SearchBar {
            value: search_query(),
            on_search: move |q: String| search_query.set(q),
            placeholder: "ابحث بالاسم أو الهاتف أو البريد...",
            FormSelect {
                value: filter_type(),
                options: type_options,
                placeholder: "كل الأنواع",
                onchange: move |v: String| filter_type.set(v),
            }
        }

        match &*customers.read() {
            Some(Ok(all)) => {
                let rows = filter_by_type(all, &filter_type.read());
                let colspan = if messaging { 6 } else { 5 };
                let mut columns = vec!["الاسم", "النوع", "الهاتف", "البريد الإلكتروني", "الحالة"];
                if messaging {
                    columns.push("");
                }
                rsx! {
                    DataTable { columns,
                        if rows.is_empty() {
                            DataTableEmpty { colspan, message: "لا يوجد عملاء مطابقون" }
                        }
                        for customer in rows {
                            DataTableRow { key: "{customer.id}",
                                DataTableCell { "{customer.name}" }
                                DataTableCell { "{customer.customer_type.label()}" }
                                DataTableCell { span { dir: "ltr", "{customer.phone}" } }
                                DataTableCell { {customer.email.clone().unwrap_or_else(|| "—".to_string())} }
                                DataTableCell {
                                    StatusBadge { key_name: customer.status.as_str(), label: customer.status.label() }
                                }
                                if messaging {
                                    DataTableCell {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let name = customer.name.clone();
                                                move |_| recipient.set(Some(name.clone()))
                                            },
                                            "مراسلة"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading customers failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل العملاء" }
                }
            }
            None => rsx! { SkeletonRows { rows: 5 } },
        }

        if let Some(name) = recipient() {
            SendMessageDialog {
                open: true,
                on_open_change: move |open: bool| {
                    if !open {
                        recipient.set(None);
                    }
                },
                recipient: name,
            }
        }
    }
}
