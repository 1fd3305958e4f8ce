use dioxus::prelude::*;
use shared_types::{CaseStatus, Customer, DataProvider, LegalCase};
use shared_ui::{
    Combobox, ComboboxOption, DataTable, DataTableCell, DataTableEmpty, DataTableRow, FormSelect,
    PageHeader, SearchBar, SelectOption, SkeletonRows,
};

use crate::components::StatusBadge;
use crate::data::provider;
use crate::format_helpers::format_optional_date;
use crate::routes::Route;

/// Cases matching the status and client filters. Empty filters keep
/// everything.
pub fn filter_cases(cases: &[LegalCase], status: &str, client_id: &str) -> Vec<LegalCase> {
    cases
        .iter()
        .filter(|c| status.is_empty() || c.status.as_str() == status)
        .filter(|c| client_id.is_empty() || c.client.id == client_id)
        .cloned()
        .collect()
}

pub fn client_options(customers: &[Customer]) -> Vec<ComboboxOption> {
    customers
        .iter()
        .map(|c| ComboboxOption::new(c.id.clone(), c.name.clone()))
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    CaseStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

#[component]
pub fn CaseList() -> Element {
    let mut search_query = use_signal(String::new);
    let mut filter_status = use_signal(String::new);
    let mut filter_client = use_signal(String::new);

    let cases = use_resource(move || {
        let q = search_query.read().clone();
        async move { provider::<LegalCase>().search(&q).await }
    });

    let customers = use_resource(move || async move {
        provider::<Customer>().list().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "loading client filter failed");
            Vec::new()
        })
    });

    let options = customers.read().as_ref().map(|c| client_options(c)).unwrap_or_default();

    rsx! {
        PageHeader { title: "القضايا", subtitle: "جميع قضايا المكتب" }

        SearchBar {
            value: search_query(),
            on_search: move |q: String| search_query.set(q),
            placeholder: "ابحث بعنوان القضية أو رقمها أو اسم العميل...",
            div { class: "page-toolbar",
                FormSelect {
                    value: filter_status(),
                    options: status_options(),
                    placeholder: "كل الحالات",
                    onchange: move |v: String| filter_status.set(v),
                }
                Combobox {
                    options,
                    value: filter_client(),
                    on_change: move |id: String| filter_client.set(id),
                    placeholder: "كل العملاء",
                    search_placeholder: "ابحث عن عميل...",
                    allow_deselect: true,
                }
            }
        }

        match &*cases.read() {
            Some(Ok(all)) => {
                let rows = filter_cases(all, &filter_status.read(), &filter_client.read());
                rsx! { CaseTable { cases: rows } }
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading cases failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل القضايا" }
                }
            }
            None => rsx! { SkeletonRows { rows: 5 } },
        }
    }
}

#[component]
fn CaseTable(cases: Vec<LegalCase>) -> Element {
    rsx! {
        DataTable { columns: vec!["رقم القضية", "العنوان", "العميل", "المحكمة", "الجلسة القادمة", "الحالة"],
            if cases.is_empty() {
                DataTableEmpty { colspan: 6, message: "لا توجد قضايا مطابقة" }
            }
            for case in cases {
                DataTableRow {
                    key: "{case.id}",
                    onclick: {
                        let id = case.id.clone();
                        move |_| {
                            navigator().push(Route::CaseDetail { id: id.clone() });
                        }
                    },
                    DataTableCell { "{case.case_number}" }
                    DataTableCell { "{case.title}" }
                    DataTableCell { "{case.client.name}" }
                    DataTableCell { "{case.court}" }
                    DataTableCell { "{format_optional_date(case.next_session_date)}" }
                    DataTableCell {
                        StatusBadge { key_name: case.status.as_str(), label: case.status.label() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use shared_types::{CustomerStatus, CustomerType, EntityRef, FeeTerms};
    use shared_ui::filter_options;

    fn case(id: &str, status: CaseStatus, client: &str) -> LegalCase {
        LegalCase {
            id: id.into(),
            title: format!("قضية {id}"),
            case_number: format!("1447/{id}"),
            status,
            client: EntityRef::new(client, client),
            court: "المحكمة العامة".into(),
            next_session_date: None,
            lawyers: vec![],
            fees: FeeTerms::Fixed { amount: 1000.0 },
            notes: vec![],
            attachments: vec![],
            opened_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.into(),
            name: name.into(),
            phone: "0500000000".into(),
            email: None,
            registration_number: None,
            address: None,
            customer_type: CustomerType::Individual,
            status: CustomerStatus::Active,
        }
    }

    fn ids(cases: &[LegalCase]) -> Vec<&str> {
        cases.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_filters_keep_everything() {
        let all = vec![
            case("a", CaseStatus::Active, "cus-1"),
            case("b", CaseStatus::Closed, "cus-2"),
        ];
        assert_eq!(ids(&filter_cases(&all, "", "")), vec!["a", "b"]);
    }

    #[test]
    fn status_and_client_filters_combine() {
        let all = vec![
            case("a", CaseStatus::Active, "cus-1"),
            case("b", CaseStatus::Active, "cus-2"),
            case("c", CaseStatus::Closed, "cus-1"),
        ];
        assert_eq!(ids(&filter_cases(&all, "active", "")), vec!["a", "b"]);
        assert_eq!(ids(&filter_cases(&all, "", "cus-1")), vec!["a", "c"]);
        assert_eq!(ids(&filter_cases(&all, "active", "cus-1")), vec!["a"]);
        assert!(filter_cases(&all, "pending", "").is_empty());
    }

    #[test]
    fn typing_part_of_a_client_name_narrows_the_options() {
        let options = client_options(&[
            customer("cus-1", "Ahmed Al-Harbi"),
            customer("cus-2", "Noor Trading Company"),
            customer("cus-3", "AHMED Salem"),
        ]);
        let hits: Vec<String> = filter_options(&options, "ahmed").into_iter().map(|o| o.id).collect();
        assert_eq!(hits, vec!["cus-1".to_string(), "cus-3".to_string()]);
    }
}
