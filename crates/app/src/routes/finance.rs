use dioxus::prelude::*;
use shared_types::{DataProvider, FinancialRecord, FinancialSource, FinancialType};
use shared_ui::{
    BadgeTone, DataTable, DataTableCell, DataTableEmpty, DataTableRow, FormSelect, PageHeader,
    SearchBar, SelectOption, SkeletonRows, StatCard, StatGrid,
};

use crate::components::StatusBadge;
use crate::data::provider;
use crate::format_helpers::{format_currency, format_date};

/// Collected and outstanding sums over the listed records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinanceTotals {
    pub collected: f64,
    pub outstanding: f64,
}

pub fn totals(records: &[FinancialRecord]) -> FinanceTotals {
    records.iter().fold(FinanceTotals::default(), |mut acc, r| {
        if r.is_collected() {
            acc.collected += r.amount;
        }
        if r.is_outstanding() {
            acc.outstanding += r.amount;
        }
        acc
    })
}

fn source_label(source: &Option<FinancialSource>) -> String {
    match source {
        Some(source) => format!("{} {}", source.source_type().label(), source.id()),
        None => "—".to_string(),
    }
}

#[component]
pub fn Finance() -> Element {
    let mut search_query = use_signal(String::new);
    let mut filter_type = use_signal(String::new);

    let records = use_resource(move || {
        let q = search_query.read().clone();
        async move { provider::<FinancialRecord>().search(&q).await }
    });

    let type_options: Vec<SelectOption> = FinancialType::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect();

    rsx! {
        PageHeader { title: "المالية", subtitle: "الدفعات والفواتير والمطالبات" }

        SearchBar {
            value: search_query(),
            on_search: move |q: String| search_query.set(q),
            placeholder: "ابحث في وصف الحركة...",
            FormSelect {
                value: filter_type(),
                options: type_options,
                placeholder: "كل الأنواع",
                onchange: move |v: String| filter_type.set(v),
            }
        }

        match &*records.read() {
            Some(Ok(all)) => {
                let kind = filter_type.read().clone();
                let rows: Vec<FinancialRecord> = all
                    .iter()
                    .filter(|r| kind.is_empty() || r.record_type.as_str() == kind)
                    .cloned()
                    .collect();
                let sums = totals(&rows);
                rsx! {
                    StatGrid {
                        StatCard {
                            title: "المحصّل",
                            value: format_currency(sums.collected),
                            tone: BadgeTone::Success,
                        }
                        StatCard {
                            title: "المستحق",
                            value: format_currency(sums.outstanding),
                            tone: BadgeTone::Warning,
                        }
                    }
                    DataTable { columns: vec!["التاريخ", "الوصف", "النوع", "المرتبط بـ", "المبلغ", "الحالة"],
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 6, message: "لا توجد حركات مالية" }
                        }
                        for record in rows.iter() {
                            DataTableRow { key: "{record.id}",
                                DataTableCell { "{format_date(record.date)}" }
                                DataTableCell { "{record.description}" }
                                DataTableCell { "{record.record_type.label()}" }
                                DataTableCell { "{source_label(&record.source)}" }
                                DataTableCell { "{format_currency(record.amount)}" }
                                DataTableCell {
                                    StatusBadge { key_name: record.status.as_str(), label: record.status.label() }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading finance records failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل السجلات المالية" }
                }
            }
            None => rsx! { SkeletonRows { rows: 6 } },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::FinancialStatus;

    fn record(amount: f64, record_type: FinancialType, status: FinancialStatus) -> FinancialRecord {
        FinancialRecord {
            id: format!("r-{amount}"),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            description: "حركة".into(),
            record_type,
            status,
            source: None,
        }
    }

    #[test]
    fn totals_split_collected_and_outstanding() {
        let sums = totals(&[
            record(1000.0, FinancialType::Payment, FinancialStatus::Paid),
            record(2000.0, FinancialType::Invoice, FinancialStatus::Paid),
            record(500.0, FinancialType::Invoice, FinancialStatus::Pending),
            record(300.0, FinancialType::Claim, FinancialStatus::Pending),
            record(999.0, FinancialType::Refund, FinancialStatus::Paid),
            record(50.0, FinancialType::Payment, FinancialStatus::Cancelled),
        ]);
        assert_eq!(sums, FinanceTotals { collected: 3000.0, outstanding: 800.0 });
    }

    #[test]
    fn source_labels() {
        assert_eq!(source_label(&Some(FinancialSource::Case("case-1".into()))), "قضية case-1");
        assert_eq!(source_label(&Some(FinancialSource::Employee("emp-6".into()))), "موظف emp-6");
        assert_eq!(source_label(&None), "—");
    }
}
