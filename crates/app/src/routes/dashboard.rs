use dioxus::prelude::*;
use shared_types::{status_tone, AppError, CourtSession, DashboardStats, FinancialRecord};
use shared_ui::{
    BadgeTone, BarChart, BarDatum, Card, CardContent, CardHeader, EventItem, EventList,
    PageHeader, SkeletonRows, StatCard, StatGrid,
};

use crate::format_helpers::{format_currency, format_date, format_datetime, format_number};

/// Revenue bars, one per month, oldest first.
pub fn revenue_bars(stats: &DashboardStats) -> Vec<BarDatum> {
    stats
        .monthly_revenue
        .iter()
        .map(|m| BarDatum::new(m.label.clone(), m.amount))
        .collect()
}

/// Case counts per status, in status order.
pub fn status_bars(stats: &DashboardStats) -> Vec<BarDatum> {
    stats
        .status_counts
        .iter()
        .map(|c| BarDatum::new(c.status.label(), c.count as f64))
        .collect()
}

pub fn session_items(sessions: &[CourtSession]) -> Vec<EventItem> {
    sessions
        .iter()
        .map(|s| EventItem {
            key: s.id.clone(),
            title: s.case.name.clone(),
            subtitle: format!("{} · {}", s.client.name, s.location),
            meta: format_datetime(s.starts_at),
            badge: Some((
                s.status.label().to_string(),
                BadgeTone::from_key(status_tone(s.status.as_str())),
            )),
        })
        .collect()
}

pub fn finance_items(records: &[FinancialRecord]) -> Vec<EventItem> {
    records
        .iter()
        .map(|r| EventItem {
            key: r.id.clone(),
            title: r.description.clone(),
            subtitle: format!("{} · {}", r.record_type.label(), format_date(r.date)),
            meta: format_currency(r.amount),
            badge: Some((
                r.status.label().to_string(),
                BadgeTone::from_key(status_tone(r.status.as_str())),
            )),
        })
        .collect()
}

/// Office overview: headline figures, revenue chart, case distribution,
/// upcoming sessions and latest money movements.
#[component]
pub fn Dashboard() -> Element {
    let stats = use_resource(move || async move {
        server::api::dashboard_stats()
            .await
            .map_err(|e| AppError::from_transport(&e.to_string()))
    });

    rsx! {
        PageHeader {
            title: "لوحة التحكم",
            subtitle: "نظرة عامة على أعمال المكتب",
        }

        match &*stats.read() {
            Some(Ok(stats)) => rsx! { DashboardBody { stats: stats.clone() } },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading dashboard failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل بيانات لوحة التحكم" }
                }
            }
            None => rsx! { SkeletonRows { rows: 6 } },
        }
    }
}

#[component]
fn DashboardBody(stats: DashboardStats) -> Element {
    let money = Callback::new(|v: f64| format_currency(v));

    rsx! {
        StatGrid {
            StatCard {
                title: "إجمالي القضايا",
                value: format_number(stats.total_cases as f64),
                hint: format!("{} نشطة", stats.active_cases),
                tone: BadgeTone::Info,
            }
            StatCard {
                title: "العملاء النشطون",
                value: format_number(stats.active_customers as f64),
                tone: BadgeTone::Success,
            }
            StatCard {
                title: "الإيرادات المحصلة",
                value: format_currency(stats.collected_revenue),
                tone: BadgeTone::Success,
            }
            StatCard {
                title: "المبالغ المستحقة",
                value: format_currency(stats.outstanding),
                tone: BadgeTone::Warning,
            }
        }

        div { class: "dashboard-charts",
            Card {
                CardHeader { title: "الإيرادات الشهرية", description: "آخر ستة أشهر" }
                CardContent {
                    BarChart { data: revenue_bars(&stats), format_value: money }
                }
            }
            Card {
                CardHeader { title: "توزيع القضايا حسب الحالة" }
                CardContent {
                    BarChart { data: status_bars(&stats), height_px: 140 }
                }
            }
        }

        div { class: "dashboard-lists",
            Card {
                CardHeader { title: "الجلسات القادمة" }
                CardContent {
                    EventList {
                        items: session_items(&stats.upcoming_sessions),
                        empty_text: "لا توجد جلسات قادمة",
                    }
                }
            }
            Card {
                CardHeader { title: "أحدث الحركات المالية" }
                CardContent {
                    EventList {
                        items: finance_items(&stats.recent_finance),
                        empty_text: "لا توجد حركات مالية",
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
    use shared_types::{
        CaseStatus, EntityRef, FinancialStatus, FinancialType, MonthlyRevenue, SessionStatus,
        StatusCount,
    };

    fn stats() -> DashboardStats {
        let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        DashboardStats {
            total_cases: 3,
            active_cases: 2,
            status_counts: vec![
                StatusCount { status: CaseStatus::Active, count: 2 },
                StatusCount { status: CaseStatus::Closed, count: 1 },
            ],
            active_customers: 1,
            upcoming_sessions: vec![CourtSession {
                id: "ses-9".into(),
                starts_at: day.and_hms_opt(9, 30, 0).unwrap(),
                location: "المحكمة العامة".into(),
                status: SessionStatus::Upcoming,
                case: EntityRef::new("case-1", "نزاع تجاري"),
                client: EntityRef::new("cus-1", "أحمد الحربي"),
            }],
            recent_finance: vec![FinancialRecord {
                id: "fin-9".into(),
                amount: 2500.0,
                date: day,
                description: "دفعة أولى".into(),
                record_type: FinancialType::Payment,
                status: FinancialStatus::Paid,
                source: None,
            }],
            collected_revenue: 2500.0,
            outstanding: 0.0,
            monthly_revenue: vec![
                MonthlyRevenue { year: 2026, month: 2, label: "فبراير".into(), amount: 0.0 },
                MonthlyRevenue { year: 2026, month: 3, label: "مارس".into(), amount: 2500.0 },
            ],
        }
    }

    #[test]
    fn revenue_bars_follow_months() {
        let bars = revenue_bars(&stats());
        assert_eq!(bars, vec![BarDatum::new("فبراير", 0.0), BarDatum::new("مارس", 2500.0)]);
    }

    #[test]
    fn status_bars_use_labels() {
        let bars = status_bars(&stats());
        assert_eq!(bars[0], BarDatum::new("نشطة", 2.0));
        assert_eq!(bars[1], BarDatum::new("مغلقة", 1.0));
    }

    #[test]
    fn session_items_carry_case_and_badge() {
        let items = session_items(&stats().upcoming_sessions);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "نزاع تجاري");
        assert!(items[0].subtitle.contains("المحكمة العامة"));
        assert_eq!(items[0].badge, Some(("قادمة".to_string(), BadgeTone::Warning)));
    }

    #[test]
    fn finance_items_show_amount_and_status() {
        let items = finance_items(&stats().recent_finance);
        assert_eq!(items[0].meta, format_currency(2500.0));
        assert_eq!(items[0].badge, Some(("مدفوع".to_string(), BadgeTone::Success)));
    }
}
