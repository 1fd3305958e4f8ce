use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::case::{CaseStatus, LegalCase};
use crate::customer::{Customer, CustomerStatus};
use crate::finance::FinancialRecord;
use crate::session::{CourtSession, SessionStatus};

/// How many upcoming sessions and recent records the dashboard lists.
pub const DASHBOARD_LIST_LEN: usize = 5;

/// Number of months in the revenue chart, ending at the current month.
pub const REVENUE_MONTHS: usize = 6;

const MONTH_NAMES: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: CaseStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub amount: f64,
}

/// Aggregated figures for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_cases: usize,
    pub active_cases: usize,
    pub status_counts: Vec<StatusCount>,
    pub active_customers: usize,
    pub upcoming_sessions: Vec<CourtSession>,
    pub recent_finance: Vec<FinancialRecord>,
    pub collected_revenue: f64,
    pub outstanding: f64,
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

impl DashboardStats {
    pub fn compute(
        cases: &[LegalCase],
        customers: &[Customer],
        sessions: &[CourtSession],
        finance: &[FinancialRecord],
        today: NaiveDate,
    ) -> Self {
        let status_counts = CaseStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: cases.iter().filter(|c| c.status == *status).count(),
            })
            .collect();

        let mut upcoming: Vec<CourtSession> = sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Upcoming && s.starts_at.date() >= today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|s| s.starts_at);
        upcoming.truncate(DASHBOARD_LIST_LEN);

        let mut recent: Vec<FinancialRecord> = finance.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(DASHBOARD_LIST_LEN);

        Self {
            total_cases: cases.len(),
            active_cases: cases
                .iter()
                .filter(|c| c.status == CaseStatus::Active)
                .count(),
            status_counts,
            active_customers: customers
                .iter()
                .filter(|c| c.status == CustomerStatus::Active)
                .count(),
            upcoming_sessions: upcoming,
            recent_finance: recent,
            collected_revenue: finance
                .iter()
                .filter(|r| r.is_collected())
                .map(|r| r.amount)
                .sum(),
            outstanding: finance
                .iter()
                .filter(|r| r.is_outstanding())
                .map(|r| r.amount)
                .sum(),
            monthly_revenue: monthly_revenue(finance, today),
        }
    }
}

/// Collected revenue per month for the last [`REVENUE_MONTHS`] months,
/// oldest first.
pub fn monthly_revenue(finance: &[FinancialRecord], today: NaiveDate) -> Vec<MonthlyRevenue> {
    let mut months = Vec::with_capacity(REVENUE_MONTHS);
    let (mut year, mut month) = (today.year(), today.month());
    for _ in 0..REVENUE_MONTHS {
        months.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    months.reverse();

    months
        .into_iter()
        .map(|(year, month)| MonthlyRevenue {
            year,
            month,
            label: MONTH_NAMES[(month - 1) as usize].to_string(),
            amount: finance
                .iter()
                .filter(|r| r.is_collected() && r.date.year() == year && r.date.month() == month)
                .map(|r| r.amount)
                .sum(),
        })
        .collect()
}

/// Badge tone for a status wire key. Unknown keys are neutral.
pub fn status_tone(key: &str) -> &'static str {
    match key {
        "active" | "paid" | "valid" | "finished" => "success",
        "pending" | "upcoming" | "on_leave" => "warning",
        "processing" | "in_progress" => "info",
        "closed" | "inactive" | "cancelled" | "expired" | "terminated" | "suspended" => "muted",
        _ => "neutral",
    }
}
