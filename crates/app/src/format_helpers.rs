//! Shared formatting utilities for the UI layer. Output is Arabic text with
//! Western digits, as the office's printed documents use.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

const MONTH_NAMES: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

/// Currency suffix for amounts.
pub const CURRENCY: &str = "ر.س";

/// The local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "15 مارس 2026".
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// "15 مارس 2026، 9:30 ص" with a 12-hour clock.
pub fn format_datetime(at: NaiveDateTime) -> String {
    let (is_pm, hour) = at.hour12();
    format!(
        "{}، {}:{:02} {}",
        format_date(at.date()),
        hour,
        at.minute(),
        if is_pm { "م" } else { "ص" }
    )
}

/// Group thousands with commas and drop a zero fraction: 12500.5 → "12,500.50".
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("{} {}", format_number(amount), CURRENCY)
}

/// Human-readable file size.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} ميجابايت", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} كيلوبايت", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} بايت")
    }
}
