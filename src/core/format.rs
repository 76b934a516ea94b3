use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::config::{CURRENCY_SYMBOL, DISPLAY_UTC_OFFSET_SECS};

/// Card due date, e.g. `Jan 15, 2024`.
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Created/updated stamp in the board's display timezone,
/// e.g. `19 Oct 2026, 02:15 pm`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS) {
        Some(offset) => at.with_timezone(&offset).format("%-d %b %Y, %I:%M %P").to_string(),
        None => at.format("%-d %b %Y, %I:%M %P").to_string(),
    }
}

/// Rupee amount with Indian digit grouping and two decimals,
/// e.g. `₹12,34,567.50`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = (paise / 100).to_string();
    let fraction = paise % 100;

    format!(
        "{}{}{}.{:02}",
        if negative && paise > 0 { "-" } else { "" },
        CURRENCY_SYMBOL,
        group_indian(&whole),
        fraction
    )
}

// Last three digits form one group, the rest group in pairs: 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
