//! Display Formatting
//!
//! Pure helpers that turn raw values into the strings shown on the dashboard.

use chrono::NaiveDate;

/// Prefix used for every rendered amount
pub const CURRENCY_PREFIX: &str = "$";

/// Wire and form date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an amount as currency with exactly two decimals (`12.5` -> `$12.50`)
pub fn format_currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_PREFIX, amount)
}

/// Format a calendar date in US short form (`Jan 1, 2024`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` date as typed into the form
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Format a date back into the `YYYY-MM-DD` form field representation
pub fn date_field_value(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
