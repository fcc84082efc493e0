//! Shared primitive helpers used across the generation stages.

use chrono::{Datelike, NaiveDate};

/// Format a date's month as the `YYYY-MM` key used by the deflection
/// dataset and the service-level month lookup.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Round a rate to the 3 decimal places the JSON contract carries.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
