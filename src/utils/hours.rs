//! Hour amounts: parsing user input and formatting stored values.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<h>\d+(?:[.,]\d+)?)\s*h)?\s*(?:(?P<m>\d+)\s*m(?:in)?)?$")
        .expect("valid duration regex")
});

/// Parse an amount of hours.
///
/// Accepted forms: `1.5`, `1,5`, `2h`, `1h30m`, `1h 30m`, `45m`, `45min`.
/// The sign is not checked here; see `core::add`.
pub fn parse_hours(input: &str) -> AppResult<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AppError::InvalidHours("hours must be a numeric value".into()));
    }

    if let Ok(v) = s.replace(',', ".").parse::<f64>() {
        return Ok(v);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(caps) = DURATION_RE.captures(&lower) {
        let h = caps.name("h");
        let m = caps.name("m");
        if h.is_some() || m.is_some() {
            let hours = match h {
                Some(v) => v.as_str().replace(',', ".").parse::<f64>().unwrap_or(0.0),
                None => 0.0,
            };
            let minutes = match m {
                Some(v) => v.as_str().parse::<f64>().unwrap_or(0.0),
                None => 0.0,
            };
            return Ok(hours + minutes / 60.0);
        }
    }

    Err(AppError::InvalidHours(format!(
        "'{}' is not a numeric value (use e.g. 1.5, 90m or 1h30m)",
        input
    )))
}

/// Format an amount of hours with two decimals, e.g. `3.50h`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}h", hours)
}
