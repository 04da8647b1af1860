/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colored amount of hours.
///
/// Example:
/// `colorize_hours(0.0)` → "<grey>0.00h<reset>"
pub fn colorize_hours(value: f64) -> String {
    let txt = super::hours::format_hours(value);
    if value > 0.0 {
        txt
    } else {
        format!("{GREY}{txt}{RESET}")
    }
}
