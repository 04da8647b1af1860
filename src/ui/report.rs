//! Text tables for the summary and the per-day record listing.

use crate::models::{HistoryPoint, SkillSummary};
use crate::utils::colors::colorize_hours;
use crate::utils::table::{Column, Table};

pub const EMPTY_STORE: &str = "No hours logged yet.";

pub fn render_summary(rows: &[SkillSummary]) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_STORE}\n");
    }

    let mut table = Table::new(vec![
        Column::left("Skill"),
        Column::right("Total Hours"),
        Column::left("Last Date"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.skill.clone(),
            colorize_hours(r.total_hours),
            r.last_date.format("%Y-%m-%d").to_string(),
        ]);
    }

    table.render()
}

pub fn render_records(rows: &[HistoryPoint]) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_STORE}\n");
    }

    let mut table = Table::new(vec![
        Column::left("Skill"),
        Column::left("Date"),
        Column::right("Hours"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.skill.clone(),
            r.date.format("%Y-%m-%d").to_string(),
            colorize_hours(r.total_hours),
        ]);
    }

    table.render()
}
