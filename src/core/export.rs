use crate::errors::{AppError, AppResult};
use crate::models::{HistoryPoint, SkillSummary};
use crate::store::ProgressRepository;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use csv::Writer;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::info as trace_info;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row for export; hours are written as plain numbers.
#[derive(Serialize, Debug)]
struct SummaryExport<'a> {
    skill: &'a str,
    last_date: String,
    total_hours: f64,
}

#[derive(Serialize, Debug)]
struct HistoryExport<'a> {
    skill: &'a str,
    date: String,
    hours: f64,
}

impl<'a> From<&'a SkillSummary> for SummaryExport<'a> {
    fn from(s: &'a SkillSummary) -> Self {
        Self {
            skill: &s.skill,
            last_date: s.last_date.format("%Y-%m-%d").to_string(),
            total_hours: s.total_hours,
        }
    }
}

impl<'a> From<&'a HistoryPoint> for HistoryExport<'a> {
    fn from(p: &'a HistoryPoint) -> Self {
        Self {
            skill: &p.skill,
            date: p.date.format("%Y-%m-%d").to_string(),
            hours: p.total_hours,
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the summary (`summary == true`) or the full per-day history to `file`.
    /// Returns the number of exported rows.
    pub fn export<R: ProgressRepository>(
        store: &R,
        format: ExportFormat,
        file: &str,
        summary: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let count = if summary {
            let rows = store.summary()?;
            let flat: Vec<SummaryExport> = rows.iter().map(SummaryExport::from).collect();
            write_rows(path, format, &flat)?;
            flat.len()
        } else {
            let rows = store.history()?;
            let flat: Vec<HistoryExport> = rows.iter().map(HistoryExport::from).collect();
            write_rows(path, format, &flat)?;
            flat.len()
        };

        trace_info!(file, format = format.as_str(), count, summary, "export written");
        let label = if summary { "Summary" } else { "History" };
        success(format!(
            "{label} export completed: {} ({} rows)",
            path.display(),
            count
        ));
        Ok(count)
    }
}

fn write_rows<T: Serialize>(path: &Path, format: ExportFormat, rows: &[T]) -> AppResult<()> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = Writer::from_path(path)?;
            for r in rows {
                wtr.serialize(r)?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(rows)?;
            std::fs::write(path, json)?;
        }
    }
    Ok(())
}

/// Check whether a file may be created or overwritten.
///
/// - file missing → Ok
/// - file exists and `force` → Ok
/// - file exists and not `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}
