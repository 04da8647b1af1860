//! Progress Store: the repository seam between the front-end and storage.
//!
//! Consumers only see [`ProgressRepository`]; [`SqliteStore`] is the durable
//! backend and [`MemoryStore`] keeps everything in process.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::{HistoryPoint, LogOutcome, SkillSummary};
use crate::utils::date;
use chrono::NaiveDate;

pub trait ProgressRepository {
    /// Discard every record and start from an empty store.
    fn reset(&mut self) -> AppResult<()>;

    /// Add `hours` to `skill` on `day`.
    ///
    /// When the most recent record of `skill` is dated `day` its hours are
    /// increased, otherwise a new record is inserted. No validation happens
    /// here; callers go through `core::add::AddLogic`.
    fn log_hours_on(&mut self, skill: &str, hours: f64, day: NaiveDate) -> AppResult<LogOutcome>;

    /// Add `hours` to `skill` for today (local date).
    fn log_hours(&mut self, skill: &str, hours: f64) -> AppResult<LogOutcome> {
        self.log_hours_on(skill, hours, date::today())
    }

    /// One row per skill, ordered by skill.
    fn summary(&self) -> AppResult<Vec<SkillSummary>>;

    /// One row per (skill, date), ordered by skill then date.
    fn history(&self) -> AppResult<Vec<HistoryPoint>>;

    /// Overwrite the hours of the (skill, date) record.
    /// Returns how many records were changed; 0 when the pair does not exist.
    /// Duplicate rows of the pair are set to 0 so the pair totals `hours`.
    fn edit_record(&mut self, skill: &str, date: NaiveDate, hours: f64) -> AppResult<usize>;
}
