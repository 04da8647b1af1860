use super::ProgressRepository;
use crate::db::initialize::reset_db;
use crate::db::pool::DbPool;
use crate::db::queries::{
    insert_record, latest_record_for_skill, load_history, load_summary, update_hours,
    update_row_hours,
};
use crate::errors::AppResult;
use crate::models::{HistoryPoint, LogOutcome, SessionRecord, SkillSummary};
use chrono::NaiveDate;
use rusqlite::TransactionBehavior;
use tracing::{debug, info};

/// SQLite-backed store. Holds only the database path; every operation opens
/// its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> AppResult<DbPool> {
        debug!(db = %self.path, "opening connection");
        DbPool::new(&self.path)
    }
}

impl ProgressRepository for SqliteStore {
    fn reset(&mut self) -> AppResult<()> {
        let pool = self.open()?;
        reset_db(&pool.conn)?;
        info!(db = %self.path, "progress table reset");
        Ok(())
    }

    fn log_hours_on(&mut self, skill: &str, hours: f64, day: NaiveDate) -> AppResult<LogOutcome> {
        let mut pool = self.open()?;

        pool.with_conn(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let outcome = match latest_record_for_skill(&tx, skill, &day)? {
                Some((rowid, rec)) if rec.date == day => {
                    let total = rec.hours + hours;
                    update_row_hours(&tx, rowid, &day, total)?;
                    LogOutcome::Merged {
                        previous: rec.hours,
                        total,
                    }
                }
                _ => {
                    insert_record(&tx, &SessionRecord::new(skill, hours, day))?;
                    LogOutcome::Inserted { hours }
                }
            };

            tx.commit()?;
            info!(skill, hours, %day, ?outcome, "hours logged");
            Ok(outcome)
        })
    }

    fn summary(&self) -> AppResult<Vec<SkillSummary>> {
        let pool = self.open()?;
        load_summary(&pool.conn)
    }

    fn history(&self) -> AppResult<Vec<HistoryPoint>> {
        let pool = self.open()?;
        load_history(&pool.conn)
    }

    fn edit_record(&mut self, skill: &str, date: NaiveDate, hours: f64) -> AppResult<usize> {
        let pool = self.open()?;
        let changed = update_hours(&pool.conn, skill, &date, hours)?;
        info!(skill, %date, hours, changed, "record edited");
        Ok(changed)
    }
}
