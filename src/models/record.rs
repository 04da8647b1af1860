use chrono::NaiveDate;
use serde::Serialize;

/// One (skill, hours, date) row of the `progress` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub skill: String,   // ⇔ progress.skill (TEXT, case-sensitive)
    pub hours: f64,      // ⇔ progress.hours (REAL, additive)
    pub date: NaiveDate, // ⇔ progress.date (TEXT "YYYY-MM-DD")
}

impl SessionRecord {
    pub fn new(skill: impl Into<String>, hours: f64, date: NaiveDate) -> Self {
        Self {
            skill: skill.into(),
            hours,
            date,
        }
    }
}

/// What the write path did with a logged amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogOutcome {
    /// A new record was created for today.
    Inserted { hours: f64 },
    /// Today's record already existed and its hours were increased.
    Merged { previous: f64, total: f64 },
}

impl LogOutcome {
    /// Hours stored for today after the write.
    pub fn total(&self) -> f64 {
        match *self {
            LogOutcome::Inserted { hours } => hours,
            LogOutcome::Merged { total, .. } => total,
        }
    }
}
