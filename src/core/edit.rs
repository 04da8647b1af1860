use crate::errors::{AppError, AppResult};
use crate::store::ProgressRepository;
use chrono::NaiveDate;

pub struct EditLogic;

impl EditLogic {
    /// Overwrite the hours stored for (skill, date).
    ///
    /// Zero is allowed (it blanks a day without deleting it), negative and
    /// non-finite values are not.
    pub fn apply<R: ProgressRepository>(
        store: &mut R,
        skill: &str,
        date: NaiveDate,
        hours: f64,
    ) -> AppResult<()> {
        if !hours.is_finite() {
            return Err(AppError::InvalidHours("hours must be a numeric value".into()));
        }
        if hours < 0.0 {
            return Err(AppError::InvalidHours("hours cannot be negative".into()));
        }

        let skill = skill.trim();
        if skill.is_empty() {
            return Err(AppError::EmptySkill);
        }

        match store.edit_record(skill, date, hours)? {
            0 => Err(AppError::RecordNotFound {
                skill: skill.to_string(),
                date: date.format("%Y-%m-%d").to_string(),
            }),
            _ => Ok(()),
        }
    }
}
