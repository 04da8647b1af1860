use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::LogOutcome;
use crate::store::ProgressRepository;
use chrono::NaiveDate;
use tracing::warn;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the input, then log `hours` for `skill` today.
    pub fn apply<R: ProgressRepository>(
        store: &mut R,
        cfg: &Config,
        skill: &str,
        hours: f64,
    ) -> AppResult<LogOutcome> {
        let skill = Self::validate(cfg, skill, hours)?;
        store.log_hours(skill, hours)
    }

    /// Same as [`AddLogic::apply`] with an explicit calendar day.
    pub fn apply_on<R: ProgressRepository>(
        store: &mut R,
        cfg: &Config,
        skill: &str,
        hours: f64,
        day: NaiveDate,
    ) -> AppResult<LogOutcome> {
        let skill = Self::validate(cfg, skill, hours)?;
        store.log_hours_on(skill, hours, day)
    }

    /// Returns the trimmed skill name when the pair may be written.
    pub fn validate<'a>(cfg: &Config, skill: &'a str, hours: f64) -> AppResult<&'a str> {
        let skill = skill.trim();
        if skill.is_empty() {
            warn!("rejected empty skill");
            return Err(AppError::EmptySkill);
        }

        if !cfg.accepts_skill(skill) {
            warn!(skill, "rejected skill outside configured list");
            return Err(AppError::UnknownSkill(skill.to_string()));
        }

        if !hours.is_finite() {
            return Err(AppError::InvalidHours("hours must be a numeric value".into()));
        }
        if hours <= 0.0 {
            warn!(hours, "rejected non-positive hours");
            return Err(AppError::InvalidHours("hours must be a positive number".into()));
        }

        Ok(skill)
    }
}
