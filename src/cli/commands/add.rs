use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::LogOutcome;
use crate::store::ProgressRepository;
use crate::ui::messages::success;
use crate::utils::{format_hours, parse_hours};

/// Log hours for a skill, then show the refreshed summary.
pub fn handle<R: ProgressRepository>(cmd: &Commands, cfg: &Config, store: &mut R) -> AppResult<()> {
    if let Commands::Add { skill, hours } = cmd {
        let h = parse_hours(hours)?;

        let outcome = AddLogic::apply(store, cfg, skill, h)?;
        match outcome {
            LogOutcome::Inserted { .. } => success(format!(
                "Logged {} of {} for today",
                format_hours(outcome.total()),
                skill.trim()
            )),
            LogOutcome::Merged { previous, .. } => success(format!(
                "Added {} to {} today: {} → {}",
                format_hours(h),
                skill.trim(),
                format_hours(previous),
                format_hours(outcome.total())
            )),
        }

        super::summary::print_summary(store)?;
    }

    Ok(())
}
