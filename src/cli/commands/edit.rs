use crate::cli::parser::Commands;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::store::ProgressRepository;
use crate::ui::messages::success;
use crate::utils::date::parse_day;
use crate::utils::{format_hours, parse_hours};

pub fn handle<R: ProgressRepository>(cmd: &Commands, store: &mut R) -> AppResult<()> {
    if let Commands::Edit { skill, date, hours } = cmd {
        let d = parse_day(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let h = parse_hours(hours)?;

        EditLogic::apply(store, skill, d, h)?;
        success(format!(
            "{} on {} set to {}",
            skill.trim(),
            d.format("%Y-%m-%d"),
            format_hours(h)
        ));

        super::summary::print_summary(store)?;
    }

    Ok(())
}
