use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::store::ProgressRepository;
use crate::ui::chart::render_history;
use crate::ui::messages::{header, info};

pub fn handle<R: ProgressRepository>(cmd: &Commands, cfg: &Config, store: &R) -> AppResult<()> {
    if let Commands::History {
        skill,
        width,
        plain,
    } = cmd
    {
        let points = store.history()?;
        let series = HistoryLogic::series(&points, skill.as_deref().map(str::trim));

        if series.is_empty() {
            match skill {
                Some(s) => info(format!("No history for skill '{}'.", s.trim())),
                None => info("No hours logged yet."),
            }
            return Ok(());
        }

        header("📈 History");
        print!(
            "{}",
            render_history(&series, width.unwrap_or(cfg.chart_width), !*plain)
        );
    }

    Ok(())
}
