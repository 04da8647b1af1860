use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::store::ProgressRepository;
use crate::ui::messages::header;
use crate::ui::report::{render_records, render_summary};

pub fn handle<R: ProgressRepository>(cmd: &Commands, store: &R) -> AppResult<()> {
    match cmd {
        Commands::Summary => print_summary(store),
        Commands::List => {
            header("📋 Records");
            print!("{}", render_records(&store.history()?));
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Re-query the store and print the summary table.
pub fn print_summary<R: ProgressRepository>(store: &R) -> AppResult<()> {
    header("📊 Progress");
    print!("{}", render_summary(&store.summary()?));
    Ok(())
}
