use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::store::ProgressRepository;
use crate::ui::messages::{success, warning};
use std::io::{self, Write};

pub fn handle<R: ProgressRepository>(cmd: &Commands, store: &mut R) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !confirm()? {
            println!("❌ Reset cancelled by user.");
            return Ok(());
        }

        store.reset()?;
        success("All logged hours have been deleted.");
    }

    Ok(())
}

fn confirm() -> AppResult<bool> {
    warning("This deletes every logged hour and cannot be undone.");
    print!("Continue? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
