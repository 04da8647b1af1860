use crate::cli::parser::Commands;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::ProgressRepository;

pub fn handle<R: ProgressRepository>(cmd: &Commands, store: &R) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        summary,
        force,
    } = cmd
    {
        ExportLogic::export(store, *format, file, *summary, *force)?;
    }
    Ok(())
}
