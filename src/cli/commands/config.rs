use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::process::Command;

/// Editor for `config --edit`: `--editor`, then $EDITOR / $VISUAL, then the platform default.
fn resolve_editor(requested: &Option<String>) -> String {
    requested
        .clone()
        .or_else(|| std::env::var("EDITOR").ok())
        .or_else(|| std::env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            // Give the editor something to start from.
            if !path.exists() {
                cfg.save_to(&path)?;
            }

            let ed = resolve_editor(editor);
            let status = Command::new(&ed)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("cannot run editor '{}': {}", ed, e)))?;
            if !status.success() {
                return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
            }

            // A broken file would fail every later command; report it now.
            let edited = Config::load_from(&path)?;
            success(format!(
                "Configuration saved: {} skills, database {}",
                edited.skills.len(),
                edited.database
            ));
        }
    }

    Ok(())
}
