use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    header("🎯 Skills");
    for s in &cfg.skills {
        println!("- {}", s);
    }

    if cfg.restrict_skills {
        info("Only the skills above can be logged.");
    } else {
        info("Any other skill name can be logged as well.");
    }
    Ok(())
}
