use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDS / SKILLS
    //
    let count = count_records(&pool.conn)?;
    let skills: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT skill) FROM progress", [], |row| {
            row.get(0)
        })?;
    println!("{}• Records:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!("{}• Skills:{} {}{}{}", CYAN, RESET, GREEN, skills, RESET);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM progress", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTAL HOURS
    //
    let total: Option<f64> = pool
        .conn
        .query_row("SELECT SUM(hours) FROM progress", [], |row| row.get(0))?;
    println!(
        "{}• Total hours:{} {:.2}",
        CYAN,
        RESET,
        total.unwrap_or(0.0)
    );

    println!();
    Ok(())
}
