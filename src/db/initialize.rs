use crate::errors::AppResult;
use rusqlite::Connection;

const CREATE_PROGRESS: &str = r#"
    CREATE TABLE IF NOT EXISTS progress (
        skill TEXT NOT NULL,
        hours REAL NOT NULL,
        date  TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_progress_skill_date ON progress(skill, date);
"#;

/// Initialize the database.
/// Creates the `progress` table if missing; existing rows are kept.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(CREATE_PROGRESS)?;
    Ok(())
}

/// Drop the `progress` table and create it again, empty.
pub fn reset_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("DROP TABLE IF EXISTS progress;")?;
    conn.execute_batch(CREATE_PROGRESS)?;
    Ok(())
}
