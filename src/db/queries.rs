use crate::errors::{AppError, AppResult};
use crate::models::{HistoryPoint, SessionRecord, SkillSummary};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn date_to_db(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn date_from_db(row: &Row, idx: usize) -> Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

/// Most recent record for `skill` dated no later than `not_after`, with its rowid.
///
/// Rows dated after `not_after` are ignored so that a future-dated row can
/// never hide the one for `not_after` itself. On duplicate rows for a day the
/// last inserted one wins.
pub fn latest_record_for_skill(
    conn: &Connection,
    skill: &str,
    not_after: &NaiveDate,
) -> AppResult<Option<(i64, SessionRecord)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT rowid, skill, hours, date FROM progress
         WHERE skill = ?1 AND date <= ?2
         ORDER BY date DESC, rowid DESC
         LIMIT 1",
    )?;

    let rec = stmt
        .query_row(params![skill, date_to_db(not_after)], |row| {
            Ok((
                row.get(0)?,
                SessionRecord {
                    skill: row.get(1)?,
                    hours: row.get(2)?,
                    date: date_from_db(row, 3)?,
                },
            ))
        })
        .optional()?;

    Ok(rec)
}

pub fn insert_record(conn: &Connection, rec: &SessionRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO progress (skill, hours, date) VALUES (?1, ?2, ?3)",
        params![rec.skill, rec.hours, date_to_db(&rec.date)],
    )?;
    Ok(())
}

/// Set `hours` (and `date`) of the single row `rowid`.
pub fn update_row_hours(conn: &Connection, rowid: i64, date: &NaiveDate, hours: f64) -> AppResult<()> {
    conn.execute(
        "UPDATE progress SET hours = ?1, date = ?2 WHERE rowid = ?3",
        params![hours, date_to_db(date), rowid],
    )?;
    Ok(())
}

/// Overwrite `hours` for the (skill, date) pair. Returns the number of rows touched.
///
/// When the pair is stored more than once, the oldest row takes `hours` and
/// the others are set to 0, so the pair still sums to exactly `hours`.
pub fn update_hours(conn: &Connection, skill: &str, date: &NaiveDate, hours: f64) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE progress
         SET hours = CASE
             WHEN rowid = (SELECT MIN(rowid) FROM progress WHERE skill = ?2 AND date = ?3)
             THEN ?1 ELSE 0 END
         WHERE skill = ?2 AND date = ?3",
        params![hours, skill, date_to_db(date)],
    )?;
    Ok(changed)
}

pub fn load_summary(conn: &Connection) -> AppResult<Vec<SkillSummary>> {
    let mut stmt = conn.prepare_cached(
        "SELECT skill, MAX(date) AS last_date, SUM(hours) AS total_hours
         FROM progress
         GROUP BY skill
         ORDER BY skill ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(SkillSummary {
            skill: row.get(0)?,
            last_date: date_from_db(row, 1)?,
            total_hours: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_history(conn: &Connection) -> AppResult<Vec<HistoryPoint>> {
    let mut stmt = conn.prepare_cached(
        "SELECT skill, date, SUM(hours) AS total_hours
         FROM progress
         GROUP BY skill, date
         ORDER BY skill ASC, date ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(HistoryPoint {
            skill: row.get(0)?,
            date: date_from_db(row, 1)?,
            total_hours: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM progress", [], |row| row.get(0))?;
    Ok(count)
}

/// (skill, date, count) for every pair stored more than once.
pub fn duplicate_pairs(conn: &Connection) -> AppResult<Vec<(String, String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT skill, date, COUNT(*) FROM progress
         GROUP BY skill, date
         HAVING COUNT(*) > 1
         ORDER BY skill ASC, date ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
