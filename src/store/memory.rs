use super::ProgressRepository;
use crate::errors::AppResult;
use crate::models::{HistoryPoint, LogOutcome, SessionRecord, SkillSummary};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-process store with the same semantics as [`super::SqliteStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<SessionRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw rows, duplicates included.
    pub fn with_records(records: Vec<SessionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }
}

impl ProgressRepository for MemoryStore {
    fn reset(&mut self) -> AppResult<()> {
        self.records.clear();
        Ok(())
    }

    fn log_hours_on(&mut self, skill: &str, hours: f64, day: NaiveDate) -> AppResult<LogOutcome> {
        // Same lookup as the SQL one: latest date, last inserted on ties.
        let latest = self
            .records
            .iter_mut()
            .filter(|r| r.skill == skill && r.date <= day)
            .max_by_key(|r| r.date);

        match latest {
            Some(rec) if rec.date == day => {
                let previous = rec.hours;
                rec.hours += hours;
                Ok(LogOutcome::Merged {
                    previous,
                    total: rec.hours,
                })
            }
            _ => {
                self.records.push(SessionRecord::new(skill, hours, day));
                Ok(LogOutcome::Inserted { hours })
            }
        }
    }

    fn summary(&self) -> AppResult<Vec<SkillSummary>> {
        let mut by_skill: BTreeMap<&str, (NaiveDate, f64)> = BTreeMap::new();
        for r in &self.records {
            let entry = by_skill.entry(&r.skill).or_insert((r.date, 0.0));
            entry.0 = entry.0.max(r.date);
            entry.1 += r.hours;
        }

        Ok(by_skill
            .into_iter()
            .map(|(skill, (last_date, total_hours))| SkillSummary {
                skill: skill.to_string(),
                last_date,
                total_hours,
            })
            .collect())
    }

    fn history(&self) -> AppResult<Vec<HistoryPoint>> {
        let mut by_pair: BTreeMap<(&str, NaiveDate), f64> = BTreeMap::new();
        for r in &self.records {
            *by_pair.entry((&r.skill, r.date)).or_insert(0.0) += r.hours;
        }

        Ok(by_pair
            .into_iter()
            .map(|((skill, date), total_hours)| HistoryPoint {
                skill: skill.to_string(),
                date,
                total_hours,
            })
            .collect())
    }

    fn edit_record(&mut self, skill: &str, date: NaiveDate, hours: f64) -> AppResult<usize> {
        // Oldest row of the pair takes `hours`, duplicates drop to 0.
        let mut changed = 0;
        for r in self
            .records
            .iter_mut()
            .filter(|r| r.skill == skill && r.date == date)
        {
            r.hours = if changed == 0 { hours } else { 0.0 };
            changed += 1;
        }
        Ok(changed)
    }
}
