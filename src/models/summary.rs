use chrono::NaiveDate;
use serde::Serialize;

/// Per-skill aggregate: total hours across all history and the most recent day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSummary {
    pub skill: String,
    pub last_date: NaiveDate,
    pub total_hours: f64,
}

/// Per-skill, per-day aggregate used to drive the history chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub skill: String,
    pub date: NaiveDate,
    pub total_hours: f64,
}

/// History of a single skill, one point per day in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillSeries {
    pub skill: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl SkillSeries {
    pub fn max_hours(&self) -> f64 {
        self.points.iter().map(|(_, h)| *h).fold(0.0, f64::max)
    }

    pub fn total_hours(&self) -> f64 {
        self.points.iter().map(|(_, h)| *h).sum()
    }
}
