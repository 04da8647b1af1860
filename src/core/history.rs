use crate::models::{HistoryPoint, SkillSeries};

pub struct HistoryLogic;

impl HistoryLogic {
    /// Group history rows into one series per skill.
    ///
    /// Rows arrive ordered by skill then date, so a new series starts every
    /// time the skill changes. With `only` set, other skills are skipped.
    pub fn series(points: &[HistoryPoint], only: Option<&str>) -> Vec<SkillSeries> {
        let mut out: Vec<SkillSeries> = Vec::new();

        for p in points {
            if only.is_some_and(|s| s != p.skill) {
                continue;
            }

            match out.last_mut() {
                Some(series) if series.skill == p.skill => {
                    series.points.push((p.date, p.total_hours));
                }
                _ => out.push(SkillSeries {
                    skill: p.skill.clone(),
                    points: vec![(p.date, p.total_hours)],
                }),
            }
        }

        out
    }
}
