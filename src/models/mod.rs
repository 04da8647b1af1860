pub mod record;
pub mod summary;

pub use record::{LogOutcome, SessionRecord};
pub use summary::{HistoryPoint, SkillSeries, SkillSummary};
