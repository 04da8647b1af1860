pub mod colors;
pub mod date;
pub mod hours;
pub mod logging;
pub mod path;
pub mod table;

pub use hours::{format_hours, parse_hours};
