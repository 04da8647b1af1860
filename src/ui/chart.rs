//! Bar-chart rendering of the history, one panel per skill.

use crate::models::SkillSeries;
use crate::utils::hours::format_hours;
use ansi_term::Colour;

const PALETTE: [Colour; 5] = [
    Colour::Cyan,
    Colour::Green,
    Colour::Yellow,
    Colour::Purple,
    Colour::Blue,
];

/// Number of bar cells for `hours` on a panel whose tallest bar is `max`.
/// Any positive amount gets at least one cell.
pub fn bar_len(hours: f64, max: f64, width: usize) -> usize {
    if hours <= 0.0 || max <= 0.0 || width == 0 {
        return 0;
    }
    let cells = (hours / max * width as f64).round() as usize;
    cells.clamp(1, width)
}

/// Render every series. When `color` is false the output has no ANSI escapes.
pub fn render_history(series: &[SkillSeries], width: usize, color: bool) -> String {
    let mut out = String::new();

    for (i, s) in series.iter().enumerate() {
        let colour = PALETTE[i % PALETTE.len()];
        let title = format!("Skill: {} ({} total)", s.skill, format_hours(s.total_hours()));
        if color {
            out.push_str(&colour.bold().paint(title).to_string());
        } else {
            out.push_str(&title);
        }
        out.push('\n');

        let max = s.max_hours();
        for (date, hours) in &s.points {
            let bar = "█".repeat(bar_len(*hours, max, width));
            let bar = if color {
                colour.paint(bar).to_string()
            } else {
                bar
            };
            out.push_str(&format!(
                "  {} | {} {}\n",
                date.format("%Y-%m-%d"),
                bar,
                format_hours(*hours)
            ));
        }
        out.push('\n');
    }

    out
}
