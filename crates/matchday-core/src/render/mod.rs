//! Presentation
//!
//! Human-readable renderings of a report together with both line-ups.

mod html;
mod text;

use std::fmt;

use crate::report::{MatchReport, Statistics};
use crate::types::Team;

/// A report plus the teams that played it
#[derive(Debug, Clone, Copy)]
pub struct MatchSheet<'a> {
    pub report: &'a MatchReport,
    pub home: &'a Team,
    pub away: &'a Team,
}

impl<'a> MatchSheet<'a> {
    pub fn new(report: &'a MatchReport, home: &'a Team, away: &'a Team) -> Self {
        Self { report, home, away }
    }

    /// Plain-text match sheet, same as the `Display` output
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Self-contained HTML page
    pub fn to_html(&self) -> String {
        html::HtmlPage(self).to_string()
    }
}

impl fmt::Display for MatchSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_sheet(f, self)
    }
}

/// A statistics line as displayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub home: f64,
    pub away: f64,
    pub percentage: bool,
}

impl StatRow {
    /// Bar widths for home and away, an even split when both are zero
    pub fn shares(&self) -> (f64, f64) {
        let total = self.home + self.away;
        if total > 0.0 {
            (self.home / total * 100.0, self.away / total * 100.0)
        } else {
            (50.0, 50.0)
        }
    }
}

/// Rows to display; red cards only appear when someone was sent off
pub fn stat_rows(stats: &Statistics) -> Vec<StatRow> {
    let row = |label, home: i32, away: i32| StatRow {
        label,
        home: f64::from(home),
        away: f64::from(away),
        percentage: false,
    };

    let mut rows = vec![
        StatRow {
            label: "Possession",
            home: stats.possession.home,
            away: stats.possession.away,
            percentage: true,
        },
        row("Shots", stats.shots.home, stats.shots.away),
        row("Shots on target", stats.shots_on_target.home, stats.shots_on_target.away),
        row("Corners", stats.corners.home, stats.corners.away),
        row("Fouls", stats.fouls.home, stats.fouls.away),
        row("Yellow cards", stats.yellow_cards.home, stats.yellow_cards.away),
    ];
    if stats.red_cards.home > 0 || stats.red_cards.away > 0 {
        rows.push(row("Red cards", stats.red_cards.home, stats.red_cards.away));
    }
    rows
}

/// Whole numbers without a trailing `.0`
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

impl StatRow {
    pub(crate) fn format(&self, value: f64) -> String {
        if self.percentage {
            format!("{}%", format_number(value))
        } else {
            format_number(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn test_red_cards_hidden_when_none() {
        let mut report = sample_report();
        let rows = stat_rows(&report.statistics);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.label != "Red cards"));

        report.statistics.red_cards.away = 1;
        let rows = stat_rows(&report.statistics);
        assert_eq!(rows.last().unwrap().label, "Red cards");
    }

    #[test]
    fn test_shares() {
        let row = StatRow {
            label: "Shots",
            home: 3.0,
            away: 1.0,
            percentage: false,
        };
        assert_eq!(row.shares(), (75.0, 25.0));

        let empty = StatRow { home: 0.0, away: 0.0, ..row };
        assert_eq!(empty.shares(), (50.0, 50.0));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(54.0), "54");
        assert_eq!(format_number(11.5), "11.5");
        let possession = stat_rows(&sample_report().statistics)[0];
        assert_eq!(possession.format(54.0), "54%");
    }
}
