use std::fmt::{self, Write};

use super::{format_number, stat_rows, MatchSheet};
use crate::types::Team;

const RULE: &str = "----------------------------------------------------------------";

pub(super) fn write_sheet<W: Write>(out: &mut W, sheet: &MatchSheet<'_>) -> fmt::Result {
    let report = sheet.report;

    writeln!(
        out,
        "{}  {} - {}  {}",
        sheet.home.name, report.score.home, report.score.away, sheet.away.name
    )?;
    writeln!(
        out,
        "Half time: {} - {}",
        report.score.half_time.home, report.score.half_time.away
    )?;
    writeln!(
        out,
        "Weather: {}, {}°C, pitch {}",
        report.weather.condition,
        format_number(report.weather.temperature),
        report.weather.pitch_condition
    )?;

    section(out, "STARTING LINE-UPS")?;
    lineup(out, sheet.home)?;
    out.write_char('\n')?;
    lineup(out, sheet.away)?;

    section(out, "MATCH FLOW")?;
    writeln!(out, "First half\n{}\n", report.match_flow.first_half)?;
    writeln!(out, "Second half\n{}", report.match_flow.second_half)?;

    section(out, "GOALS")?;
    if report.goals.is_empty() {
        out.write_str("No goals\n")?;
    }
    for goal in &report.goals {
        writeln!(out, "{:>3}'  {} ({})", goal.minute, goal.scorer, goal.team)?;
        if let Some(assist) = goal.assist() {
            writeln!(out, "      Assist: {}", assist)?;
        }
        writeln!(out, "      {}", goal.description)?;
    }

    section(out, "HIGHLIGHTS")?;
    if report.highlights.is_empty() {
        out.write_str("No highlights\n")?;
    }
    for highlight in &report.highlights {
        writeln!(out, "{:>3}'  {}", highlight.minute, highlight.description)?;
    }

    section(out, "STATISTICS")?;
    writeln!(
        out,
        "{:>8}  {:^20}  {:<8}",
        sheet.home.name, "", sheet.away.name
    )?;
    for row in stat_rows(&report.statistics) {
        writeln!(
            out,
            "{:>8}  {:^20}  {:<8}",
            row.format(row.home),
            row.label,
            row.format(row.away)
        )?;
    }

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    write!(out, "\n{}\n{}\n{}\n", RULE, title, RULE)
}

fn lineup<W: Write>(out: &mut W, team: &Team) -> fmt::Result {
    writeln!(out, "{} ({}, manager {})", team.name, team.formation, team.manager)?;
    for player in &team.players {
        writeln!(out, "  {:<3} {}", player.position, player.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::render::MatchSheet;
    use crate::report::fixtures::sample_report;
    use crate::types::{Player, Position, Team};

    fn teams() -> (Team, Team) {
        let home = Team::new("Arsenal", "Arteta", "4-3-3")
            .with_players(vec![Player::new("Raya", Position::GK)]);
        let away = Team::new("Liverpool", "Slot", "4-2-3-1")
            .with_players(vec![Player::new("Alisson", Position::GK)]);
        (home, away)
    }

    #[test]
    fn test_text_sheet() {
        let report = sample_report();
        let (home, away) = teams();
        let text = MatchSheet::new(&report, &home, &away).to_text();

        assert!(text.starts_with("Arsenal  2 - 1  Liverpool\n"));
        assert!(text.contains("Half time: 1 - 0"));
        assert!(text.contains("Weather: Light rain, 11.5°C, pitch Slick"));
        assert!(text.contains("Liverpool (4-2-3-1, manager Slot)"));
        assert!(text.contains("GK  Alisson"));
        assert!(text.contains(" 23'  Saka (Arsenal)"));
        assert!(text.contains("Assist: Odegaard"));
        assert_eq!(text.matches("Assist:").count(), 2);
        assert!(text.contains("54%"));
        assert!(!text.contains("Red cards"));
    }

    #[test]
    fn test_display_matches_text() {
        let report = sample_report();
        let (home, away) = teams();
        let sheet = MatchSheet::new(&report, &home, &away);
        assert_eq!(format!("{sheet}"), sheet.to_text());
    }

    #[test]
    fn test_goalless_report() {
        let mut report = sample_report();
        report.goals.clear();
        report.highlights.clear();
        let (home, away) = teams();
        let text = MatchSheet::new(&report, &home, &away).to_text();
        assert!(text.contains("No goals"));
        assert!(text.contains("No highlights"));
    }
}
