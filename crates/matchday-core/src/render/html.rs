use std::fmt::{self, Write};

use super::{format_number, stat_rows, MatchSheet};
use crate::types::Team;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem;color:#1b1b1b}\
.scoreboard{display:flex;justify-content:center;align-items:center;gap:2rem;text-align:center}\
.score{font-size:3rem;font-weight:700}\
.half-time,.weather{text-align:center;color:#555}\
.lineups{display:flex;gap:2rem}.lineups>div{flex:1}\
.player{display:flex;gap:.5rem}.position{width:2.5rem;font-weight:600}\
.minute{font-weight:700;min-width:3rem;display:inline-block}\
.stat-values{display:flex;justify-content:space-between}\
.stat-bar{display:flex;height:6px;margin-bottom:.75rem}\
.stat-bar-home{background:#c8102e}.stat-bar-away{background:#1d428a}";

/// Escape text for use in HTML element content and attribute values
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The sheet as a standalone HTML document
pub(super) struct HtmlPage<'s, 'a>(pub &'s MatchSheet<'a>);

impl fmt::Display for HtmlPage<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_page(f, self.0)
    }
}

fn write_page<W: Write>(out: &mut W, sheet: &MatchSheet<'_>) -> fmt::Result {
    let report = sheet.report;
    let home = escape(&sheet.home.name);
    let away = escape(&sheet.away.name);

    write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{home} vs {away}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    )?;

    write!(
        out,
        "<div class=\"scoreboard\">\
         <div><h2>{home}</h2><div class=\"score\">{}</div></div>\
         <div class=\"score\">-</div>\
         <div><h2>{away}</h2><div class=\"score\">{}</div></div>\
         </div>\n",
        report.score.home, report.score.away
    )?;
    writeln!(
        out,
        "<p class=\"half-time\">Half time: {} - {}</p>",
        report.score.half_time.home, report.score.half_time.away
    )?;
    writeln!(
        out,
        "<p class=\"weather\">Weather: {} &middot; {}&deg;C &middot; Pitch: {}</p>",
        escape(&report.weather.condition),
        format_number(report.weather.temperature),
        escape(&report.weather.pitch_condition)
    )?;

    out.write_str("<section><h3>Starting line-ups</h3><div class=\"lineups\">\n")?;
    lineup(out, sheet.home)?;
    lineup(out, sheet.away)?;
    out.write_str("</div></section>\n")?;

    writeln!(
        out,
        "<section><h3>Match flow</h3><h4>First half</h4><p>{}</p><h4>Second half</h4><p>{}</p></section>",
        escape(&report.match_flow.first_half),
        escape(&report.match_flow.second_half)
    )?;

    out.write_str("<section><h3>Goals</h3>\n")?;
    if report.goals.is_empty() {
        out.write_str("<p>No goals</p>\n")?;
    }
    for goal in &report.goals {
        write!(
            out,
            "<div class=\"goal\"><span class=\"minute\">{}'</span> <strong>{}</strong> ({})",
            goal.minute,
            escape(&goal.scorer),
            escape(&goal.team)
        )?;
        if let Some(assist) = goal.assist() {
            write!(out, "<div class=\"assist\">Assist: {}</div>", escape(assist))?;
        }
        writeln!(out, "<p>{}</p></div>", escape(&goal.description))?;
    }
    out.write_str("</section>\n")?;

    out.write_str("<section><h3>Highlights</h3>\n")?;
    if report.highlights.is_empty() {
        out.write_str("<p>No highlights</p>\n")?;
    }
    for highlight in &report.highlights {
        writeln!(
            out,
            "<div class=\"highlight\"><span class=\"minute\">{}'</span> {}</div>",
            highlight.minute,
            escape(&highlight.description)
        )?;
    }
    out.write_str("</section>\n")?;

    writeln!(
        out,
        "<section><h3>Statistics</h3><div class=\"stat-values\"><strong>{home}</strong><strong>{away}</strong></div>"
    )?;
    for row in stat_rows(&report.statistics) {
        let (home_share, away_share) = row.shares();
        writeln!(
            out,
            "<div class=\"stat-values\"><span>{}</span><span>{}</span><span>{}</span></div>\
             <div class=\"stat-bar\"><div class=\"stat-bar-home\" style=\"width:{:.1}%\"></div>\
             <div class=\"stat-bar-away\" style=\"width:{:.1}%\"></div></div>",
            row.format(row.home),
            row.label,
            row.format(row.away),
            home_share,
            away_share
        )?;
    }
    out.write_str("</section>\n</body>\n</html>\n")
}

fn lineup<W: Write>(out: &mut W, team: &Team) -> fmt::Result {
    write!(
        out,
        "<div><h4>{}</h4><p>Manager: {}</p><p>Formation: {}</p>",
        escape(&team.name),
        escape(&team.manager),
        escape(&team.formation)
    )?;
    for player in &team.players {
        write!(
            out,
            "<div class=\"player\"><span class=\"position\">{}</span><span>{}</span></div>",
            escape(&player.position),
            escape(&player.name)
        )?;
    }
    out.write_str("</div>\n")
}
