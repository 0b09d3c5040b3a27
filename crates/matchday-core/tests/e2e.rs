//! End-to-end tests for the offline half of the pipeline:
//! roster text -> validated teams -> prompt, and model text -> report -> sheet.

use matchday_core::{
    build_prompt, generate_template, validate_fixture, validate_report, MatchReport,
    MatchSheet, Position, ReportSchema, SchemaError, Team, TeamSide, ValidationKind,
};

const ARSENAL: &str = "GK: Raya
RB: White
RCB: Saliba
LCB: Gabriel
LB: Calafiori
DM: Rice
RCM: Odegaard
LCM: Merino
RW: Saka
CF: Havertz
LW: Martinelli";

const LIVERPOOL: &str = "GK: Alisson
RB: Alexander-Arnold
RCB: Konate
LCB: Van Dijk
LB: Robertson
DM: Gravenberch
RCM: Szoboszlai
LCM: Mac Allister
RW: Salah
CF: Nunez
LW: Diaz";

const MODEL_OUTPUT: &str = r#"{
  "score": {"home": 1, "away": 1, "halfTime": {"home": 0, "away": 1}},
  "matchFlow": {
    "firstHalf": "Liverpool started quickly and Salah punished a loose pass.",
    "secondHalf": "Arsenal dominated the ball and Saka finally broke through."
  },
  "goals": [
    {"minute": 31, "team": "Liverpool", "scorer": "Salah", "assist": "Szoboszlai", "description": "Low finish across Raya."},
    {"minute": 74, "team": "Arsenal", "scorer": "Saka", "assist": "", "description": "Cut inside and curled it home."}
  ],
  "highlights": [
    {"minute": 9, "description": "Van Dijk blocks Havertz."},
    {"minute": 88, "description": "Alisson saves from Rice."}
  ],
  "statistics": {
    "possession": {"home": 58, "away": 42},
    "shots": {"home": 15, "away": 8},
    "shotsOnTarget": {"home": 5, "away": 3},
    "corners": {"home": 8, "away": 2},
    "fouls": {"home": 9, "away": 13},
    "yellowCards": {"home": 1, "away": 4},
    "redCards": {"home": 0, "away": 1}
  },
  "weather": {"condition": "Overcast", "temperature": 9, "pitchCondition": "Good"}
}"#;

fn teams() -> (Team, Team) {
    let home = Team::new("Arsenal", "Mikel Arteta", "4-3-3").with_roster_text(ARSENAL);
    let away = Team::new("Liverpool", "Arne Slot", "4-3-3").with_roster_text(LIVERPOOL);
    (home, away)
}

#[test]
fn e2e_roster_to_prompt() {
    let (home, away) = teams();
    assert_eq!(home.players.len(), 11);
    assert_eq!(away.players[0].position_kind(), Some(Position::GK));

    validate_fixture(&home, &away).expect("both rosters are complete");

    let prompt = build_prompt(&home, &away);
    assert!(prompt.contains("Arsenal"));
    assert!(prompt.contains("Liverpool"));
    assert!(prompt.contains("Mikel Arteta"));
    assert!(prompt.contains("Arne Slot"));
    assert_eq!(prompt.matches("4-3-3").count(), 2);
    assert!(prompt.contains("- GK: Raya\n"));
    assert!(prompt.contains("- GK: Alisson\n"));
    assert!(prompt.contains("- FW: Salah, Nunez, Diaz\n"));
}

#[test]
fn e2e_incomplete_template_is_rejected() {
    let template = generate_template("3-5-2");
    let partial: String = template
        .lines()
        .take(10)
        .map(|slot| format!("{} Someone\n", slot))
        .chain(template.lines().skip(10).map(|slot| format!("{}\n", slot)))
        .collect();

    let team = Team::new("Inter", "Inzaghi", "3-5-2").with_roster_text(&partial);
    assert_eq!(team.players.len(), 10);

    let (home, _) = teams();
    let err = validate_fixture(&home, &team).unwrap_err();
    assert_eq!(err.side, TeamSide::Away);
    assert_eq!(err.kind, ValidationKind::WrongPlayerCount { found: 10 });
}

#[test]
fn e2e_model_output_to_sheet() {
    let report = ReportSchema::match_report().parse(MODEL_OUTPUT).unwrap();
    assert_eq!(report.goals.len() as i32, report.score.home + report.score.away);

    let check = validate_report(&report).unwrap();
    assert!(check.is_clean());

    let (home, away) = teams();
    let text = MatchSheet::new(&report, &home, &away).to_text();
    assert!(text.starts_with("Arsenal  1 - 1  Liverpool"));
    assert!(text.contains("Red cards"));
    assert!(text.contains("58%"));
    assert!(text.contains("Assist: Szoboszlai"));
}

#[test]
fn e2e_report_json_round_trip() {
    let report = MatchReport::from_json(MODEL_OUTPUT).unwrap();
    let text = serde_json::to_string_pretty(&report).unwrap();
    assert_eq!(MatchReport::from_json(&text).unwrap(), report);
}

#[test]
fn e2e_truncated_model_output() {
    let truncated = &MODEL_OUTPUT[..MODEL_OUTPUT.len() / 2];
    assert!(matches!(
        MatchReport::from_json(truncated),
        Err(SchemaError::InvalidJson(_))
    ));
}
