//! Core types: positions, players and teams
//!
//! Teams arrive from the outside world (HTTP bodies, JSON files) so every
//! field deserializes leniently; the Team Validator is the single place that
//! decides whether a team is fit to be simulated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of players a team must field
pub const SQUAD_SIZE: usize = 11;

/// Playing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Goalkeeper
    GK,
    /// Defender
    DF,
    /// Midfielder
    MF,
    /// Forward
    FW,
}

impl Position {
    /// All positions in line-up order (goal outward)
    pub const ALL: [Position; 4] = [Position::GK, Position::DF, Position::MF, Position::FW];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "GK" => Ok(Position::GK),
            "DF" => Ok(Position::DF),
            "MF" => Ok(Position::MF),
            "FW" => Ok(Position::FW),
            _ => Err(()),
        }
    }
}

/// A single player.
///
/// `position` stays a string on the wire so that blank or unknown values can
/// be reported by validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub name: String,
    pub position: String,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position: position.as_str().to_string(),
        }
    }

    /// Parsed position, `None` when blank or not one of GK/DF/MF/FW
    pub fn position_kind(&self) -> Option<Position> {
        self.position.parse().ok()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position_kind() == Some(Position::GK)
    }
}

/// A team as submitted for simulation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub name: String,
    pub manager: String,
    /// Key into the formation table, e.g. "4-3-3"
    pub formation: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        manager: impl Into<String>,
        formation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            manager: manager.into(),
            formation: formation.into(),
            players: Vec::new(),
        }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Fill the roster from "label: name" lines against this team's formation
    pub fn with_roster_text(self, text: &str) -> Self {
        let players = crate::roster::parse_roster(text, &self.formation);
        self.with_players(players)
    }

    /// Build a team from a sheet with `teamName:`, `manager:` and
    /// `formation:` headers followed by roster lines
    pub fn from_team_sheet(text: &str) -> Self {
        crate::roster::parse_team_sheet(text)
    }

    /// Player names grouped by position in GK, DF, MF, FW order.
    ///
    /// Empty groups are omitted; players with an unrecognised position are
    /// skipped.
    pub fn players_by_position(&self) -> Vec<(Position, Vec<&str>)> {
        Position::ALL
            .iter()
            .filter_map(|&position| {
                let names: Vec<&str> = self
                    .players
                    .iter()
                    .filter(|p| p.position_kind() == Some(position))
                    .map(|p| p.name.as_str())
                    .collect();
                (!names.is_empty()).then_some((position, names))
            })
            .collect()
    }
}

/// Which side of the fixture a team plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => f.write_str("Home team"),
            TeamSide::Away => f.write_str("Away team"),
        }
    }
}

/// Body of a simulation request: `{ homeTeam, awayTeam }`.
///
/// Both sides are optional so that a missing team can be answered with a
/// client error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateMatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<Team>,
}

impl SimulateMatchRequest {
    pub fn new(home_team: Team, away_team: Team) -> Self {
        Self {
            home_team: Some(home_team),
            away_team: Some(away_team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing() {
        assert_eq!("GK".parse::<Position>(), Ok(Position::GK));
        assert_eq!(" FW ".parse::<Position>(), Ok(Position::FW));
        assert!("gk".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_team_deserializes_with_missing_fields() {
        let team: Team = serde_json::from_str(r#"{"name": "Ajax"}"#).unwrap();
        assert_eq!(team.name, "Ajax");
        assert!(team.manager.is_empty());
        assert!(team.players.is_empty());
    }

    #[test]
    fn test_players_by_position_skips_empty_groups() {
        let team = Team::new("A", "B", "4-3-3").with_players(vec![
            Player::new("Keeper", Position::GK),
            Player::new("Striker", Position::FW),
            Player::new("Other Striker", Position::FW),
        ]);

        let groups = team.players_by_position();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], (Position::GK, vec!["Keeper"]));
        assert_eq!(groups[1], (Position::FW, vec!["Striker", "Other Striker"]));
    }

    #[test]
    fn test_request_uses_camel_case() {
        let body: SimulateMatchRequest =
            serde_json::from_str(r#"{"homeTeam": {"name": "A"}}"#).unwrap();
        assert!(body.home_team.is_some());
        assert!(body.away_team.is_none());
    }
}
