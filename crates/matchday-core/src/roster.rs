//! Roster Parser
//!
//! Turns free text such as
//!
//! ```text
//! GK: Alisson
//! RB: Alexander-Arnold
//! ```
//!
//! into players. Positions come from the formation slot at the line's index,
//! never from whatever the user typed before the colon.
//!
//! Line handling:
//! - blank lines are ignored;
//! - lines without a `:` are dropped before indexing and do not use a slot;
//! - lines with a `:` but no name use a slot and produce no player;
//! - lines beyond the formation's slot count are ignored.
//!
//! A team sheet wraps a roster with header lines:
//!
//! ```text
//! teamName: Liverpool
//! manager: Arne Slot
//! formation: 4-3-3
//! players:
//! GK: Alisson
//! ```

use crate::formation::formation;
use crate::types::{Player, Team};

/// Formation assumed when a team sheet has no `formation:` line
pub const DEFAULT_FORMATION: &str = "4-3-3";

const NAME_HEADER: &str = "teamName:";
const MANAGER_HEADER: &str = "manager:";
const FORMATION_HEADER: &str = "formation:";
const PLAYERS_HEADER: &str = "players:";

/// Parse roster text against `formation_code`.
///
/// Unknown formations yield an empty roster rather than an error.
pub fn parse_roster(text: &str, formation_code: &str) -> Vec<Player> {
    let Some(template) = formation(formation_code) else {
        return Vec::new();
    };

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':').map(|(_, name)| name.trim()))
        .zip(template.slots)
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, slot)| Player::new(name, slot.position))
        .collect()
}

/// Parse a whole team sheet: header lines fill name, manager and formation,
/// every other line holding a `:` is roster text. A repeated header wins
/// over earlier ones.
pub fn parse_team_sheet(text: &str) -> Team {
    let mut team = Team::new("", "", DEFAULT_FORMATION);
    let mut roster = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(value) = line.strip_prefix(NAME_HEADER) {
            team.name = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(MANAGER_HEADER) {
            team.manager = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(FORMATION_HEADER) {
            team.formation = value.trim().to_string();
        } else if line.starts_with(PLAYERS_HEADER) {
            continue;
        } else if line.contains(':') {
            roster.push(line);
        }
    }

    team.with_roster_text(&roster.join("\n"))
}
