//! Team Validator
//!
//! Rules are checked in a fixed order and the first violation wins, so the
//! user always sees the most fundamental problem first.

use crate::error::{ValidationError, ValidationKind};
use crate::types::{Team, TeamSide, SQUAD_SIZE};

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check that `team` can be sent for simulation
pub fn validate_team(team: &Team, side: TeamSide) -> Result<(), ValidationError> {
    let fail = |kind| Err(ValidationError::new(side, kind));

    if is_blank(&team.name) {
        return fail(ValidationKind::MissingName);
    }
    if is_blank(&team.manager) {
        return fail(ValidationKind::MissingManager);
    }
    if is_blank(&team.formation) {
        return fail(ValidationKind::MissingFormation);
    }
    if team.players.is_empty() {
        return fail(ValidationKind::NoPlayers);
    }
    if team.players.len() != SQUAD_SIZE {
        return fail(ValidationKind::WrongPlayerCount {
            found: team.players.len(),
        });
    }

    for player in &team.players {
        if is_blank(&player.name) {
            return fail(ValidationKind::PlayerWithoutName);
        }
        if is_blank(&player.position) {
            return fail(ValidationKind::PlayerWithoutPosition);
        }
        if player.position_kind().is_none() {
            return fail(ValidationKind::UnknownPosition {
                player: player.name.trim().to_string(),
                position: player.position.trim().to_string(),
            });
        }
    }

    if !team.players.iter().any(|p| p.is_goalkeeper()) {
        return fail(ValidationKind::NoGoalkeeper);
    }

    Ok(())
}

/// Validate both sides of a fixture, home first
pub fn validate_fixture(home: &Team, away: &Team) -> Result<(), ValidationError> {
    validate_team(home, TeamSide::Home)?;
    validate_team(away, TeamSide::Away)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Position};

    fn valid_team() -> Team {
        let mut players = vec![Player::new("Keeper", Position::GK)];
        players.extend((1..=4).map(|i| Player::new(format!("Defender {i}"), Position::DF)));
        players.extend((1..=3).map(|i| Player::new(format!("Midfielder {i}"), Position::MF)));
        players.extend((1..=3).map(|i| Player::new(format!("Forward {i}"), Position::FW)));
        Team::new("Arsenal", "Arteta", "4-3-3").with_players(players)
    }

    fn kind_of(team: &Team) -> ValidationKind {
        validate_team(team, TeamSide::Home).unwrap_err().kind
    }

    #[test]
    fn test_valid_team_passes() {
        assert!(validate_team(&valid_team(), TeamSide::Home).is_ok());
    }

    #[test]
    fn test_blank_team_fields() {
        let mut team = valid_team();
        team.name = "   ".into();
        assert_eq!(kind_of(&team), ValidationKind::MissingName);

        let mut team = valid_team();
        team.manager = String::new();
        assert_eq!(kind_of(&team), ValidationKind::MissingManager);

        let mut team = valid_team();
        team.formation = "\t".into();
        assert_eq!(kind_of(&team), ValidationKind::MissingFormation);
    }

    #[test]
    fn test_player_count() {
        let mut team = valid_team();
        team.players.clear();
        assert_eq!(kind_of(&team), ValidationKind::NoPlayers);

        let mut team = valid_team();
        team.players.pop();
        assert_eq!(kind_of(&team), ValidationKind::WrongPlayerCount { found: 10 });

        let mut team = valid_team();
        team.players.push(Player::new("Sub", Position::FW));
        assert_eq!(kind_of(&team), ValidationKind::WrongPlayerCount { found: 12 });
    }

    #[test]
    fn test_player_fields() {
        let mut team = valid_team();
        team.players[4].name = " ".into();
        assert_eq!(kind_of(&team), ValidationKind::PlayerWithoutName);

        let mut team = valid_team();
        team.players[4].position = String::new();
        assert_eq!(kind_of(&team), ValidationKind::PlayerWithoutPosition);

        let mut team = valid_team();
        team.players[4].position = "Libero".into();
        assert_eq!(
            kind_of(&team),
            ValidationKind::UnknownPosition {
                player: "Defender 4".into(),
                position: "Libero".into(),
            }
        );
    }

    #[test]
    fn test_requires_goalkeeper() {
        let mut team = valid_team();
        team.players[0].position = "DF".into();
        assert_eq!(kind_of(&team), ValidationKind::NoGoalkeeper);
    }

    #[test]
    fn test_first_violation_wins() {
        let team = Team::default();
        assert_eq!(kind_of(&team), ValidationKind::MissingName);
    }

    #[test]
    fn test_fixture_reports_away_side() {
        let mut away = valid_team();
        away.manager.clear();
        let err = validate_fixture(&valid_team(), &away).unwrap_err();
        assert_eq!(err.side, TeamSide::Away);
        assert_eq!(err.message(), "Away team: manager name is missing");
    }
}
