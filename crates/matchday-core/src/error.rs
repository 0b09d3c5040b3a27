//! Error types for Matchday Core
//!
//! Every stage of the pipeline that can reject data has its own error enum so
//! that callers (the HTTP boundary in particular) can decide how to react from
//! the variant alone. We use `thiserror` for the Display/Error boilerplate.

use thiserror::Error;

use crate::report::ReportBlock;
use crate::types::TeamSide;

/// Result type alias for Matchday core operations
pub type Result<T> = std::result::Result<T, MatchdayError>;

/// Umbrella error for core operations
#[derive(Error, Debug)]
pub enum MatchdayError {
    /// A team failed input validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Model output did not match the report contract
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A parsed report failed post-validation
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A team that cannot be sent for simulation.
///
/// The message always names the side so it can be shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{side}: {kind}")]
pub struct ValidationError {
    pub side: TeamSide,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(side: TeamSide, kind: ValidationKind) -> Self {
        Self { side, kind }
    }

    /// Human-readable message, identical to the Display output
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Which team rule was violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    #[error("team name is missing")]
    MissingName,

    #[error("manager name is missing")]
    MissingManager,

    #[error("formation is missing")]
    MissingFormation,

    #[error("no players have been entered")]
    NoPlayers,

    #[error("exactly 11 players are required (currently {found})")]
    WrongPlayerCount { found: usize },

    #[error("a player has no name")]
    PlayerWithoutName,

    #[error("a player has no position")]
    PlayerWithoutPosition,

    #[error("player {player} has unknown position '{position}' (expected GK, DF, MF or FW)")]
    UnknownPosition { player: String, position: String },

    #[error("at least one GK is required")]
    NoGoalkeeper,
}

/// Errors raised while parsing model output against the report schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("missing required field `{path}`")]
    MissingField { path: String },

    #[error("field `{path}` should be {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("response does not decode into a match report: {0}")]
    Decode(String),
}

/// Hard failures of the post-parse report check
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("match report has no {0} block")]
    MissingBlock(ReportBlock),

    #[error("match report has an invalid score ({home}-{away})")]
    NegativeScore { home: f64, away: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_side() {
        let err = ValidationError::new(TeamSide::Away, ValidationKind::WrongPlayerCount { found: 10 });
        assert_eq!(
            err.message(),
            "Away team: exactly 11 players are required (currently 10)"
        );
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: MatchdayError = ValidationError::new(TeamSide::Home, ValidationKind::NoGoalkeeper).into();
        assert!(matches!(err, MatchdayError::Validation(_)));
        assert_eq!(err.to_string(), "Home team: at least one GK is required");
    }
}
