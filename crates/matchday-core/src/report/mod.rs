//! Match report model
//!
//! The structured result of a simulation. Field names follow the JSON the
//! model is asked to produce (camelCase).

pub mod check;
pub mod schema;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use check::{validate_report, ReportCheck, ReportDocument, ReportWarning};
pub use schema::{ReportSchema, Shape, ShapeKind};

/// Full match report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub score: Score,
    pub match_flow: MatchFlow,
    pub goals: Vec<Goal>,
    pub highlights: Vec<Highlight>,
    pub statistics: Statistics,
    pub weather: Weather,
}

impl MatchReport {
    /// Parse model output through the report schema
    pub fn from_json(text: &str) -> Result<Self, crate::SchemaError> {
        ReportSchema::match_report().parse(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(deserialize_with = "whole::number")]
    pub home: i32,
    #[serde(deserialize_with = "whole::number")]
    pub away: i32,
    pub half_time: HalfTimeScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfTimeScore {
    #[serde(deserialize_with = "whole::number")]
    pub home: i32,
    #[serde(deserialize_with = "whole::number")]
    pub away: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFlow {
    pub first_half: String,
    pub second_half: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(deserialize_with = "whole::number")]
    pub minute: i32,
    /// Name of the scoring team
    pub team: String,
    pub scorer: String,
    /// Empty when unassisted
    pub assist: String,
    pub description: String,
}

impl Goal {
    pub fn assist(&self) -> Option<&str> {
        let assist = self.assist.trim();
        (!assist.is_empty()).then_some(assist)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(deserialize_with = "whole::number")]
    pub minute: i32,
    pub description: String,
}

/// A home/away pair of numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPair<T> {
    pub home: T,
    pub away: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Percentages, expected to sum to 100
    pub possession: StatPair<f64>,
    #[serde(deserialize_with = "whole::pair")]
    pub shots: StatPair<i32>,
    #[serde(deserialize_with = "whole::pair")]
    pub shots_on_target: StatPair<i32>,
    #[serde(deserialize_with = "whole::pair")]
    pub corners: StatPair<i32>,
    #[serde(deserialize_with = "whole::pair")]
    pub fouls: StatPair<i32>,
    #[serde(deserialize_with = "whole::pair")]
    pub yellow_cards: StatPair<i32>,
    #[serde(deserialize_with = "whole::pair")]
    pub red_cards: StatPair<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub condition: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub pitch_condition: String,
}

/// The value of `n` as an `i32` when it is a whole number in range.
/// Models sometimes write `90.0` for minute 90.
pub fn whole_number(n: f64) -> Option<i32> {
    let in_range = n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX);
    (n.fract() == 0.0 && in_range).then_some(n as i32)
}

/// Decoders for integer fields that accept any whole JSON number
mod whole {
    use serde::de::{Deserialize, Deserializer, Error};

    use super::{whole_number, StatPair};

    fn convert<E: Error>(n: f64) -> Result<i32, E> {
        whole_number(n).ok_or_else(|| E::custom(format!("expected a whole number, found {n}")))
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        convert(f64::deserialize(deserializer)?)
    }

    pub fn pair<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatPair<i32>, D::Error> {
        let raw = StatPair::<f64>::deserialize(deserializer)?;
        Ok(StatPair {
            home: convert(raw.home)?,
            away: convert(raw.away)?,
        })
    }
}

/// Top-level blocks the result validator requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportBlock {
    Score,
    MatchFlow,
    Goals,
    Statistics,
    Weather,
}

impl ReportBlock {
    /// Checked in this order
    pub const REQUIRED: [ReportBlock; 5] = [
        ReportBlock::Score,
        ReportBlock::MatchFlow,
        ReportBlock::Goals,
        ReportBlock::Statistics,
        ReportBlock::Weather,
    ];

    /// JSON key of the block
    pub fn key(self) -> &'static str {
        match self {
            ReportBlock::Score => "score",
            ReportBlock::MatchFlow => "matchFlow",
            ReportBlock::Goals => "goals",
            ReportBlock::Statistics => "statistics",
            ReportBlock::Weather => "weather",
        }
    }
}

impl fmt::Display for ReportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
