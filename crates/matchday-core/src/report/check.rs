//! Result Validator
//!
//! Post-parse check of a match report. Missing blocks and negative scores are
//! hard failures. Possession that does not add up to 100 (±1) is only logged:
//! the model is asked for it but nothing guarantees exact arithmetic.

use serde_json::Value;

use super::{MatchReport, ReportBlock};
use crate::error::ReportError;

/// Allowed deviation of the possession total from 100
pub const POSSESSION_TOLERANCE: f64 = 1.0;

/// Read access the validator needs, implemented for raw JSON and typed reports
pub trait ReportDocument {
    fn has_block(&self, block: ReportBlock) -> bool;

    /// Full-time score, `None` when unreadable
    fn final_score(&self) -> Option<(f64, f64)>;

    /// Possession pair, `None` when unreadable
    fn possession(&self) -> Option<(f64, f64)>;
}

impl ReportDocument for Value {
    fn has_block(&self, block: ReportBlock) -> bool {
        self.get(block.key()).map_or(false, |v| !v.is_null())
    }

    fn final_score(&self) -> Option<(f64, f64)> {
        pair(self.get("score")?)
    }

    fn possession(&self) -> Option<(f64, f64)> {
        pair(self.get("statistics")?.get("possession")?)
    }
}

fn pair(value: &Value) -> Option<(f64, f64)> {
    Some((value.get("home")?.as_f64()?, value.get("away")?.as_f64()?))
}

impl ReportDocument for MatchReport {
    fn has_block(&self, _block: ReportBlock) -> bool {
        true
    }

    fn final_score(&self) -> Option<(f64, f64)> {
        Some((f64::from(self.score.home), f64::from(self.score.away)))
    }

    fn possession(&self) -> Option<(f64, f64)> {
        let p = self.statistics.possession;
        Some((p.home, p.away))
    }
}

/// Non-fatal findings
#[derive(Debug, Clone, PartialEq)]
pub enum ReportWarning {
    PossessionTotal { total: f64 },
}

/// Outcome of a successful check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportCheck {
    pub warnings: Vec<ReportWarning>,
}

impl ReportCheck {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate a parsed report
pub fn validate_report<D: ReportDocument + ?Sized>(report: &D) -> Result<ReportCheck, ReportError> {
    if !report.has_block(ReportBlock::Score) {
        return Err(ReportError::MissingBlock(ReportBlock::Score));
    }
    let (home, away) = report
        .final_score()
        .ok_or(ReportError::MissingBlock(ReportBlock::Score))?;
    if home < 0.0 || away < 0.0 {
        return Err(ReportError::NegativeScore { home, away });
    }

    for block in &ReportBlock::REQUIRED[1..] {
        if !report.has_block(*block) {
            return Err(ReportError::MissingBlock(*block));
        }
    }

    let mut check = ReportCheck::default();
    if let Some((home, away)) = report.possession() {
        let total = home + away;
        if (total - 100.0).abs() > POSSESSION_TOLERANCE {
            tracing::warn!(total, "possession does not add up to 100%");
            check.warnings.push(ReportWarning::PossessionTotal { total });
        }
    }

    Ok(check)
}
