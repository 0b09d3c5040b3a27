//! Formation table
//!
//! Each formation code maps to eleven labelled slots. The label is what the
//! user sees in the roster template; the position is what a parsed line is
//! assigned. The table is built once and never written to.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

use crate::types::Position;

/// One slot of a formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub label: &'static str,
    pub position: Position,
}

const fn slot(label: &'static str, position: Position) -> Slot {
    Slot { label, position }
}

/// A named tactical shape and its ordered slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormationTemplate {
    pub code: &'static str,
    pub slots: &'static [Slot],
}

impl FormationTemplate {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Roster template: one `label:` line per slot
    pub fn template(&self) -> String {
        self.slots
            .iter()
            .map(|s| format!("{}:", s.label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

use Position::{DF, FW, GK, MF};

/// Formations in display order
static FORMATIONS: &[FormationTemplate] = &[
    FormationTemplate {
        code: "4-3-3",
        slots: &[
            slot("GK", GK),
            slot("RB", DF),
            slot("RCB", DF),
            slot("LCB", DF),
            slot("LB", DF),
            slot("DM", MF),
            slot("RCM", MF),
            slot("LCM", MF),
            slot("RW", FW),
            slot("CF", FW),
            slot("LW", FW),
        ],
    },
    FormationTemplate {
        code: "4-4-2",
        slots: &[
            slot("GK", GK),
            slot("RB", DF),
            slot("RCB", DF),
            slot("LCB", DF),
            slot("LB", DF),
            slot("RM", MF),
            slot("RCM", MF),
            slot("LCM", MF),
            slot("LM", MF),
            slot("RCF", FW),
            slot("LCF", FW),
        ],
    },
    FormationTemplate {
        code: "3-5-2",
        slots: &[
            slot("GK", GK),
            slot("RCB", DF),
            slot("CB", DF),
            slot("LCB", DF),
            slot("RWB", MF),
            slot("RCM", MF),
            slot("DM", MF),
            slot("LCM", MF),
            slot("LWB", MF),
            slot("RCF", FW),
            slot("LCF", FW),
        ],
    },
    FormationTemplate {
        code: "4-2-3-1",
        slots: &[
            slot("GK", GK),
            slot("RB", DF),
            slot("RCB", DF),
            slot("LCB", DF),
            slot("LB", DF),
            slot("RDM", MF),
            slot("LDM", MF),
            slot("RAM", MF),
            slot("CAM", MF),
            slot("LAM", MF),
            slot("CF", FW),
        ],
    },
    FormationTemplate {
        code: "3-4-3",
        slots: &[
            slot("GK", GK),
            slot("RCB", DF),
            slot("CB", DF),
            slot("LCB", DF),
            slot("RM", MF),
            slot("RCM", MF),
            slot("LCM", MF),
            slot("LM", MF),
            slot("RW", FW),
            slot("CF", FW),
            slot("LW", FW),
        ],
    },
    FormationTemplate {
        code: "5-3-2",
        slots: &[
            slot("GK", GK),
            slot("RWB", DF),
            slot("RCB", DF),
            slot("CB", DF),
            slot("LCB", DF),
            slot("LWB", DF),
            slot("RCM", MF),
            slot("DM", MF),
            slot("LCM", MF),
            slot("RCF", FW),
            slot("LCF", FW),
        ],
    },
];

lazy_static! {
    static ref BY_CODE: HashMap<&'static str, &'static FormationTemplate> =
        FORMATIONS.iter().map(|f| (f.code, f)).collect();
}

/// Look up a formation by code
pub fn formation(code: &str) -> Option<&'static FormationTemplate> {
    BY_CODE.get(code.trim()).copied()
}

/// All formations in display order
pub fn formations() -> &'static [FormationTemplate] {
    FORMATIONS
}

/// All formation codes in display order
pub fn formation_codes() -> impl Iterator<Item = &'static str> {
    FORMATIONS.iter().map(|f| f.code)
}

/// Roster template for `code`, empty when the code is unknown
pub fn generate_template(code: &str) -> String {
    formation(code).map(|f| f.template()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_formation_fields_eleven_with_one_keeper() {
        for f in formations() {
            assert_eq!(f.len(), crate::SQUAD_SIZE, "{}", f.code);
            let keepers = f.slots.iter().filter(|s| s.position == GK).count();
            assert_eq!(keepers, 1, "{}", f.code);
            assert_eq!(f.slots[0].position, GK, "{}", f.code);
        }
    }

    #[test]
    fn test_outfield_counts_match_code() {
        for f in formations() {
            let df = f.slots.iter().filter(|s| s.position == DF).count();
            let first: usize = f.code.split('-').next().unwrap().parse().unwrap();
            // wing-backs in a back three are midfielders, in a back five defenders
            assert_eq!(df, first, "{}", f.code);
        }
    }

    #[test]
    fn test_lookup() {
        assert!(formation("4-3-3").is_some());
        assert!(formation(" 4-2-3-1 ").is_some());
        assert!(formation("2-3-5").is_none());
        assert_eq!(formation_codes().count(), 6);
    }

    #[test]
    fn test_generate_template() {
        let template = generate_template("4-4-2");
        let lines: Vec<&str> = template.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "GK:");
        assert_eq!(lines[10], "LCF:");
        assert_eq!(generate_template("unknown"), "");
    }
}
