//! Matchday Core - rosters in, match reports out
//!
//! Matchday collects two football line-ups and asks a generative model to
//! write a fictitious match report for them. This crate holds everything that
//! does not touch the network:
//!
//! 1. **Formations** (`formation`): static formation code → slot table
//! 2. **Roster Parser** (`roster`): "label: name" lines → players
//! 3. **Team Validator** (`validation`): is a team fit to be simulated?
//! 4. **Prompt Builder** (`prompt`): two teams → one instruction string
//! 5. **Report Schema** (`report::schema`): request schema + response parser
//! 6. **Result Validator** (`report::check`): post-parse consistency checks
//! 7. **Presentation** (`render`): text and HTML match sheets
//!
//! # Quick Start
//!
//! ```
//! use matchday_core::{build_prompt, generate_template, validate_team, Team, TeamSide};
//!
//! let template = generate_template("4-3-3");
//! assert_eq!(template.lines().count(), 11);
//!
//! let roster: String = template
//!     .lines()
//!     .enumerate()
//!     .map(|(i, slot)| format!("{} Player {}\n", slot, i + 1))
//!     .collect();
//! let home = Team::new("Home FC", "Home Manager", "4-3-3").with_roster_text(&roster);
//! let away = Team::new("Away FC", "Away Manager", "4-3-3").with_roster_text(&roster);
//!
//! validate_team(&home, TeamSide::Home).unwrap();
//! validate_team(&away, TeamSide::Away).unwrap();
//!
//! let prompt = build_prompt(&home, &away);
//! assert!(prompt.contains("- GK: Player 1"));
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms, missing_debug_implementations, clippy::all)]

pub mod error;
pub mod formation;
pub mod prompt;
pub mod render;
pub mod report;
pub mod roster;
pub mod types;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{MatchdayError, ReportError, Result, SchemaError, ValidationError, ValidationKind};
pub use formation::{formation, formation_codes, formations, generate_template, FormationTemplate, Slot};
pub use prompt::{build_prompt, PromptBuilder};
pub use render::MatchSheet;
pub use report::{
    validate_report, Goal, Highlight, MatchFlow, MatchReport, ReportBlock, ReportCheck,
    ReportSchema, Score, StatPair, Statistics, Weather,
};
pub use roster::{parse_roster, parse_team_sheet, DEFAULT_FORMATION};
pub use types::{Player, Position, SimulateMatchRequest, Team, TeamSide, SQUAD_SIZE};
pub use validation::{validate_fixture, validate_team};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
