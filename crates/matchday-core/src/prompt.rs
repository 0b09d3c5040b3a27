//! Prompt Builder
//!
//! Renders two validated teams plus fixed guidance into the single instruction
//! sent to the model. Pure and deterministic: same teams, same prompt.

use crate::types::Team;

/// Default language requested for every text field of the report.
///
/// The first deployments always asked for Japanese; pass `"Japanese"` to
/// [`PromptBuilder::with_language`] (or set `MATCHDAY_REPORT_LANGUAGE`) to get
/// that behaviour back.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Tactical tendencies the model is asked to take into account
pub const LEAGUE_TENDENCIES: &[(&str, &str)] = &[
    ("Premier League", "high press, intensity"),
    ("La Liga", "technical play, possession"),
    ("Serie A", "tactical discipline, defensive organisation"),
    ("Bundesliga", "vertical speed, transitions"),
];

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    language: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language the report should be written in
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        if !language.trim().is_empty() {
            self.language = language.trim().to_string();
        }
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn build(&self, home: &Team, away: &Team) -> String {
        let mut prompt = String::from(
            "You are a football match simulator.\n\
             Simulate the match between the following two teams.\n\n",
        );

        push_team(&mut prompt, "HOME TEAM", home);
        prompt.push('\n');
        push_team(&mut prompt, "AWAY TEAM", away);

        prompt.push_str(
            "\n[KEY CONSIDERATIONS]\n\
             1. **Reflect each manager's style**:\n   \
             - Tactical philosophy, pressing style, attacking patterns\n   \
             - How they use their players and manage the game\n\n\
             2. **Account for league tendencies**:\n",
        );
        for (league, tendency) in LEAGUE_TENDENCIES {
            prompt.push_str(&format!("   - {}: {}\n", league, tendency));
        }

        prompt.push_str(
            "\n3. **Simulation conditions**:\n   \
             - Decide the weather and pitch condition at random\n   \
             - Keep the flow of the match and the statistics realistic\n   \
             - Consider how well the players suit the formation\n\n",
        );

        prompt.push_str(&format!(
            "**Important: write every text field in {}.**\n\n",
            self.language
        ));

        prompt.push_str(
            "Produce a detailed match report as JSON matching the provided schema.\n\
             Make sure the \"goals\" list agrees exactly with the final \"score\".\n\
             Make sure home and away \"possession\" add up to 100.\n\
             Describe the flow of the match and every goal in detail.\n",
        );

        prompt
    }
}

fn push_team(prompt: &mut String, heading: &str, team: &Team) {
    prompt.push_str(&format!("[{}]\n", heading));
    prompt.push_str(&format!("Team: {}\n", team.name));
    prompt.push_str(&format!("Manager: {}\n", team.manager));
    prompt.push_str(&format!("Formation: {}\n", team.formation));
    prompt.push_str("Players:\n");
    prompt.push_str(&format_players(team));
}

/// One `- POS: a, b, c` line per non-empty position group
pub fn format_players(team: &Team) -> String {
    team.players_by_position()
        .into_iter()
        .map(|(position, names)| format!("- {}: {}\n", position, names.join(", ")))
        .collect()
}

/// Build the prompt with default options
pub fn build_prompt(home: &Team, away: &Team) -> String {
    PromptBuilder::default().build(home, away)
}
