use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use matchday_core::{formation, formation_codes, formations, validate_team, Team, TeamSide};

mod simulate;

use simulate::{OutputFormat, SimulateOptions};

/// Matchday CLI - football match reports from two line-ups
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available formations
    Formations,

    /// Print the roster template of a formation
    Template {
        /// Formation code, e.g. 4-3-3
        code: String,
    },

    /// Turn a roster template or a team sheet into a team JSON file
    Parse {
        /// Formation the roster was written for
        #[arg(short, long, required_unless_present = "sheet")]
        formation: Option<String>,

        /// Input is a team sheet with teamName/manager/formation headers
        #[arg(long, conflicts_with_all = ["formation", "name", "manager"])]
        sheet: bool,

        /// Roster file, read from stdin when omitted
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Team name
        #[arg(long)]
        name: Option<String>,

        /// Manager name
        #[arg(long)]
        manager: Option<String>,
    },

    /// Simulate a match between two team JSON files
    Simulate {
        /// Home team JSON
        #[arg(long, value_name = "FILE")]
        home: PathBuf,

        /// Away team JSON
        #[arg(long, value_name = "FILE")]
        away: PathBuf,

        /// Gateway URL; the model is called directly when omitted
        #[arg(long, conflicts_with = "replay")]
        endpoint: Option<String>,

        /// Saved model output to replay instead of calling the model
        #[arg(long, value_name = "FILE")]
        replay: Option<PathBuf>,

        /// Language of the report text
        #[arg(long)]
        language: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Formations => {
            for f in formations() {
                let layout: Vec<&str> = f.slots.iter().map(|s| s.label).collect();
                println!("{:<8} {}", f.code, layout.join(" "));
            }
        }
        Commands::Template { code } => {
            let Some(template) = formation(&code) else {
                bail!("unknown formation '{}' (available: {})", code, available());
            };
            println!("{}", template.template());
        }
        Commands::Parse {
            formation: code,
            sheet,
            file,
            name,
            manager,
        } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };

            let team = if sheet {
                Team::from_team_sheet(&text)
            } else {
                Team::new(
                    name.unwrap_or_default(),
                    manager.unwrap_or_default(),
                    code.unwrap_or_default(),
                )
                .with_roster_text(&text)
            };
            if formation(&team.formation).is_none() {
                bail!("unknown formation '{}' (available: {})", team.formation, available());
            }

            println!("{}", serde_json::to_string_pretty(&team)?);

            if let Err(e) = validate_team(&team, TeamSide::Home) {
                eprintln!("warning: {}", e.kind);
            }
        }
        Commands::Simulate {
            home,
            away,
            endpoint,
            replay,
            language,
            format,
        } => {
            let output = simulate::run(SimulateOptions {
                home,
                away,
                endpoint,
                replay,
                language,
                format,
            })
            .await?;
            println!("{output}");
        }
    }

    Ok(())
}

fn available() -> String {
    formation_codes().collect::<Vec<_>>().join(", ")
}
