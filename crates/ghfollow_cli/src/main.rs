//! ghfollow CLI - export, follow and unfollow GitHub users in bulk.

mod commands;
mod config;
mod progress;
mod shutdown;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::Term;
use ghfollow::{ListEndpoint, Relation};
use tracing_subscriber::EnvFilter;

use crate::commands::relations::BatchSource;

#[derive(Parser)]
#[command(name = "ghfollow")]
#[command(version)]
#[command(about = "Bulk-manage who your GitHub account follows")]
#[command(
    long_about = "ghfollow exports the accounts you follow, or an organization's members, \
to CSV files, and follows or unfollows every account in such a list. Requests \
are sent one at a time with a pause between them to stay clear of GitHub's \
abuse limits."
)]
#[command(after_long_help = r#"EXAMPLES
    Save everyone you follow:
        $ ghfollow export-following following.csv

    Follow everyone in a saved list, one request every 10 seconds:
        $ ghfollow follow-from-csv following.csv --delay 10

    Unfollow all members of an organization:
        $ ghfollow unfollow-org-members acme

    Generate shell completions:
        $ ghfollow completions bash > ~/.local/share/bash-completion/completions/ghfollow

CONFIGURATION
    ghfollow reads configuration from:
      1. ~/.config/ghfollow/config.toml (or $XDG_CONFIG_HOME/ghfollow/config.toml)
      2. ./ghfollow.toml
      3. Environment variables (GHFOLLOW_ prefix, `__` between section and key)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    GITHUB_USERNAME                      Account name used for authentication
    GITHUB_TOKEN                         Personal access token (needs user:follow)
    GHFOLLOW_GITHUB__API_URL             API base URL (default: https://api.github.com)
    GHFOLLOW_HTTP__TIMEOUT_SECS          Per-request timeout (default: 30)
    GHFOLLOW_BATCH__FOLLOW_DELAY_SECS    Default follow delay (default: 30)
    GHFOLLOW_BATCH__UNFOLLOW_DELAY_SECS  Default unfollow delay (default: 5)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the accounts you follow to a CSV file
    ExportFollowing {
        /// Output file
        filename: PathBuf,
    },
    /// Save an organization's members to a CSV file
    ExportOrgMembers {
        /// Organization login
        org: String,
        /// Output file
        filename: PathBuf,
    },
    /// Follow every account listed in a CSV file
    FollowFromCsv {
        /// File written by an export command
        filename: PathBuf,

        #[command(flatten)]
        pace: PaceOptions,
    },
    /// Unfollow every account listed in a CSV file
    UnfollowFromCsv {
        /// File written by an export command
        filename: PathBuf,

        #[command(flatten)]
        pace: PaceOptions,
    },
    /// Follow every member of an organization
    FollowOrgMembers {
        /// Organization login
        org: String,

        #[command(flatten)]
        pace: PaceOptions,
    },
    /// Unfollow every member of an organization
    UnfollowOrgMembers {
        /// Organization login
        org: String,

        #[command(flatten)]
        pace: PaceOptions,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Generate man page(s)
    Man {
        /// Output directory for man pages (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Pacing options shared by the batch commands.
#[derive(Debug, Clone, clap::Args)]
struct PaceOptions {
    /// Seconds to wait after each request (default from config: 30 to follow, 5 to unfollow)
    #[arg(short = 'd', long, value_parser = commands::shared::parse_delay)]
    delay: Option<Duration>,

    /// Don't wait after the last request
    #[arg(long)]
    no_trailing_delay: bool,
}

impl Commands {
    /// The batch this command runs, if it is a batch command.
    fn batch(&self) -> Option<(Relation, BatchSource, &PaceOptions)> {
        match self {
            Self::FollowFromCsv { filename, pace } => {
                Some((Relation::Follow, BatchSource::Csv(filename.clone()), pace))
            }
            Self::UnfollowFromCsv { filename, pace } => {
                Some((Relation::Unfollow, BatchSource::Csv(filename.clone()), pace))
            }
            Self::FollowOrgMembers { org, pace } => Some((
                Relation::Follow,
                BatchSource::OrgMembers(org.clone()),
                pace,
            )),
            Self::UnfollowOrgMembers { org, pace } => Some((
                Relation::Unfollow,
                BatchSource::OrgMembers(org.clone()),
                pace,
            )),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Set up graceful shutdown handler (Ctrl+C)
    shutdown::setup_shutdown_handler();

    // Initialize tracing for non-TTY mode (structured logging)
    // Only initialize if not connected to a TTY
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("ghfollow=info,ghfollow_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    // Load configuration (config file -> env vars -> defaults)
    let config = config::Config::load();

    let cli = Cli::parse();

    // Handle commands that don't need credentials first
    match &cli.command {
        Commands::Completions { shell } => {
            commands::meta::handle_completions(*shell)?;
            return Ok(());
        }
        Commands::Man { output } => {
            commands::meta::handle_man(output.clone())?;
            return Ok(());
        }
        _ => {}
    }

    if let Err(e) = run(cli.command, &config).await {
        if Term::stdout().is_term() {
            eprintln!("Error: {e}");
        } else {
            tracing::error!(error = %e, "Command failed");
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, config: &config::Config) -> Result<(), Box<dyn std::error::Error>> {
    // Validate pacing before touching credentials or the network
    let batch = match command.batch() {
        Some((relation, source, pace)) => Some((
            relation,
            source,
            commands::shared::batch_options(config, relation, pace)?,
        )),
        None => None,
    };

    let client = commands::shared::build_client(config)?;

    if let Some((relation, source, options)) = batch {
        commands::relations::handle_batch(&client, relation, source, &options).await?;
        return Ok(());
    }

    match command {
        Commands::ExportFollowing { filename } => {
            commands::export::handle_export(&client, ListEndpoint::Following, &filename).await?;
        }
        Commands::ExportOrgMembers { org, filename } => {
            commands::export::handle_export(&client, ListEndpoint::org_members(org), &filename)
                .await?;
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_export_commands() {
        let cli = Cli::try_parse_from(["ghfollow", "export-org-members", "acme", "out.csv"]).unwrap();
        match cli.command {
            Commands::ExportOrgMembers { org, filename } => {
                assert_eq!(org, "acme");
                assert_eq!(filename, PathBuf::from("out.csv"));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn parses_batch_pacing() {
        let cli = Cli::try_parse_from([
            "ghfollow",
            "follow-from-csv",
            "people.csv",
            "-d",
            "2.5",
            "--no-trailing-delay",
        ])
        .unwrap();

        let (relation, source, pace) = cli.command.batch().expect("batch command");
        assert_eq!(relation, Relation::Follow);
        assert!(matches!(source, BatchSource::Csv(path) if path == PathBuf::from("people.csv")));
        assert_eq!(pace.delay, Some(Duration::from_millis(2500)));
        assert!(pace.no_trailing_delay);
    }

    #[test]
    fn delay_defaults_to_unset() {
        let cli = Cli::try_parse_from(["ghfollow", "unfollow-org-members", "acme"]).unwrap();
        let (relation, source, pace) = cli.command.batch().expect("batch command");
        assert_eq!(relation, Relation::Unfollow);
        assert!(matches!(source, BatchSource::OrgMembers(org) if org == "acme"));
        assert_eq!(pace.delay, None);
        assert!(!pace.no_trailing_delay);
    }

    #[test]
    fn rejects_negative_delay() {
        let result = Cli::try_parse_from(["ghfollow", "unfollow-from-csv", "x.csv", "--delay=-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn export_is_not_a_batch() {
        let cli = Cli::try_parse_from(["ghfollow", "export-following", "f.csv"]).unwrap();
        assert!(cli.command.batch().is_none());
    }

    #[tokio::test]
    async fn run_without_credentials_fails_before_network() {
        let config = config::Config::default();
        let err = run(
            Commands::ExportFollowing {
                filename: PathBuf::from("unused.csv"),
            },
            &config,
        )
        .await
        .expect_err("credentials are required");
        assert!(err.to_string().contains("Missing GitHub"));
        assert!(!std::path::Path::new("unused.csv").exists());
    }
}
