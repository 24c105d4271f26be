//! Command-line interface for the Mutirão matching engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use thiserror::Error;

use mutirao_core::{MatchError, Matcher, Vocabulary};
use mutirao_data::sources::{HttpFeedConfig, HttpFeedSource, SourceBuildError};

const ARG_USERS_URL: &str = "users-url";
const ARG_IMPACTS_URL: &str = "impacts-url";
const ENV_USERS_URL: &str = "MUTIRAO_CMDS_MATCH_USERS_URL";
const ENV_IMPACTS_URL: &str = "MUTIRAO_CMDS_MATCH_IMPACTS_URL";

/// Run the Mutirão CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Match(args) => run_match(args),
    }
}

fn run_match(args: MatchArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let source = Arc::new(HttpFeedSource::with_config(config.to_feed_config())?);
    let matcher = Matcher::new(
        Arc::new(Vocabulary::brazilian_default()),
        Arc::clone(&source),
        source,
    );

    let report = matcher.match_latest_impact()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "mutirao",
    about = "Match registered users against the latest impact record",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank registered users by distance to the latest impact.
    Match(MatchArgs),
}

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Define the feed endpoints for a matching run. URLs can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Describe the profile and impacts feeds for a matching run"
)]
#[ortho_config(prefix = "MUTIRAO")]
struct MatchArgs {
    /// Endpoint returning the registered user profiles as a JSON array.
    #[arg(long = ARG_USERS_URL, value_name = "url")]
    #[serde(default)]
    users_url: Option<String>,
    /// Endpoint returning the impacts feed, newest first.
    #[arg(long = ARG_IMPACTS_URL, value_name = "url")]
    #[serde(default)]
    impacts_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "seconds")]
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl MatchArgs {
    fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchConfig {
    users_url: String,
    impacts_url: String,
    timeout: Option<Duration>,
}

impl MatchConfig {
    fn to_feed_config(&self) -> HttpFeedConfig {
        let config = HttpFeedConfig::new(&self.users_url, &self.impacts_url);
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let users_url = args.users_url.ok_or(CliError::MissingArgument {
            field: ARG_USERS_URL,
            env: ENV_USERS_URL,
        })?;
        let impacts_url = args.impacts_url.ok_or(CliError::MissingArgument {
            field: ARG_IMPACTS_URL,
            env: ENV_IMPACTS_URL,
        })?;
        Ok(Self {
            users_url,
            impacts_url,
            timeout: args.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Errors emitted by the Mutirão CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The feed client could not be initialised.
    #[error("failed to initialise the feed client: {0}")]
    SourceBuild(#[from] SourceBuildError),
    /// The matching run itself failed.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// The match report could not be serialised for output.
    #[error("failed to serialise the match report: {0}")]
    Serialize(#[from] serde_json::Error),
}
