//! # CLI Interface
//!
//! Defines the command-line argument structure for `carchain` using
//! `clap` derive. With no subcommand the binary behaves as `run`.

use clap::{Args, Parser, Subcommand};

use carchain::config::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

use crate::logging::LogFormat;

/// Supply chain record demo.
///
/// Builds a seven-stage chain of car manufacturing records, each carrying
/// the previous record's pseudo-hash, and lets you browse it from a menu.
#[derive(Parser, Debug)]
#[command(
    name = "carchain",
    about = "Supply chain record demo",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
pub struct CarchainCli {
    /// Subcommand to execute. Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the implicit `run`.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and browse the dataset and the chain interactively.
    Run(RunArgs),
    /// Build the chain and print it as JSON.
    Export(ExportArgs),
    /// Print version information and exit.
    Version,
}

/// Logging options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format (logs go to stderr).
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Username the login gate accepts.
    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Password the login gate accepts.
    ///
    /// Visible in the process list. Fine for a classroom, nowhere else.
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    pub password: String,

    /// Seed for the pseudo-hash generator. Seeds from the clock when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print without ANSI color codes.
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Seed for the pseudo-hash generator. Seeds from the clock when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub log: LogArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        CarchainCli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_uses_run_defaults() {
        let cli = CarchainCli::try_parse_from(["carchain"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.run.username, "username");
        assert_eq!(cli.run.password, "password");
        assert_eq!(cli.run.seed, None);
        assert!(!cli.run.no_color);
        assert_eq!(cli.run.log.log_format, LogFormat::Pretty);
    }

    #[test]
    fn top_level_flags_feed_implicit_run() {
        let cli = CarchainCli::try_parse_from(["carchain", "--no-color", "--seed", "5"])
            .expect("parse");
        assert!(cli.run.no_color);
        assert_eq!(cli.run.seed, Some(5));
    }

    #[test]
    fn export_accepts_seed_and_json_logs() {
        let cli = CarchainCli::try_parse_from([
            "carchain",
            "export",
            "--seed",
            "9",
            "--log-format",
            "json",
        ])
        .expect("parse");
        match cli.command {
            Some(Commands::Export(args)) => {
                assert_eq!(args.seed, Some(9));
                assert_eq!(args.log.log_format, LogFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_overrides_credentials() {
        let cli = CarchainCli::try_parse_from([
            "carchain",
            "run",
            "--username",
            "plant",
            "--password",
            "line7",
        ])
        .expect("parse");
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.username, "plant");
                assert_eq!(args.password, "line7");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
