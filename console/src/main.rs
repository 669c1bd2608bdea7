// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # carchain Console
//!
//! Entry point for the `carchain` binary. Parses CLI arguments, initializes
//! logging, builds the supply chain and hands stdin/stdout to the session.
//!
//! The binary supports three subcommands:
//!
//! - `run`     — log in and browse the dataset and chain (the default)
//! - `export`  — print the built chain as JSON
//! - `version` — print build version information

mod cli;
mod logging;
mod session;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use carchain::timestamp::LocalClock;
use carchain::{ChainBuilder, Credentials, Dataset, Palette, PseudoHasher, SupplyChain};

use cli::{CarchainCli, Commands};
use session::Session;

fn main() -> Result<()> {
    let cli = CarchainCli::parse();

    match cli.command {
        Some(Commands::Run(args)) => run_console(args),
        Some(Commands::Export(args)) => export_chain(args),
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        None => run_console(cli.run),
    }
}

/// Login gate, then the menu loop, on stdin/stdout.
fn run_console(args: cli::RunArgs) -> Result<()> {
    logging::init_logging(&args.log.log_level, args.log.log_format);
    tracing::info!(seed = ?args.seed, no_color = args.no_color, "starting carchain console");

    let valid = Credentials::new(args.username, args.password);
    let palette = if args.no_color {
        Palette::plain()
    } else {
        Palette::ansi()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), palette);

    let Some(username) = session
        .authenticate(&valid)
        .context("console I/O failed during login")?
    else {
        tracing::warn!("input closed before login, exiting");
        return Ok(());
    };

    let dataset = Dataset::builtin();
    let chain = build_chain(&dataset, args.seed)?;

    let end = session
        .run_menu(&dataset, &chain)
        .context("console I/O failed in the menu")?;
    tracing::info!(%username, ?end, "session ended");
    Ok(())
}

/// Build the chain and print it as pretty JSON.
fn export_chain(args: cli::ExportArgs) -> Result<()> {
    logging::init_logging(&args.log.log_level, args.log.log_format);

    let chain = build_chain(&Dataset::builtin(), args.seed)?;
    let json = serde_json::to_string_pretty(&chain).context("failed to serialize chain")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write chain to stdout")?;
    tracing::info!(height = chain.height(), "chain exported");
    Ok(())
}

fn build_chain(dataset: &Dataset, seed: Option<u64>) -> Result<SupplyChain> {
    let hasher = seed.map_or_else(PseudoHasher::from_clock, PseudoHasher::from_seed);
    ChainBuilder::with_parts(hasher, LocalClock)
        .build(dataset)
        .context("failed to build the supply chain")
}

/// Prints version information to stdout.
fn print_version() {
    println!("carchain {}", env!("CARGO_PKG_VERSION"));
}
