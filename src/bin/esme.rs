// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # esme CLI
//!
//! Command-line tool for inspecting ESME simulation result files.
//!
//! ## Usage
//!
//! ```sh
//! # Show run summary
//! esme inspect info run.exposures
//!
//! # List catalogs
//! esme inspect platforms run.exposures
//! esme inspect species run.exposures
//!
//! # Dump the whole footer as JSON
//! esme inspect info --json run.exposures
//! ```

mod cmd;
mod common;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use cmd::InspectCmd;
use common::Result;

/// esme - ESME simulation result toolkit
///
/// Reads the footer of a simulation result file: run metadata, entity
/// catalogs, and time-step record offsets.
#[derive(Parser, Clone)]
#[command(name = "esme")]
#[command(about = "Inspect ESME Workbench simulation result files", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Reader configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Largest accepted string length in bytes
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_string_len: Option<usize>,

    /// Largest accepted catalog entry count
    #[arg(long, global = true, value_name = "COUNT")]
    pub max_catalog_len: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Inspect file contents (info, platforms, modes, species, offsets)
    #[command(subcommand)]
    Inspect(InspectCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(&cli.global),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
