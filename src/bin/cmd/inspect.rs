// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show run summary, catalogs, time-step offsets.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

use crate::common::{format_duration, format_span, format_timestamp, open_reader, Result};
use crate::GlobalOpts;
use esme::Footer;

/// Inspect file contents.
#[derive(Subcommand, Clone, Debug)]
pub enum InspectCmd {
    /// Show run metadata and catalog sizes
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the whole footer as JSON
        #[arg(long)]
        json: bool,
    },

    /// List platforms
    Platforms {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also list the modes of each platform
        #[arg(long)]
        modes: bool,
    },

    /// List modes
    Modes {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List species and their actor ID ranges
    Species {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List time-step record offsets
    Offsets {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show at most this many offsets
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl InspectCmd {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        match self {
            InspectCmd::Info { input, json } => cmd_info(input, json, opts),
            InspectCmd::Platforms { input, modes } => cmd_platforms(input, modes, opts),
            InspectCmd::Modes { input } => cmd_modes(input, opts),
            InspectCmd::Species { input } => cmd_species(input, opts),
            InspectCmd::Offsets { input, limit } => cmd_offsets(input, limit, opts),
        }
    }
}

fn read_footer(input: &Path, opts: &GlobalOpts) -> Result<Footer> {
    Ok(open_reader(input, opts)?.read_footer()?)
}

/// Footer plus the file it came from, for JSON output.
#[derive(Serialize)]
struct InfoJson<'a> {
    file: String,
    #[serde(flatten)]
    footer: &'a Footer,
}

/// Cmd: Show run info
fn cmd_info(input: PathBuf, json: bool, opts: &GlobalOpts) -> Result<()> {
    let footer = read_footer(&input, opts)?;

    if json {
        let out = InfoJson {
            file: input.display().to_string(),
            footer: &footer,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("=== {} ===", input.display());
    println!(
        "Scenario: {} ({})",
        footer.scenario.name, footer.scenario.guid
    );
    println!("Created by: {}", footer.creating_user);
    println!("Created on: {}", footer.creating_computer);
    println!("Start: {}", format_timestamp(footer.start_time));
    println!("End: {}", format_timestamp(footer.end_time));
    println!("Duration: {}", format_span(footer.duration()));
    println!("Time step: {}", format_duration(footer.time_step_size));
    println!("Time steps: {}", footer.time_step_count());
    println!();
    println!("Platforms: {}", footer.platforms.len());
    println!("Modes: {}", footer.modes.len());
    println!(
        "Species: {} ({} animats)",
        footer.species.len(),
        footer.animat_count()
    );

    Ok(())
}

/// Cmd: List platforms
fn cmd_platforms(input: PathBuf, show_modes: bool, opts: &GlobalOpts) -> Result<()> {
    let footer = read_footer(&input, opts)?;

    println!("=== Platforms in {} ===", input.display());
    println!();

    for platform in &footer.platforms {
        println!(
            "  [{}] {} | {}",
            platform.actor_id, platform.name, platform.guid
        );
        if show_modes {
            for mode in footer.modes_for_platform(&platform.guid) {
                println!("      [{}] {} | {}", mode.actor_id, mode.name, mode.guid);
            }
        }
    }

    Ok(())
}

/// Cmd: List modes
fn cmd_modes(input: PathBuf, opts: &GlobalOpts) -> Result<()> {
    let footer = read_footer(&input, opts)?;

    println!("=== Modes in {} ===", input.display());
    println!();

    for mode in &footer.modes {
        let owner = footer
            .platform_by_guid(&mode.platform_guid)
            .map(|p| p.name.as_str())
            .unwrap_or("(unknown platform)");
        println!(
            "  [{}] {} | {} | platform {} ({})",
            mode.actor_id, mode.name, mode.guid, owner, mode.platform_guid
        );
    }

    Ok(())
}

/// Cmd: List species
fn cmd_species(input: PathBuf, opts: &GlobalOpts) -> Result<()> {
    let footer = read_footer(&input, opts)?;

    println!("=== Species in {} ===", input.display());
    println!();

    for species in &footer.species {
        let first = i64::from(species.start_actor_id);
        let last = first + i64::from(species.animat_count) - 1;
        println!(
            "  {} | {} | {} animats | actors {}..={}",
            species.name, species.guid, species.animat_count, first, last
        );
    }

    Ok(())
}

/// Cmd: List time-step offsets
fn cmd_offsets(input: PathBuf, limit: Option<usize>, opts: &GlobalOpts) -> Result<()> {
    let footer = read_footer(&input, opts)?;
    let shown = limit.unwrap_or(usize::MAX);

    println!("=== Time steps in {} ===", input.display());
    println!("Total: {}", footer.time_step_count());
    println!();

    for (i, offset) in footer.time_step_offsets.iter().take(shown).enumerate() {
        println!("  {:>6}  {}", i, offset);
    }
    if footer.time_step_count() > shown {
        println!("  ... ({} more)", footer.time_step_count() - shown);
    }

    Ok(())
}
