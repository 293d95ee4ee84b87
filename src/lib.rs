// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # esme
//!
//! Reader for ESME Workbench simulation result (`.exposures`) files.
//!
//! A result file ends in a footer describing the run: its time span, who ran
//! it and where, the scenario, and catalogs of the platforms, modes and
//! animal species taking part. The footer also lists the offset of every
//! time-step record, which is what a time-step reader needs to get started.
//!
//! ## Architecture
//!
//! - `core/` - Error type and 100ns tick conversions
//! - `io/binary` - Little-endian typed byte stream ([`BinaryReader`], [`BinaryWriter`])
//! - `io/formats/exposures/` - Footer layout, catalog records, reader and writer
//! - `io/reader/` - File-backed [`SimulationReader`] and its builder
//!
//! ## Example: Reading a footer
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use esme::SimulationReader;
//!
//! let reader = SimulationReader::open("simulation.exposures")?;
//! let footer = reader.read_footer()?;
//! println!("Scenario: {}", footer.scenario.name);
//! println!("{} -> {}", footer.start_time, footer.end_time);
//! for offset in &footer.time_step_offsets {
//!     println!("time step at {offset}");
//! }
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{Result, SimError};

// I/O types (typed stream, format, file reader)
pub mod io;

// Re-export key I/O types
pub use io::binary::{BinaryReader, BinaryWriter};
pub use io::formats::exposures::{
    Footer, FooterLimits, FooterReader, FooterWriter, ModeRecord, PlatformRecord, ScenarioRecord,
    SpeciesRecord, FOOTER_MAGIC,
};
pub use io::reader::{ReaderBuilder, ReaderConfig, SimulationReader};
