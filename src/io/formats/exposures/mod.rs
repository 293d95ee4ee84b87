// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ESME simulation result (`.exposures`) format.
//!
//! A result file is a run of time-step records followed by a footer that
//! catalogs the platforms, modes and species of the run and lists where each
//! time-step record starts. Only the footer is decoded here; the time-step
//! offsets are what a time-step reader consumes.

pub mod constants;
pub mod footer;
pub mod records;
pub mod writer;

pub use constants::{DEFAULT_MAX_CATALOG_LEN, FOOTER_MAGIC, TRAILER_SIZE};
pub use footer::{Footer, FooterLimits, FooterReader};
pub use records::{ModeRecord, PlatformRecord, ScenarioRecord, SpeciesRecord};
pub use writer::FooterWriter;
