// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for simulation result files.
//!
//! This module provides the typed byte stream, the format implementation,
//! and the file-backed reader built on them.

pub mod binary;
pub mod formats;

pub use binary::{BinaryReader, BinaryWriter};

// File-backed reader with configurable limits
pub mod reader;
pub use reader::{ReaderBuilder, ReaderConfig, SimulationReader};
