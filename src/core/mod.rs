// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout esme.
//!
//! This module provides the foundational types for the library:
//! - [`SimError`] - Error kinds for every decode failure
//! - [`ticks`] - 100-nanosecond tick conversions

pub mod error;
pub mod ticks;

pub use error::{Result, SimError};
