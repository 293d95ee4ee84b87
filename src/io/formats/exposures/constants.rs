// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Simulation result file constants.

/// Magic number stored in the last 8 bytes of every footer-bearing file.
pub const FOOTER_MAGIC: u64 = 0xA57D_8EE6_59DC_45EC;

/// Size of the trailer: `u64 footer_offset || u64 magic`.
pub const TRAILER_SIZE: u64 = 16;

/// Default cap on any catalog count.
pub const DEFAULT_MAX_CATALOG_LEN: usize = 16 * 1024 * 1024;
