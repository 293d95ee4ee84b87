// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use esme::core::ticks::ticks_to_datetime;
use esme::{
    BinaryWriter, Footer, FooterWriter, ModeRecord, PlatformRecord, ScenarioRecord, SpeciesRecord,
    FOOTER_MAGIC,
};
use tempfile::NamedTempFile;
use uuid::Uuid;

// ============================================================================
// Fixtures
// ============================================================================

/// 2010-06-01T12:00:00 in ticks.
pub const START_TICKS: u64 = 634_109_904_000_000_000;

/// One hour after [`START_TICKS`].
pub const END_TICKS: u64 = 634_109_940_000_000_000;

pub const SHIP_GUID: Uuid = Uuid::from_u128(0x5a1f_0000_0000_0000_0000_0000_0000_0001);
pub const GLIDER_GUID: Uuid = Uuid::from_u128(0x5a1f_0000_0000_0000_0000_0000_0000_0002);

/// A footer with every catalog populated.
pub fn sample_footer() -> Footer {
    Footer {
        trailer_offset: 64,
        magic: FOOTER_MAGIC,
        time_step_size: Duration::from_secs(1),
        start_time: ticks_to_datetime(START_TICKS),
        end_time: ticks_to_datetime(END_TICKS),
        creating_user: "gvoysey".to_string(),
        creating_computer: "ESME-WORKSTATION".to_string(),
        scenario: ScenarioRecord {
            name: "Cape Cod Bay".to_string(),
            guid: Uuid::from_u128(0xc0de),
        },
        platforms: vec![
            PlatformRecord {
                actor_id: 0,
                name: "R/V Endeavor".to_string(),
                guid: SHIP_GUID,
            },
            PlatformRecord {
                actor_id: 1,
                name: "Slocum glider".to_string(),
                guid: GLIDER_GUID,
            },
        ],
        modes: vec![
            ModeRecord {
                actor_id: 2,
                name: "53C active".to_string(),
                guid: Uuid::from_u128(0xa1),
                platform_guid: SHIP_GUID,
            },
            ModeRecord {
                actor_id: 3,
                name: "Echosounder".to_string(),
                guid: Uuid::from_u128(0xa2),
                platform_guid: SHIP_GUID,
            },
            ModeRecord {
                actor_id: 4,
                name: "Acoustic modem".to_string(),
                guid: Uuid::from_u128(0xa3),
                platform_guid: GLIDER_GUID,
            },
        ],
        species: vec![
            SpeciesRecord {
                animat_count: 100,
                start_actor_id: 5,
                name: "Tursiops truncatus".to_string(),
                guid: Uuid::from_u128(0xb1),
            },
            SpeciesRecord {
                animat_count: 20,
                start_actor_id: 105,
                name: "Eubalaena glacialis".to_string(),
                guid: Uuid::from_u128(0xb2),
            },
        ],
        time_step_offsets: vec![0, 16, 32, 48],
    }
}

/// Encode a footer as a complete file.
pub fn encode(footer: &Footer) -> Vec<u8> {
    FooterWriter::new().to_bytes(footer).unwrap()
}

/// The smallest useful file: empty catalogs and a single time-step offset,
/// footer at offset 0.
pub fn minimal_file(offset: u64) -> Vec<u8> {
    let mut w = BinaryWriter::new(Vec::new());
    w.write_u64(10_000_000).unwrap();
    w.write_u64(0).unwrap();
    w.write_u64(0).unwrap();
    w.write_string("").unwrap();
    w.write_string("").unwrap();
    w.write_string("").unwrap();
    w.write_bytes(&[0u8; 16]).unwrap();
    w.write_i32(0).unwrap();
    w.write_i32(0).unwrap();
    w.write_i32(0).unwrap();
    w.write_i32(1).unwrap();
    w.write_u64(offset).unwrap();
    w.write_u64(0).unwrap();
    w.write_u64(FOOTER_MAGIC).unwrap();
    w.into_inner()
}

/// Write bytes to a temporary `.exposures` file.
pub fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".exposures")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
