// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Footer decoding.
//!
//! # Layout
//!
//! The last 16 bytes of a file are the trailer:
//! `<footer_offset: u64><magic: u64>`. The footer payload starts at
//! `footer_offset` and is read strictly sequentially:
//!
//! ```text
//! u64 time_step_size_ticks
//! u64 start_time_ticks
//! u64 end_time_ticks
//! string creating_user
//! string creating_computer
//! string scenario_name
//! [u8; 16] scenario_guid
//! i32 count, { i32 actor_id; string name; [u8; 16] guid } x count
//! i32 count, { i32 actor_id; string name; [u8; 16] guid; [u8; 16] platform_guid } x count
//! i32 count, { i32 animat_count; i32 start_actor_id; string name; [u8; 16] guid } x count
//! i32 count, u64 offset x count
//! ```
//!
//! Integers are little-endian, times are 100ns ticks (see
//! [`ticks`](crate::core::ticks)).

use std::io::{Cursor, Read, Seek};
use std::ops::Range;
use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::constants::{DEFAULT_MAX_CATALOG_LEN, FOOTER_MAGIC, TRAILER_SIZE};
use super::records::{ModeRecord, PlatformRecord, ScenarioRecord, SpeciesRecord};
use crate::core::ticks::{ticks_to_datetime, ticks_to_duration};
use crate::io::binary::{BinaryReader, DEFAULT_MAX_STRING_LEN};
use crate::{Result, SimError};

/// Decoded footer of a simulation result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Absolute offset of the footer payload
    pub trailer_offset: u64,
    /// Magic number from the trailer (always [`FOOTER_MAGIC`] once decoded)
    pub magic: u64,
    /// Simulated time between consecutive time steps
    pub time_step_size: Duration,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub creating_user: String,
    pub creating_computer: String,
    pub scenario: ScenarioRecord,
    pub platforms: Vec<PlatformRecord>,
    pub modes: Vec<ModeRecord>,
    pub species: Vec<SpeciesRecord>,
    /// Absolute offset of each time-step record, in file order
    pub time_step_offsets: Vec<u64>,
}

impl Footer {
    /// Simulated time span, `end_time - start_time`.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Number of time-step records in the file.
    pub fn time_step_count(&self) -> usize {
        self.time_step_offsets.len()
    }

    /// Byte range of time-step record `index`.
    ///
    /// A record ends where the next record (by offset) begins, or at the
    /// footer for the last one. Offsets are used as stored; nothing checks
    /// that they are ordered or inside the file.
    pub fn time_step_range(&self, index: usize) -> Option<Range<u64>> {
        let start = *self.time_step_offsets.get(index)?;
        let end = self
            .time_step_offsets
            .iter()
            .copied()
            .filter(|&o| o > start)
            .min()
            .unwrap_or(self.trailer_offset)
            .max(start);
        Some(start..end)
    }

    /// First platform with the given actor ID.
    pub fn platform_by_actor_id(&self, actor_id: i32) -> Option<&PlatformRecord> {
        self.platforms.iter().find(|p| p.actor_id == actor_id)
    }

    /// First platform with the given GUID.
    pub fn platform_by_guid(&self, guid: &Uuid) -> Option<&PlatformRecord> {
        self.platforms.iter().find(|p| &p.guid == guid)
    }

    /// First mode with the given actor ID.
    pub fn mode_by_actor_id(&self, actor_id: i32) -> Option<&ModeRecord> {
        self.modes.iter().find(|m| m.actor_id == actor_id)
    }

    /// Modes that name `platform_guid` as their owner, in file order.
    pub fn modes_for_platform<'a>(
        &'a self,
        platform_guid: &'a Uuid,
    ) -> impl Iterator<Item = &'a ModeRecord> + 'a {
        self.modes
            .iter()
            .filter(move |m| &m.platform_guid == platform_guid)
    }

    /// First species whose actor range contains `actor_id`.
    pub fn species_for_actor(&self, actor_id: i32) -> Option<&SpeciesRecord> {
        self.species.iter().find(|s| s.contains_actor(actor_id))
    }

    /// Total animats across all species.
    pub fn animat_count(&self) -> i64 {
        self.species
            .iter()
            .map(|s| i64::from(s.animat_count.max(0)))
            .sum()
    }
}

/// Bounds applied while decoding untrusted length fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLimits {
    /// Largest accepted string payload, in bytes
    pub max_string_len: usize,
    /// Largest accepted catalog entry count
    pub max_catalog_len: usize,
}

impl Default for FooterLimits {
    fn default() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
            max_catalog_len: DEFAULT_MAX_CATALOG_LEN,
        }
    }
}

/// Decodes a [`Footer`] from a seekable byte source.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::fs::File;
/// use std::io::BufReader;
/// use esme::io::formats::exposures::FooterReader;
///
/// let file = BufReader::new(File::open("simulation.exposures")?);
/// let footer = FooterReader::new().read(file)?;
/// println!("{} time steps", footer.time_step_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FooterReader {
    limits: FooterLimits,
}

impl FooterReader {
    /// Create a reader with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the given limits.
    pub fn with_limits(limits: FooterLimits) -> Self {
        Self { limits }
    }

    /// Limits in effect.
    pub fn limits(&self) -> &FooterLimits {
        &self.limits
    }

    /// Decode the footer of an in-memory file.
    pub fn read_bytes(&self, data: &[u8]) -> Result<Footer> {
        self.read(Cursor::new(data))
    }

    /// Decode the footer of `source`.
    ///
    /// Reads the trailer, checks the magic, then decodes the footer payload.
    /// Any failure aborts the whole decode.
    pub fn read<R: Read + Seek>(&self, source: R) -> Result<Footer> {
        let mut reader =
            BinaryReader::new(source).with_max_string_len(self.limits.max_string_len);

        let (trailer_offset, magic) = Self::read_trailer(&mut reader)?;
        debug!(trailer_offset, "found footer trailer");

        reader.seek_to(trailer_offset)?;

        let time_step_size = ticks_to_duration(reader.read_u64()?);
        let start_time = ticks_to_datetime(reader.read_u64()?);
        let end_time = ticks_to_datetime(reader.read_u64()?);
        let creating_user = reader.read_string()?;
        let creating_computer = reader.read_string()?;
        let scenario = ScenarioRecord {
            name: reader.read_string()?,
            guid: reader.read_uuid()?,
        };

        if end_time < start_time {
            warn!(%start_time, %end_time, "simulation ends before it starts");
        }

        let platforms = self.read_catalog(&mut reader, "platforms", |r| {
            Ok(PlatformRecord {
                actor_id: r.read_i32()?,
                name: r.read_string()?,
                guid: r.read_uuid()?,
            })
        })?;

        let modes = self.read_catalog(&mut reader, "modes", |r| {
            Ok(ModeRecord {
                actor_id: r.read_i32()?,
                name: r.read_string()?,
                guid: r.read_uuid()?,
                platform_guid: r.read_uuid()?,
            })
        })?;

        let species = self.read_catalog(&mut reader, "species", |r| {
            Ok(SpeciesRecord {
                animat_count: r.read_i32()?,
                start_actor_id: r.read_i32()?,
                name: r.read_string()?,
                guid: r.read_uuid()?,
            })
        })?;

        let time_step_offsets =
            self.read_catalog(&mut reader, "time step offsets", |r| r.read_u64())?;

        if let Some(bad) = time_step_offsets.iter().find(|&&o| o >= trailer_offset) {
            warn!(
                offset = *bad,
                trailer_offset, "time step offset points into the footer"
            );
        }

        debug!(
            platforms = platforms.len(),
            modes = modes.len(),
            species = species.len(),
            time_steps = time_step_offsets.len(),
            "decoded footer"
        );

        Ok(Footer {
            trailer_offset,
            magic,
            time_step_size,
            start_time,
            end_time,
            creating_user,
            creating_computer,
            scenario,
            platforms,
            modes,
            species,
            time_step_offsets,
        })
    }

    /// Read `<footer_offset: u64><magic: u64>` from the last 16 bytes.
    fn read_trailer<R: Read + Seek>(reader: &mut BinaryReader<R>) -> Result<(u64, u64)> {
        reader.seek_from_end(TRAILER_SIZE)?;
        let trailer_offset = reader.read_u64()?;
        let magic = reader.read_u64()?;
        if magic != FOOTER_MAGIC {
            return Err(SimError::invalid_format(FOOTER_MAGIC, magic));
        }
        Ok((trailer_offset, magic))
    }

    /// Read an `i32` count followed by that many entries.
    fn read_catalog<R, T, F>(
        &self,
        reader: &mut BinaryReader<R>,
        name: &str,
        mut read_entry: F,
    ) -> Result<Vec<T>>
    where
        R: Read,
        F: FnMut(&mut BinaryReader<R>) -> Result<T>,
    {
        let position = reader.position();
        let count = reader.read_i32()?;
        let limit = self.limits.max_catalog_len;
        let count = usize::try_from(count)
            .ok()
            .filter(|&c| c <= limit)
            .ok_or_else(|| SimError::malformed_length(count, limit, position))?;
        debug!(catalog = name, count, position, "reading catalog");

        // Entries are at least 4 bytes; let the vector grow past a modest
        // reservation rather than trusting the count.
        let mut entries = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            entries.push(read_entry(reader)?);
        }
        Ok(entries)
    }
}
