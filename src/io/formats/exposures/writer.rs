// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Footer encoding, the inverse of [`FooterReader`](super::FooterReader).
//!
//! Simulation files are produced by the simulator, not by this crate; the
//! writer exists to build fixtures and to check that decoding is lossless.

use std::io::Write;

use tracing::debug;

use super::constants::FOOTER_MAGIC;
use super::footer::Footer;
use crate::core::ticks::{datetime_to_ticks, duration_to_ticks};
use crate::io::binary::BinaryWriter;
use crate::{Result, SimError};

/// Encodes a [`Footer`] followed by its trailer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterWriter;

impl FooterWriter {
    /// Create a footer writer.
    pub fn new() -> Self {
        Self
    }

    /// Write the footer payload at the writer's current position, then the
    /// trailer pointing back at it.
    ///
    /// The trailer records the actual payload position, not
    /// `footer.trailer_offset`. Returns that position.
    pub fn write<W: Write>(&self, footer: &Footer, w: &mut BinaryWriter<W>) -> Result<u64> {
        let offset = w.position();

        w.write_u64(duration_to_ticks(footer.time_step_size))?;
        w.write_u64(Self::ticks("start_time", footer.start_time)?)?;
        w.write_u64(Self::ticks("end_time", footer.end_time)?)?;
        w.write_string(&footer.creating_user)?;
        w.write_string(&footer.creating_computer)?;
        w.write_string(&footer.scenario.name)?;
        w.write_uuid(&footer.scenario.guid)?;

        Self::write_count(w, footer.platforms.len())?;
        for p in &footer.platforms {
            w.write_i32(p.actor_id)?;
            w.write_string(&p.name)?;
            w.write_uuid(&p.guid)?;
        }

        Self::write_count(w, footer.modes.len())?;
        for m in &footer.modes {
            w.write_i32(m.actor_id)?;
            w.write_string(&m.name)?;
            w.write_uuid(&m.guid)?;
            w.write_uuid(&m.platform_guid)?;
        }

        Self::write_count(w, footer.species.len())?;
        for s in &footer.species {
            w.write_i32(s.animat_count)?;
            w.write_i32(s.start_actor_id)?;
            w.write_string(&s.name)?;
            w.write_uuid(&s.guid)?;
        }

        Self::write_count(w, footer.time_step_offsets.len())?;
        for &o in &footer.time_step_offsets {
            w.write_u64(o)?;
        }

        w.write_u64(offset)?;
        w.write_u64(footer.magic)?;
        debug!(offset, len = w.position() - offset, "wrote footer");
        Ok(offset)
    }

    /// Encode a whole file: `footer.trailer_offset` zero bytes standing in for
    /// the time-step payload, then the footer and trailer.
    pub fn to_bytes(&self, footer: &Footer) -> Result<Vec<u8>> {
        let padding = usize::try_from(footer.trailer_offset)
            .map_err(|_| SimError::encode("FooterWriter", "trailer offset exceeds memory"))?;
        let mut w = BinaryWriter::new(Vec::new());
        w.write_bytes(&vec![0u8; padding])?;
        self.write(footer, &mut w)?;
        Ok(w.into_inner())
    }

    /// Encode a footer with the standard magic, regardless of `footer.magic`.
    pub fn to_valid_bytes(&self, footer: &Footer) -> Result<Vec<u8>> {
        let mut footer = footer.clone();
        footer.magic = FOOTER_MAGIC;
        self.to_bytes(&footer)
    }

    fn ticks(field: &str, value: chrono::NaiveDateTime) -> Result<u64> {
        datetime_to_ticks(value).ok_or_else(|| {
            SimError::encode(
                "FooterWriter",
                format!("{field} {value} is outside the tick range"),
            )
        })
    }

    fn write_count<W: Write>(w: &mut BinaryWriter<W>, len: usize) -> Result<()> {
        let count = i32::try_from(len).map_err(|_| {
            SimError::encode("FooterWriter", format!("catalog of {len} entries"))
        })?;
        w.write_i32(count)
    }
}
