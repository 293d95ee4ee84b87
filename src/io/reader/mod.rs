// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! File-backed simulation reader.
//!
//! [`SimulationReader`] ties a path to a set of decode limits. Each call
//! opens the file, decodes, and closes it again before returning, whether
//! the decode succeeded or not.
//!
//! # Example
//!
//! ```rust,no_run
//! use esme::io::SimulationReader;
//!
//! let reader = SimulationReader::open("run.exposures")?;
//! let footer = reader.read_footer()?;
//! for platform in &footer.platforms {
//!     println!("{} {}", platform.actor_id, platform.name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;

pub use builder::{ReaderBuilder, ReaderConfig};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::io::binary::BinaryReader;
use crate::io::formats::exposures::{Footer, FooterLimits, FooterReader};
use crate::{Result, SimError};

/// Reader for one simulation result file.
#[derive(Debug, Clone)]
pub struct SimulationReader {
    config: ReaderConfig,
}

impl SimulationReader {
    /// Open a file with default limits.
    ///
    /// Fails with `SourceNotFound` if the file does not exist. The file is
    /// not held open.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        ReaderBuilder::new().path(path).build()
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Decode limits in effect.
    pub fn limits(&self) -> &FooterLimits {
        &self.config.limits
    }

    /// Size of the file in bytes.
    pub fn file_size(&self) -> Result<u64> {
        Ok(std::fs::metadata(&self.config.path)
            .map_err(|e| self.open_error(e))?
            .len())
    }

    fn open_file(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.config.path).map_err(|e| self.open_error(e))?;
        Ok(BufReader::new(file))
    }

    fn open_error(&self, err: std::io::Error) -> SimError {
        if err.kind() == std::io::ErrorKind::NotFound {
            SimError::source_not_found(&self.config.path)
        } else {
            SimError::io("SimulationReader::open", format!("Failed to open file: {err}"))
        }
    }

    /// Decode the footer.
    pub fn read_footer(&self) -> Result<Footer> {
        let file = self.open_file()?;
        debug!(path = %self.config.path.display(), "reading footer");
        FooterReader::with_limits(self.config.limits).read(file)
    }

    /// Read the raw bytes of time-step record `index`.
    ///
    /// Returns `Ok(None)` when `index` is past the last record. The record
    /// body is returned undecoded.
    pub fn read_time_step_bytes(
        &self,
        footer: &Footer,
        index: usize,
    ) -> Result<Option<Vec<u8>>> {
        let Some(range) = footer.time_step_range(index) else {
            return Ok(None);
        };
        let len = usize::try_from(range.end - range.start).map_err(|_| {
            SimError::malformed_length(range.end - range.start, usize::MAX, range.start)
        })?;

        let mut reader = BinaryReader::new(self.open_file()?);
        reader.seek_to(range.start)?;
        Ok(Some(reader.read_bytes(len)?))
    }
}
