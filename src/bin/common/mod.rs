// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;
use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use esme::{ReaderBuilder, ReaderConfig, SimulationReader};

use crate::GlobalOpts;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Format a duration to human-readable string.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 86_400 {
        let days = secs / 86_400;
        let hours = (secs % 86_400) / 3600;
        format!("{}d {}h", days, hours)
    } else if secs >= 3600 {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    } else if secs >= 60 {
        let minutes = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}m {}s", minutes, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}s", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

/// Format a signed time span; negative spans get a leading `-`.
pub fn format_span(delta: TimeDelta) -> String {
    match delta.to_std() {
        Ok(d) => format_duration(d),
        Err(_) => format!("-{}", format_duration((-delta).to_std().unwrap_or_default())),
    }
}

/// Format a timestamp to human-readable string.
pub fn format_timestamp(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}

/// Open a file, applying config file and command-line limits.
pub fn open_reader(path: &Path, opts: &GlobalOpts) -> Result<SimulationReader> {
    let config = match &opts.config {
        Some(config_path) => ReaderConfig::from_toml_file(config_path)?,
        None => ReaderConfig::default(),
    };

    let mut builder = ReaderBuilder::from_config(config).path(path);
    if let Some(len) = opts.max_string_len {
        builder = builder.max_string_len(len);
    }
    if let Some(len) = opts.max_catalog_len {
        builder = builder.max_catalog_len(len);
    }
    Ok(builder.build()?)
}
