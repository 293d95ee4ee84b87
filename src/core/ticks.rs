// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tick conversions.
//!
//! Simulation files express every time value as a count of 100-nanosecond
//! ticks. Timestamps count from `0001-01-01T00:00:00` on the proleptic
//! Gregorian calendar; durations are plain tick counts.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Ticks per second.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Nanoseconds per tick.
pub const NANOS_PER_TICK: u64 = 100;

/// Ticks in one day.
pub const TICKS_PER_DAY: u64 = 86_400 * TICKS_PER_SECOND;

/// The instant tick zero refers to: `0001-01-01T00:00:00`.
pub fn ticks_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("0001-01-01 is representable")
}

/// Convert a tick count to a duration.
pub fn ticks_to_duration(ticks: u64) -> Duration {
    let secs = ticks / TICKS_PER_SECOND;
    let nanos = (ticks % TICKS_PER_SECOND) * NANOS_PER_TICK;
    Duration::new(secs, nanos as u32)
}

/// Convert a duration to ticks, truncating below 100ns.
///
/// Saturates at `u64::MAX` for durations beyond the tick range.
pub fn duration_to_ticks(duration: Duration) -> u64 {
    let ticks = duration.as_nanos() / NANOS_PER_TICK as u128;
    u64::try_from(ticks).unwrap_or(u64::MAX)
}

/// Convert a tick count to a timestamp.
///
/// Every `u64` tick value lands well inside chrono's range (about year 58000),
/// so this never fails.
pub fn ticks_to_datetime(ticks: u64) -> NaiveDateTime {
    let secs = (ticks / TICKS_PER_SECOND) as i64;
    let nanos = ((ticks % TICKS_PER_SECOND) * NANOS_PER_TICK) as i64;
    ticks_epoch()
        .checked_add_signed(TimeDelta::seconds(secs) + TimeDelta::nanoseconds(nanos))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Convert a timestamp to ticks.
///
/// Returns `None` for instants before the tick epoch or past the tick range.
pub fn datetime_to_ticks(datetime: NaiveDateTime) -> Option<u64> {
    let delta = datetime.signed_duration_since(ticks_epoch());
    let secs = u64::try_from(delta.num_seconds()).ok()?;
    let sub_ticks = u64::from(delta.subsec_nanos().unsigned_abs()) / NANOS_PER_TICK;
    secs.checked_mul(TICKS_PER_SECOND)?.checked_add(sub_ticks)
}
