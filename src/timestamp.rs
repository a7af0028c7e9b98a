//! Conversions between wall-clock time and 100-nanosecond ticks since the Gregorian reform
//! (1582-10-15 00:00:00 UTC), the epoch of time-based UUIDs.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Number of 100-ns ticks between the UUID epoch and the Unix epoch.
pub(crate) const UNIX_EPOCH_TICKS: u64 = 122_192_928_000_000_000;

/// Largest timestamp that fits in the 60-bit field.
pub(crate) const MAX_TICKS: u64 = (1 << 60) - 1;

const TICKS_PER_SEC: u64 = 10_000_000;

/// Converts a wall-clock time into ticks since the UUID epoch, saturating at both ends of the
/// 60-bit range.
pub(crate) fn ticks_from_system_time(time: SystemTime) -> u64 {
    let ticks = match time.duration_since(UNIX_EPOCH) {
        Ok(since) => UNIX_EPOCH_TICKS.saturating_add(duration_to_ticks(since)),
        Err(before) => UNIX_EPOCH_TICKS.saturating_sub(duration_to_ticks(before.duration())),
    };
    ticks.min(MAX_TICKS)
}

/// Converts ticks since the UUID epoch back into a wall-clock time.
pub(crate) fn system_time_from_ticks(ticks: u64) -> SystemTime {
    if ticks >= UNIX_EPOCH_TICKS {
        UNIX_EPOCH + ticks_to_duration(ticks - UNIX_EPOCH_TICKS)
    } else {
        UNIX_EPOCH - ticks_to_duration(UNIX_EPOCH_TICKS - ticks)
    }
}

fn duration_to_ticks(d: Duration) -> u64 {
    d.as_secs()
        .saturating_mul(TICKS_PER_SEC)
        .saturating_add(u64::from(d.subsec_nanos() / 100))
}

fn ticks_to_duration(ticks: u64) -> Duration {
    Duration::new(
        ticks / TICKS_PER_SEC,
        (ticks % TICKS_PER_SEC) as u32 * 100,
    )
}
