//! Time-sortable COMB identifiers

use std::{fmt, time::SystemTime};

use crate::timestamp::{system_time_from_ticks, MAX_TICKS};
use crate::Uuid;

/// Represents a COMB identifier: a UUID whose embedded timestamp is stored most significant part
/// first so that the byte order follows the creation time.
///
/// # Field and bit layout
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  ver  |        time_high      |            time_mid           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            time_low                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |var|                         tail                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                             tail                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15. The tail holds the clock
/// sequence and node ID for version 1, or random bits for version 4.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct CombUuid(Uuid);

impl CombUuid {
    /// Assembles an identifier from its timestamp, version and the 8 tail bytes, marking the
    /// RFC 4122 variant in the first tail byte.
    pub(crate) const fn from_parts(timestamp: u64, version: u8, tail: [u8; 8]) -> Self {
        debug_assert!(timestamp <= MAX_TICKS);
        Self(Uuid::from_bytes([
            (version << 4) | ((timestamp >> 56) as u8 & 0x0f),
            (timestamp >> 48) as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            0x80 | (tail[0] & 0x3f),
            tail[1],
            tail[2],
            tail[3],
            tail[4],
            tail[5],
            tail[6],
            tail[7],
        ]))
    }

    /// Returns the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Returns the version stored in the high nibble of byte 0.
    pub const fn version(&self) -> u8 {
        self.0.as_bytes()[0] >> 4
    }

    /// Returns the embedded timestamp in 100-ns ticks since 1582-10-15.
    pub fn timestamp(&self) -> u64 {
        let b = self.0.as_bytes();
        u64::from(b[0] & 0x0f) << 56
            | u64::from(b[1]) << 48
            | u64::from(u16::from_be_bytes([b[2], b[3]])) << 32
            | u64::from(u32::from_be_bytes([b[4], b[5], b[6], b[7]]))
    }

    /// Returns the approximate creation time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::OsRng;
    /// use rfc4122::generator::{with_rand08::Adapter, Generator, RandomNode};
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let t = UNIX_EPOCH + Duration::from_secs(1_234_567_890);
    /// let g = Generator::with_sources(Adapter(OsRng), move || t, RandomNode);
    /// assert_eq!(g.generate_comb_v4()?.time(), t);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn time(&self) -> SystemTime {
        system_time_from_ticks(self.timestamp())
    }
}

impl fmt::Display for CombUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CombUuid {
    fn from(src: Uuid) -> Self {
        Self(src)
    }
}

impl From<CombUuid> for Uuid {
    fn from(src: CombUuid) -> Self {
        src.0
    }
}

impl AsRef<[u8]> for CombUuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
