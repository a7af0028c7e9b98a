//! Stateful generator of time-based and random UUIDs.

use std::str;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use log::debug;
use once_cell::sync::OnceCell;

use crate::timestamp::ticks_from_system_time;
use crate::{CombUuid, Error, Uuid};

pub mod with_rand08;

mod system;
pub use system::{LocalIds, SystemInterfaces};


/// A trait that defines the secure random number generator interface for [`Generator`].
pub trait RandSource {
    /// Fills `dest` with cryptographically strong random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// A trait that defines the wall clock interface for [`Generator`].
///
/// Any `Fn() -> SystemTime` closure is a time source, which lets tests freeze time.
pub trait TimeSource {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// The default [`TimeSource`] that reads [`SystemTime::now()`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

impl<F: Fn() -> SystemTime> TimeSource for F {
    fn now(&self) -> SystemTime {
        self()
    }
}

/// A trait that defines the network interface enumerator for [`Generator`].
pub trait NodeSource {
    /// Returns a 6-byte hardware address to use as the node ID, or `None` to fall back to a
    /// random node ID.
    fn hardware_addr(&self) -> Option<[u8; 6]>;
}

impl<F: Fn() -> Option<[u8; 6]>> NodeSource for F {
    fn hardware_addr(&self) -> Option<[u8; 6]> {
        self()
    }
}

/// A [`NodeSource`] that never reports a hardware address, so the node ID is always random.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct RandomNode;

impl NodeSource for RandomNode {
    fn hardware_addr(&self) -> Option<[u8; 6]> {
        None
    }
}

/// DCE Security domain of a UUIDv2.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Domain {
    /// POSIX user ID.
    Person = 0,
    /// POSIX group ID.
    Group = 1,
    /// Organization; defined by DCE but not supported by this generator.
    Org = 2,
}

impl TryFrom<u8> for Domain {
    type Error = Error;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            0 => Ok(Self::Person),
            1 => Ok(Self::Group),
            2 => Ok(Self::Org),
            _ => Err(Error::UnsupportedDomain(src)),
        }
    }
}

impl str::FromStr for Domain {
    type Err = Error;

    /// Parses `person`, `group` or `org`, ignoring ASCII case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.to_ascii_lowercase().as_str() {
            "person" => Ok(Self::Person),
            "group" => Ok(Self::Group),
            "org" => Ok(Self::Org),
            _ => Err(Error::UnknownDomain(src.to_owned())),
        }
    }
}

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

#[derive(Debug)]
struct ClockState {
    last_timestamp: u64,
    clock_seq: u16,
}

/// Represents a generator of RFC 4122 UUIDs that owns the clock sequence, last timestamp and node
/// ID shared by version 1, version 2 and COMB identifiers.
///
/// The generator is `Sync`; a single instance can be shared by any number of threads. The clock
/// sequence and node ID are initialized on first use, exactly once. After that, a lock is held
/// only while the timestamp is compared with the previous one and the clock sequence is bumped,
/// which happens whenever the clock did not move forward since the previous call.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::Generator;
/// use std::thread;
///
/// let g = Generator::with_rand08(OsRng);
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate_v1().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// Injecting a frozen clock and a fixed node ID:
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::generator::{with_rand08::Adapter, Generator};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let t = UNIX_EPOCH + Duration::from_secs(1_600_000_000);
/// let node = || -> Option<[u8; 6]> { Some([0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]) };
/// let g = Generator::with_sources(Adapter(OsRng), move || t, node);
///
/// let (a, b) = (g.generate_v1()?, g.generate_v1()?);
/// assert_ne!(a, b);
/// assert_eq!(a.time(), Some(t));
/// assert_eq!(&b.as_bytes()[10..], &[0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Generator<R, T = StdSystemTime, N = SystemInterfaces> {
    /// The random number generator used by the generator.
    rng: Mutex<R>,

    time_source: T,
    node_source: N,
    local_ids: LocalIds,

    node_id: OnceCell<[u8; 6]>,
    clock: OnceCell<Mutex<ClockState>>,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator that reads the system clock and the first network interface.
    pub fn new(rng: R) -> Self {
        Self::with_sources(rng, StdSystemTime, SystemInterfaces)
    }
}

impl<R: RandSource, T: TimeSource, N: NodeSource> Generator<R, T, N> {
    /// Creates a generator with the specified random number generator, clock, and network
    /// interface enumerator.
    pub fn with_sources(rng: R, time_source: T, node_source: N) -> Self {
        Self {
            rng: Mutex::new(rng),
            time_source,
            node_source,
            local_ids: LocalIds::current(),
            node_id: OnceCell::new(),
            clock: OnceCell::new(),
        }
    }

    /// Replaces the POSIX user and group IDs embedded in UUIDv2.
    pub fn with_local_ids(mut self, local_ids: LocalIds) -> Self {
        self.local_ids = local_ids;
        self
    }

    /// Generates a new UUIDv1 object from the current timestamp, the clock sequence, and the node
    /// ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the random number generator fails while the clock
    /// sequence or the node ID is being initialized.
    pub fn generate_v1(&self) -> Result<Uuid, Error> {
        let node = self.node_id()?;
        let (timestamp, clock_seq) = self.next_clock()?;
        Ok(Uuid::from_fields_v1(timestamp, clock_seq, node))
    }

    /// Generates a new UUIDv2 (DCE Security) object.
    ///
    /// The leading 32 bits of the timestamp are replaced by the POSIX user or group ID, and the
    /// low byte of the clock sequence by the domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDomain`] for [`Domain::Org`], and the same errors as
    /// [`Generator::generate_v1()`] otherwise.
    pub fn generate_v2(&self, domain: Domain) -> Result<Uuid, Error> {
        let local_id = match domain {
            Domain::Person => self.local_ids.uid,
            Domain::Group => self.local_ids.gid,
            Domain::Org => return Err(Error::UnsupportedDomain(domain as u8)),
        };

        let mut bytes = self.generate_v1()?.to_bytes();
        bytes[..4].copy_from_slice(&local_id.to_be_bytes());
        bytes[9] = domain as u8;
        Ok(Uuid::with_version(bytes, 2))
    }

    /// Generates a new UUIDv4 object from the random number generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the random number generator fails.
    pub fn generate_v4(&self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.fill_random(&mut bytes)?;
        Ok(Uuid::with_version(bytes, 4))
    }

    /// Generates a new version 1 COMB object that shares the clock sequence and node ID with
    /// UUIDv1.
    pub fn generate_comb_v1(&self) -> Result<CombUuid, Error> {
        let node = self.node_id()?;
        let (timestamp, clock_seq) = self.next_clock()?;
        let [seq_hi, seq_lo] = clock_seq.to_be_bytes();
        Ok(CombUuid::from_parts(
            timestamp,
            1,
            [
                seq_hi, seq_lo, node[0], node[1], node[2], node[3], node[4], node[5],
            ],
        ))
    }

    /// Generates a new version 4 COMB object: the current timestamp followed by random bits.
    pub fn generate_comb_v4(&self) -> Result<CombUuid, Error> {
        let mut tail = [0u8; 8];
        self.fill_random(&mut tail)?;
        let timestamp = ticks_from_system_time(self.time_source.now());
        Ok(CombUuid::from_parts(timestamp, 4, tail))
    }

    /// Returns the node ID, initializing it on first call.
    ///
    /// The node ID is the hardware address reported by the node source or, if there is none, a
    /// random value with the multicast bit set so it cannot be mistaken for a real address.
    pub fn node_id(&self) -> Result<[u8; 6], Error> {
        self.node_id
            .get_or_try_init(|| {
                if let Some(addr) = self.node_source.hardware_addr() {
                    debug!("node id taken from hardware address");
                    return Ok(addr);
                }

                let mut node = [0u8; 6];
                self.fill_random(&mut node)?;
                node[0] |= 0x01;
                debug!("node id randomized");
                Ok::<_, Error>(node)
            })
            .copied()
    }

    /// Reads the clock and returns the timestamp with the clock sequence to pair it with, bumping
    /// the clock sequence if the timestamp is not greater than the previous one.
    fn next_clock(&self) -> Result<(u64, u16), Error> {
        let clock = self.clock.get_or_try_init(|| {
            let mut seed = [0u8; 2];
            self.fill_random(&mut seed)?;
            let clock_seq = u16::from_be_bytes(seed) & MAX_CLOCK_SEQ;
            debug!("clock sequence seeded with {:#06x}", clock_seq);
            Ok::<_, Error>(Mutex::new(ClockState {
                last_timestamp: 0,
                clock_seq,
            }))
        })?;

        let mut state = clock.lock().unwrap_or_else(PoisonError::into_inner);
        let timestamp = ticks_from_system_time(self.time_source.now());
        if timestamp <= state.last_timestamp {
            state.clock_seq = (state.clock_seq + 1) & MAX_CLOCK_SEQ;
        }
        state.last_timestamp = timestamp;
        Ok((timestamp, state.clock_seq))
    }

    fn fill_random(&self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .try_fill_bytes(dest)
            .map_err(Error::RandomSource)
    }
}
