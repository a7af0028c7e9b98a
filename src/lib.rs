//! RFC 4122 Universally Unique IDentifiers
//!
//! ```rust
//! use rfc4122::{uuid1, uuid4, uuid5, NAMESPACE_DNS};
//!
//! let uuid = uuid1()?;
//! println!("{}", uuid); // e.g. "c232ab00-9414-11ec-b3c8-9f6bdeced846"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let uuid = uuid5(&NAMESPACE_DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Version 1 identifiers have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp split into `time_low`, `time_mid` and `time_high` counts
//!   100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field is randomly initialized once per generator and
//!   incremented whenever the timestamp does not move forward from the previous
//!   one, so that clock rollbacks and coarse clocks do not produce duplicates.
//! - The 48-bit `node` field holds the hardware address of a network interface,
//!   or a random value with the multicast bit set if no interface has one.
//!
//! Version 2 replaces `time_low` with a POSIX user or group ID and the low byte of
//! `clock_seq` with the domain. Versions 3 and 5 are derived from a namespace and
//! a name, and version 4 is random.
//!
//! # Other features
//!
//! This library also supports the generation of COMB identifiers, which store
//! the version 1 timestamp most significant part first so that byte order follows
//! creation time:
//!
//! ```rust
//! let comb = rfc4122::comb4()?;
//! println!("{} created at {:?}", comb, comb.time());
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generator behind [`uuid1()`],
//!   [`uuid4()`] and the other entry point functions.
//!
//! Optional features:
//!
//! - `serde` enables serialization/deserialization of [`Uuid`] and
//!   [`NullUuid`](sql::NullUuid).
//! - `uuid` enables conversion from/to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

mod error;
pub use error::{Error, ParseError};

mod timestamp;

mod name_based;
pub use name_based::{
    derive_from_namespace, derive_from_namespace_bytes, uuid3, uuid5, HashAlgorithm,
    NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500,
};

mod comb;
pub use comb::CombUuid;

pub mod generator;
pub use generator::{Domain, Generator, LocalIds};

pub mod sql;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{comb1, comb4, uuid1, uuid2, uuid4};
