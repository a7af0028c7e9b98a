//! Error types

use thiserror::Error;

/// Error parsing an invalid textual or binary representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ParseError {
    /// The text matches none of the accepted layouts. Carries the offending input.
    #[error("incorrect UUID format {0:?}")]
    InvalidFormat(String),

    /// The binary input is not exactly 16 bytes long. Carries the actual length.
    #[error("UUID must be exactly 16 bytes long, got {0} bytes")]
    InvalidLength(usize),
}

/// Error returned by generators and storage conversions.
#[derive(Debug, Error)]
pub enum Error {
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The DCE Security domain is neither person nor group.
    #[error("unsupported DCE Security domain {0}")]
    UnsupportedDomain(u8),

    /// The DCE Security domain name is none of `person`, `group` or `org`.
    #[error("unknown DCE Security domain {0:?}")]
    UnknownDomain(String),

    /// The secure random source could not supply bytes.
    #[error("random source failed")]
    RandomSource(#[source] rand::Error),

    /// A storage value of this kind cannot be converted to a UUID.
    #[error("cannot convert {0} to UUID")]
    IncompatibleValue(&'static str),
}
