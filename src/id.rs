use std::{fmt, str, time::SystemTime};

use fstr::FStr;

use crate::timestamp::{system_time_from_ticks, MAX_TICKS};
use crate::ParseError;

/// Represents a Universally Unique IDentifier.
///
/// The value is an immutable 16-byte array in the big-endian field order of RFC 4122. The
/// version and variant bits are only ever written by the constructors of this crate.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Layout family encoded in the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs,
    /// `10x`: the layout specified by RFC 4122.
    Rfc4122,
    /// `110`: reserved for Microsoft backward compatibility.
    Microsoft,
    /// `111`: reserved for future definition.
    Future,
}

const URN_PREFIX: &[u8] = b"urn:uuid:";

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{ParseError, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0x6b; 16])?;
    /// assert_eq!(x.as_bytes(), &[0x6b; 16]);
    /// assert_eq!(Uuid::from_slice(&[0x6b; 15]), Err(ParseError::InvalidLength(15)));
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, ParseError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| ParseError::InvalidLength(src.len()))
    }

    /// Same as [`Uuid::from_slice()`] but returns [`Uuid::NIL`] on error.
    pub fn from_slice_or_nil(src: &[u8]) -> Self {
        Self::from_slice(src).unwrap_or(Self::NIL)
    }

    /// Parses one of the accepted textual representations.
    ///
    /// The following layouts are accepted, with hexadecimal digits in either case:
    ///
    /// ```text
    /// 6ba7b8109dad11d180b400c04fd430c8
    /// 6ba7b810-9dad-11d1-80b4-00c04fd430c8
    /// {6ba7b810-9dad-11d1-80b4-00c04fd430c8}
    /// urn:uuid:6ba7b8109dad11d180b400c04fd430c8
    /// urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Uuid, NAMESPACE_DNS};
    ///
    /// let x = Uuid::parse_str("{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}")?;
    /// assert_eq!(x, NAMESPACE_DNS);
    /// assert!(Uuid::parse_str("6ba7b810+9dad+11d1+80b4+00c04fd430c8").is_err());
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        Self::try_parse_ascii(src.as_bytes())
    }

    /// Same as [`Uuid::parse_str()`] but returns [`Uuid::NIL`] on error.
    pub fn parse_str_or_nil(src: &str) -> Self {
        Self::parse_str(src).unwrap_or(Self::NIL)
    }

    /// Parses one of the accepted textual representations given as bytes of text.
    pub fn try_parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidFormat(String::from_utf8_lossy(src).into_owned());

        let body = match src.len() {
            32 | 36 => src,
            38 => match src {
                [b'{', inner @ .., b'}'] => inner,
                _ => return Err(invalid()),
            },
            41 | 45 => src.strip_prefix(URN_PREFIX).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        decode_hex(body, body.len() == 36)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Parses the 8-4-4-4-12 canonical representation in a constant context.
    ///
    /// Intended for literals; see [`NAMESPACE_DNS`](crate::NAMESPACE_DNS).
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a canonical string. When evaluated in a constant, the panic
    /// becomes a compile error.
    pub const fn from_canonical_str(src: &str) -> Self {
        let src = src.as_bytes();
        if src.len() != 36 {
            panic!("canonical UUID string must be 36 characters long");
        }

        let mut dst = [0u8; 16];
        let (mut i, mut j) = (0, 0);
        while i < 16 {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                if src[j] != b'-' {
                    panic!("misplaced hyphen in canonical UUID string");
                }
                j += 1;
            }
            dst[i] = match (hex_value(src[j]), hex_value(src[j + 1])) {
                (Some(hi), Some(lo)) => (hi << 4) | lo,
                _ => panic!("non-hex digit in canonical UUID string"),
            };
            i += 1;
            j += 2;
        }
        Self(dst)
    }

    /// Returns the 4-bit version field.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the layout variant.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100 | 0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Creates a UUIDv1 from its timestamp (100-ns ticks since 1582-10-15), clock sequence and node
    /// ID.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` exceeds 60 bits or `clock_seq` exceeds 14 bits.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp > MAX_TICKS || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Overwrites the version field and marks the RFC 4122 variant.
    pub(crate) const fn with_version(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | (version << 4);
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Returns the 60-bit timestamp of a UUIDv1, or `None` for other versions.
    pub fn timestamp(&self) -> Option<u64> {
        if self.version() != 1 || self.variant() != Variant::Rfc4122 {
            return None;
        }
        let b = &self.0;
        Some(
            u64::from(b[6] & 0x0f) << 56
                | u64::from(b[7]) << 48
                | u64::from(b[4]) << 40
                | u64::from(b[5]) << 32
                | u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]])),
        )
    }

    /// Returns the creation time embedded in a UUIDv1, or `None` for other versions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::NAMESPACE_DNS;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let t = NAMESPACE_DNS.time().unwrap();
    /// assert_eq!(t, UNIX_EPOCH + Duration::new(886_630_433, 151_182_400));
    /// ```
    pub fn time(&self) -> Option<SystemTime> {
        self.timestamp().map(system_time_from_ticks)
    }

    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation stored in a
    /// stack-allocated string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "urn:uuid:6BA7B8109DAD11D180B400C04FD430C8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[j] = DIGITS[(e >> 4) as usize];
            buffer[j + 1] = DIGITS[(e & 15) as usize];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[j] = b'-';
                j += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer holds ASCII hex digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

/// Decodes 32 hex digits, optionally split into 8-4-4-4-12 groups by hyphens.
fn decode_hex(src: &[u8], hyphenated: bool) -> Option<[u8; 16]> {
    let mut dst = [0u8; 16];
    let mut iter = src.iter().copied();
    for (i, e) in dst.iter_mut().enumerate() {
        let hi = hex_value(iter.next()?)?;
        let lo = hex_value(iter.next()?)?;
        *e = (hi << 4) | lo;
        if hyphenated && (i == 3 || i == 5 || i == 7 || i == 9) && iter.next()? != b'-' {
            return None;
        }
    }
    if iter.next().is_none() {
        Some(dst)
    } else {
        None
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse_str(&src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: [(&str, &[u8; 16]); 3] = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "5df41881-3aed-3515-88a7-2f4a814cf09e",
                    &[
                        93, 244, 24, 129, 58, 237, 53, 21, 136, 167, 47, 74, 129, 76, 240, 158,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Deserializes alternative textual layouts
        #[test]
        fn deserializes_alternative_textual_layouts() {
            let e = Uuid::from_canonical_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8");
            assert_de_tokens(
                &e.readable(),
                &[Token::String("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}")],
            );
            assert_de_tokens(
                &e.readable(),
                &[Token::String("urn:uuid:6ba7b8109dad11d180b400c04fd430c8")],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};
    use crate::ParseError;

    const DNS_BYTES: [u8; 16] = [
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ];

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, [u8; 6]), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;

        &[
            ((0, 0, [0; 6]), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, [0; 6]), "ffffffff-ffff-1fff-8000-000000000000"),
            ((0, MAX_UINT14, [0; 6]), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, [0xff; 6]), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (MAX_UINT60, MAX_UINT14, [0xff; 6]),
                "ffffffff-ffff-1fff-bfff-ffffffffffff",
            ),
            (
                (0x1d1_9dad_6ba7_b810, 0xb4, [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]),
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.timestamp(), Some(fs.0));
            assert_eq!(from_fields.version(), 1);
            assert_eq!(from_fields.variant(), Variant::Rfc4122);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Parses every accepted layout into the same value
    #[test]
    fn parses_every_accepted_layout_into_the_same_value() {
        let expected = Uuid::from(DNS_BYTES);
        let cases = [
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c8",
            "urn:uuid:6ba7b8109dad11d180b400c04fd430c8",
            "6BA7B810-9DAD-11D1-80B4-00C04FD430C8",
            "{6Ba7b810-9DaD-11d1-80B4-00c04Fd430C8}",
        ];

        for e in cases {
            assert_eq!(Uuid::parse_str(e), Ok(expected), "{}", e);
            assert_eq!(Uuid::try_parse_ascii(e.as_bytes()), Ok(expected), "{}", e);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8=",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}f",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c800c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c86ba7b8109dad11d180b400c04fd430c8",
            "urn:uuid:{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "uuid:urn:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "uuid:urn:6ba7b8109dad11d180b400c04fd430c8",
            "URN:UUID:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109-dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad1-1d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d18-0b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b40-0c04fd430c8",
            "6ba7b810+9dad+11d1+80b4+00c04fd430c8",
            "(6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8>",
            "zba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad11d180b400c04fd430c8",
            "6ba7b8109dad-11d180b400c04fd430c8",
            "6ba7b8109dad11d1-80b400c04fd430c8",
            "6ba7b8109dad11d180b4-00c04fd430c8",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            "6ba7b810-9dad-11d1-80b4-00c04fd430-8",
            "+ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4_00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430\u{e9}",
        ];

        for e in cases {
            assert_eq!(
                Uuid::parse_str(e),
                Err(ParseError::InvalidFormat(e.to_owned())),
                "{}",
                e
            );
        }
    }

    /// Returns error to truncated canonical strings
    #[test]
    fn returns_error_to_truncated_canonical_strings() {
        let s = "6ba7b810-9dad-11d1-80b4-00c04fd430c";
        for i in 0..=s.len() {
            assert!(Uuid::parse_str(&s[..i]).is_err(), "{}", &s[..i]);
        }
    }

    /// Falls back to Nil on parse errors when asked
    #[test]
    fn falls_back_to_nil_on_parse_errors_when_asked() {
        assert_eq!(Uuid::parse_str_or_nil(""), Uuid::NIL);
        assert_eq!(Uuid::from_slice_or_nil(&[]), Uuid::NIL);
        assert_eq!(
            Uuid::parse_str_or_nil("6ba7b8109dad11d180b400c04fd430c8"),
            Uuid::from(DNS_BYTES)
        );
        assert_eq!(Uuid::from_slice_or_nil(&DNS_BYTES), Uuid::from(DNS_BYTES));
    }

    /// Accepts exactly 16 bytes as binary representation
    #[test]
    fn accepts_exactly_16_bytes_as_binary_representation() {
        assert_eq!(Uuid::from_slice(&[]), Err(ParseError::InvalidLength(0)));
        assert_eq!(
            Uuid::from_slice(&DNS_BYTES[..15]),
            Err(ParseError::InvalidLength(15))
        );
        assert_eq!(
            Uuid::from_slice(&[0u8; 17]),
            Err(ParseError::InvalidLength(17))
        );

        let e = Uuid::from_slice(&DNS_BYTES).unwrap();
        assert_eq!(e.as_bytes(), &DNS_BYTES);
        assert_eq!(Uuid::from_slice(e.as_bytes()), Ok(e));
    }

    /// Hands out byte copies detached from the original
    #[test]
    fn hands_out_byte_copies_detached_from_the_original() {
        let e = Uuid::from(DNS_BYTES);
        let mut bytes = e.to_bytes();
        bytes[0] = 0;
        assert_eq!(e.as_bytes(), &DNS_BYTES);
        assert_ne!(Uuid::from(bytes), e);
    }

    /// Extracts version and variant bits
    #[test]
    fn extracts_version_and_variant_bits() {
        let with_byte = |index: usize, value: u8| {
            let mut bytes = [0u8; 16];
            bytes[index] = value;
            Uuid::from(bytes)
        };

        assert_eq!(with_byte(6, 0x10).version(), 1);
        assert_eq!(with_byte(6, 0x5f).version(), 5);
        assert_eq!(with_byte(8, 0x00).variant(), Variant::Ncs);
        assert_eq!(with_byte(8, 0x7f).variant(), Variant::Ncs);
        assert_eq!(with_byte(8, 0x80).variant(), Variant::Rfc4122);
        assert_eq!(with_byte(8, 0xbf).variant(), Variant::Rfc4122);
        assert_eq!(with_byte(8, 0xc0).variant(), Variant::Microsoft);
        assert_eq!(with_byte(8, 0xdf).variant(), Variant::Microsoft);
        assert_eq!(with_byte(8, 0xe0).variant(), Variant::Future);
        assert_eq!(with_byte(8, 0xff).variant(), Variant::Future);
    }

    /// Overwrites version and variant bits only
    #[test]
    fn overwrites_version_and_variant_bits_only() {
        let e = Uuid::with_version([0xff; 16], 4);
        assert_eq!(e.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
        let e = Uuid::with_version([0x00; 16], 3);
        assert_eq!(e.to_string(), "00000000-0000-3000-8000-000000000000");
    }

    /// Returns no timestamp for other versions
    #[test]
    fn returns_no_timestamp_for_other_versions() {
        assert_eq!(Uuid::NIL.timestamp(), None);
        assert_eq!(Uuid::with_version([0x12; 16], 4).time(), None);
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::try_from(e.as_bytes() as &[u8]), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            assert_eq!(Uuid::from_canonical_str(&e.encode()), e);
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
