//! Conversions to and from database column values

use crate::{Error, Uuid};

/// A column value read from or written to a database driver.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Value<'a> {
    /// SQL `NULL`.
    Null,
    /// A binary or text column delivered as raw bytes.
    Bytes(&'a [u8]),
    /// A text column.
    Text(&'a str),
}

impl Value<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
        }
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(src: &'a [u8]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(src: &'a str) -> Self {
        Self::Text(src)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(src: Option<T>) -> Self {
        src.map_or(Self::Null, Into::into)
    }
}

impl Uuid {
    /// Returns the value to store in a database column: the canonical string representation.
    pub fn to_value(&self) -> String {
        self.to_string()
    }

    /// Reads a UUID from a database column value.
    ///
    /// A 16-byte binary value is taken as the raw representation; any other byte string is parsed
    /// as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value is malformed, and [`Error::IncompatibleValue`] for
    /// `NULL`. Use [`NullUuid`] for nullable columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{sql::Value, Uuid};
    ///
    /// let e = Uuid::scan(Value::Text("6ba7b810-9dad-11d1-80b4-00c04fd430c8"))?;
    /// assert_eq!(Uuid::scan(Value::Bytes(e.as_bytes()))?, e);
    /// assert_eq!(Uuid::scan(Value::Bytes(e.to_value().as_bytes()))?, e);
    /// assert!(Uuid::scan(Value::Null).is_err());
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn scan(src: Value<'_>) -> Result<Self, Error> {
        match src {
            Value::Bytes(bytes) if bytes.len() == 16 => Ok(Self::from_slice(bytes)?),
            Value::Bytes(bytes) => Ok(Self::try_parse_ascii(bytes)?),
            Value::Text(text) => Ok(Self::parse_str(text)?),
            Value::Null => Err(Error::IncompatibleValue(src.kind())),
        }
    }
}

/// A UUID that may be `NULL` in the database.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NullUuid {
    /// The UUID; `NIL` when not valid.
    pub uuid: Uuid,
    /// `true` if `uuid` holds a value, `false` for `NULL`.
    pub valid: bool,
}

impl NullUuid {
    /// Returns the value to store in a database column: the canonical string, or `None` for
    /// `NULL`.
    pub fn value(&self) -> Option<String> {
        self.valid.then(|| self.uuid.to_value())
    }

    /// Reads a nullable UUID from a database column value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a non-null value is malformed.
    pub fn scan(src: Value<'_>) -> Result<Self, Error> {
        match src {
            Value::Null => Ok(Self::default()),
            _ => Uuid::scan(src).map(Self::from),
        }
    }
}

impl From<Uuid> for NullUuid {
    fn from(src: Uuid) -> Self {
        Self {
            uuid: src,
            valid: true,
        }
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(src: Option<Uuid>) -> Self {
        src.map_or_else(Self::default, Self::from)
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(src: NullUuid) -> Self {
        src.valid.then_some(src.uuid)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::NullUuid;
    use crate::Uuid;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for NullUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Option::<Uuid>::from(*self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for NullUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Option::<Uuid>::deserialize(deserializer).map(Self::from)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::NullUuid;
        use crate::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes as optional UUID
        #[test]
        fn serializes_as_optional_uuid() {
            let e = NullUuid::from(Uuid::from_canonical_str(
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ));
            assert_tokens(
                &e.readable(),
                &[
                    Token::Some,
                    Token::String("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
                ],
            );
            assert_tokens(&NullUuid::default().readable(), &[Token::None]);
        }
    }
}
