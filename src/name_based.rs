//! Name-based UUIDs (versions 3 and 5) and the well-known namespace IDs

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::Uuid;

/// Namespace ID for fully-qualified domain names.
pub const NAMESPACE_DNS: Uuid = Uuid::from_canonical_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

/// Namespace ID for URLs.
pub const NAMESPACE_URL: Uuid = Uuid::from_canonical_str("6ba7b811-9dad-11d1-80b4-00c04fd430c8");

/// Namespace ID for ISO OIDs.
pub const NAMESPACE_OID: Uuid = Uuid::from_canonical_str("6ba7b812-9dad-11d1-80b4-00c04fd430c8");

/// Namespace ID for X.500 DNs in DER or a text output format.
pub const NAMESPACE_X500: Uuid = Uuid::from_canonical_str("6ba7b814-9dad-11d1-80b4-00c04fd430c8");

/// Digest algorithm of a name-based UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, producing UUIDv3.
    Md5,
    /// SHA-1, producing UUIDv5.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the version number stamped on UUIDs derived with this algorithm.
    pub const fn version(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }
}

/// Derives a UUID from a namespace ID and a name.
///
/// The namespace bytes followed by the UTF-8 bytes of `name` are hashed with `algorithm`; the
/// first 16 bytes of the digest are kept and the version and variant fields are overwritten.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{derive_from_namespace, HashAlgorithm, NAMESPACE_DNS};
///
/// let uuid = derive_from_namespace(HashAlgorithm::Md5, &NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
pub fn derive_from_namespace(algorithm: HashAlgorithm, namespace: &Uuid, name: &str) -> Uuid {
    derive_from_namespace_bytes(algorithm, namespace, name.as_bytes())
}

/// Same as [`derive_from_namespace()`] but takes the name as raw bytes.
pub fn derive_from_namespace_bytes(
    algorithm: HashAlgorithm,
    namespace: &Uuid,
    name: &[u8],
) -> Uuid {
    let bytes = match algorithm {
        HashAlgorithm::Md5 => digest_prefix::<Md5>(namespace, name),
        HashAlgorithm::Sha1 => digest_prefix::<Sha1>(namespace, name),
    };
    Uuid::with_version(bytes, algorithm.version())
}

/// Returns the first 16 bytes of the digest of the namespace followed by the name.
fn digest_prefix<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

/// Generates a UUIDv3 object from the MD5 hash of a namespace ID and a name.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid3(&rfc4122::NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(namespace: &Uuid, name: &str) -> Uuid {
    derive_from_namespace(HashAlgorithm::Md5, namespace, name)
}

/// Generates a UUIDv5 object from the SHA-1 hash of a namespace ID and a name.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid5(&rfc4122::NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn uuid5(namespace: &Uuid, name: &str) -> Uuid {
    derive_from_namespace(HashAlgorithm::Sha1, namespace, name)
}

impl Uuid {
    /// Same as [`uuid3()`].
    pub fn new_v3(namespace: &Uuid, name: &str) -> Self {
        uuid3(namespace, name)
    }

    /// Same as [`uuid5()`].
    pub fn new_v5(namespace: &Uuid, name: &str) -> Self {
        uuid5(namespace, name)
    }
}
