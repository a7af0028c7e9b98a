//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use once_cell::sync::OnceCell;

use crate::generator::{Domain, Generator};
use crate::{CombUuid, Error, Uuid};
use inner::GlobalGenRng;

/// Returns the process-wide global generator, creating one if none exists.
fn global_gen() -> Result<&'static Generator<GlobalGenRng>, Error> {
    static G: OnceCell<Generator<GlobalGenRng>> = OnceCell::new();
    G.get_or_try_init(|| {
        let rng = GlobalGenRng::new().map_err(Error::RandomSource)?;
        Ok(Generator::new(rng))
    })
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator whose clock sequence and node ID are shared by all
/// threads of the process.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1()?;
/// println!("{}", uuid); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// assert_eq!(uuid.version(), 1);
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    global_gen()?.generate_v1()
}

/// Generates a UUIDv2 (DCE Security) object for the current user or group.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid2, Domain};
///
/// let uuid = uuid2(Domain::Person)?;
/// assert_eq!(uuid.version(), 2);
/// assert!(uuid2(Domain::Org).is_err());
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid2(domain: Domain) -> Result<Uuid, Error> {
    global_gen()?.generate_v2(domain)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    global_gen()?.generate_v4()
}

/// Generates a version 1 COMB object.
pub fn comb1() -> Result<CombUuid, Error> {
    global_gen()?.generate_comb_v1()
}

/// Generates a version 4 COMB object.
///
/// # Examples
///
/// ```rust
/// let comb = rfc4122::comb4()?;
/// println!("{} created at {:?}", comb, comb.time());
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn comb4() -> Result<CombUuid, Error> {
    global_gen()?.generate_comb_v4()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Core;

    use crate::generator::RandSource;

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`], drawing random bytes ahead in
    /// blocks.
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        pub fn new() -> Result<Self, rand::Error> {
            let core = ChaCha12Core::from_rng(OsRng)?;
            Ok(Self(ReseedingRng::new(core, 1024 * 64, OsRng)))
        }
    }

    impl RandSource for GlobalGenRng {
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }
}
