//! Node ID and POSIX identity sources backed by the host system.

use log::debug;
use sysinfo::Networks;

use super::NodeSource;

/// The default [`NodeSource`] that reports the hardware address of a network interface.
///
/// Interfaces without an address, such as loopback, are skipped. Universally administered
/// addresses win over locally administered ones (bit `0x02` of the first byte), which keeps
/// virtual bridges like `docker0` from shadowing the physical adapter. Ties are broken by
/// interface name, so the choice is deterministic rather than the enumeration order of the OS.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemInterfaces;

impl NodeSource for SystemInterfaces {
    fn hardware_addr(&self) -> Option<[u8; 6]> {
        let networks = Networks::new_with_refreshed_list();
        let picked = pick_hardware_addr(
            networks
                .iter()
                .map(|(name, data)| (name.as_str(), data.mac_address().0)),
        );

        match picked {
            Some((name, addr)) => {
                debug!("using hardware address of interface {}", name);
                Some(addr)
            }
            None => {
                debug!("no network interface with a hardware address");
                None
            }
        }
    }
}

/// Picks the preferred `(interface name, address)` pair.
fn pick_hardware_addr<'a>(
    interfaces: impl IntoIterator<Item = (&'a str, [u8; 6])>,
) -> Option<(&'a str, [u8; 6])> {
    interfaces
        .into_iter()
        .filter(|(_, addr)| *addr != [0; 6])
        .min_by_key(|&(name, addr)| (addr[0] & 0x02 != 0, name))
}

/// POSIX user and group IDs embedded in UUIDv2.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct LocalIds {
    /// User ID, used for [`Domain::Person`](super::Domain::Person).
    pub uid: u32,
    /// Group ID, used for [`Domain::Group`](super::Domain::Group).
    pub gid: u32,
}

impl LocalIds {
    /// Returns the real user and group IDs of the current process.
    #[cfg(unix)]
    pub fn current() -> Self {
        Self {
            // SAFETY: getuid and getgid take no arguments and always succeed
            uid: unsafe { libc::getuid() },
            // SAFETY: as above
            gid: unsafe { libc::getgid() },
        }
    }

    /// Returns zeros on platforms without POSIX user and group IDs.
    #[cfg(not(unix))]
    pub fn current() -> Self {
        Self { uid: 0, gid: 0 }
    }
}

impl Default for LocalIds {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::{pick_hardware_addr, LocalIds, SystemInterfaces};
    use crate::generator::NodeSource;

    /// Prefers universally administered addresses over virtual bridges
    #[test]
    fn prefers_universally_administered_addresses_over_virtual_bridges() {
        let eth0 = [0x00, 0x16, 0x3e, 0x5a, 0x01, 0x02];
        let enp3s0 = [0x3c, 0x7c, 0x3f, 0x00, 0x00, 0x01];
        let docker0 = [0x02, 0x42, 0xac, 0x11, 0x00, 0x01];
        let br = [0x02, 0x42, 0x0a, 0x00, 0x00, 0x02];

        let interfaces = [
            ("lo", [0; 6]),
            ("br-1a2b3c", br),
            ("docker0", docker0),
            ("eth0", eth0),
            ("enp3s0", enp3s0),
        ];
        assert_eq!(pick_hardware_addr(interfaces), Some(("enp3s0", enp3s0)));
        assert_eq!(
            pick_hardware_addr(interfaces.into_iter().rev()),
            Some(("enp3s0", enp3s0))
        );

        assert_eq!(
            pick_hardware_addr([("lo", [0; 6]), ("eth0", eth0), ("docker0", docker0)]),
            Some(("eth0", eth0))
        );
        assert_eq!(
            pick_hardware_addr([("docker0", docker0), ("br-1a2b3c", br)]),
            Some(("br-1a2b3c", br))
        );
        assert_eq!(pick_hardware_addr([("lo", [0; 6])]), None);
    }

    /// Reports a stable non-zero address if any
    #[test]
    fn reports_a_stable_non_zero_address_if_any() {
        let first = SystemInterfaces.hardware_addr();
        if let Some(addr) = first {
            assert_ne!(addr, [0; 6]);
        }
        assert_eq!(SystemInterfaces.hardware_addr(), first);
    }

    /// Defaults to current process identity
    #[test]
    fn defaults_to_current_process_identity() {
        assert_eq!(LocalIds::default(), LocalIds::current());
    }
}
