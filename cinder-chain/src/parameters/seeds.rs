//! Hard-coded seed peer endpoints.
//!
//! Each Cinder network ships a fixed list of last-resort peer endpoints.
//! They only seed the address book when no better source is available, so
//! the lists are short and updated rarely.
//!
//! Every address is stored as 16 bytes: IPv4 endpoints use the IPv4-mapped
//! IPv6 form, and onion endpoints use the OnionCat embedding.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// A hard-coded seed peer endpoint: a 16-byte address and a port.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SeedSpec {
    addr: [u8; 16],
    port: u16,
}

impl SeedSpec {
    /// Creates a new seed peer endpoint.
    pub const fn new(addr: [u8; 16], port: u16) -> SeedSpec {
        SeedSpec { addr, port }
    }

    /// Returns the port of this endpoint.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns this endpoint as a socket address.
    ///
    /// IPv4-mapped addresses canonicalize to IPv4 socket addresses. All
    /// other addresses, including OnionCat-embedded onion endpoints, stay
    /// IPv6.
    pub fn socket_addr(&self) -> SocketAddr {
        let addr_v6 = Ipv6Addr::from(self.addr);
        let addr = match addr_v6.to_ipv4_mapped() {
            Some(addr_v4) => IpAddr::V4(addr_v4),
            None => IpAddr::V6(addr_v6),
        };

        SocketAddr::new(addr, self.port)
    }
}

impl From<&SeedSpec> for SocketAddr {
    fn from(seed: &SeedSpec) -> SocketAddr {
        seed.socket_addr()
    }
}

/// Hard-coded seed peer endpoints for Mainnet.
pub(crate) static MAINNET_SEED_PEERS: [SeedSpec; 8] = [
    // 51.195.62.21
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x33, 0xc3, 0x3e, 0x15],
        8533,
    ),
    // 142.132.167.88
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x8e, 0x84, 0xa7, 0x58],
        8533,
    ),
    // 65.108.233.45
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x41, 0x6c, 0xe9, 0x2d],
        8533,
    ),
    // 149.102.152.206
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x95, 0x66, 0x98, 0xce],
        8533,
    ),
    // 95.217.110.184
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x5f, 0xd9, 0x6e, 0xb8],
        8533,
    ),
    // 172.105.46.9
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0xac, 0x69, 0x2e, 0x09],
        8533,
    ),
    // OnionCat endpoints
    SeedSpec::new(
        [
            0xfd, 0x87, 0xd8, 0x7e, 0xeb, 0x43, 0x2c, 0xa1, 0x59, 0x0b, 0x3e, 0x8d, 0x12, 0x6f,
            0x77, 0x4a,
        ],
        8533,
    ),
    SeedSpec::new(
        [
            0xfd, 0x87, 0xd8, 0x7e, 0xeb, 0x43, 0x81, 0x5e, 0xc0, 0x24, 0x9d, 0x31, 0x64, 0x2b,
            0x05, 0xd6,
        ],
        8533,
    ),
];

/// Hard-coded seed peer endpoints for Testnet.
pub(crate) static TESTNET_SEED_PEERS: [SeedSpec; 4] = [
    // 135.181.76.16
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x87, 0xb5, 0x4c, 0x10],
        18533,
    ),
    // 51.81.185.7
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x33, 0x51, 0xb9, 0x07],
        18533,
    ),
    // 94.130.220.37
    SeedSpec::new(
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x5e, 0x82, 0xdc, 0x25],
        18533,
    ),
    // OnionCat endpoint
    SeedSpec::new(
        [
            0xfd, 0x87, 0xd8, 0x7e, 0xeb, 0x43, 0xf2, 0x6a, 0x48, 0xd1, 0x07, 0xb5, 0xee, 0x93,
            0xa8, 0x42,
        ],
        18533,
    ),
];
