//! IPv4 CIDR helpers used by the network constraints.
//!
//! Containment is deliberately approximate: it compares whole octets covered
//! by the outer prefix instead of doing bitwise subnet arithmetic. A /20
//! network therefore "contains" anything sharing its first two octets.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A parsed `a.b.c.d/prefix` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    address: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    /// Parse CIDR notation; `None` when the address or prefix is malformed
    pub fn parse(cidr: &str) -> Option<Self> {
        let (addr, prefix) = cidr.trim().split_once('/')?;
        let address = Ipv4Addr::from_str(addr).ok()?;
        let prefix = prefix.parse::<u8>().ok().filter(|p| *p <= 32)?;
        Some(Self { address, prefix })
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn octets(&self) -> [u8; 4] {
        self.address.octets()
    }

    /// Octet-prefix containment check
    ///
    /// `other` is inside `self` when its prefix is at least as long and the
    /// first `self.prefix / 8` octets match.
    pub fn contains(&self, other: &Cidr) -> bool {
        if other.prefix < self.prefix {
            return false;
        }
        let whole_octets = usize::from(self.prefix / 8);
        self.octets()[..whole_octets] == other.octets()[..whole_octets]
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

/// Whether `cidr` is syntactically valid IPv4 CIDR notation
pub fn is_valid_cidr(cidr: &str) -> bool {
    Cidr::parse(cidr).is_some()
}

/// Prefix length of `cidr`, if it parses
pub fn prefix_length(cidr: &str) -> Option<u8> {
    Cidr::parse(cidr).map(|c| c.prefix())
}
