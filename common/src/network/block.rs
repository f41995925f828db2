//! # CIDR Block Model
//!
//! An aligned IPv4 network: a base address plus a prefix length.
//!
//! Two notions of "hosts" live here and they differ only for tiny blocks:
//! * [`NetworkBlock::usable_hosts`] follows the traditional subnet convention,
//!   where network and broadcast addresses are excluded and anything under
//!   four addresses has no usable hosts. Expansion decisions use this.
//! * [`NetworkBlock::covered_hosts`] is what a rendered block actually admits:
//!   a `/32` admits itself, a `/31` admits both of its addresses, and larger
//!   blocks admit their usable hosts. Coverage statistics use this.

use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::NetfoldError;
use crate::network::range::Ipv4Range;

/// An aligned IPv4 block, ordered by `(base, prefix)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NetworkBlock {
    net: Ipv4Network,
}

impl NetworkBlock {
    /// Builds a block, rejecting prefixes above 32 and unaligned bases.
    pub fn new(base: Ipv4Addr, prefix: u8) -> Result<Self, NetfoldError> {
        let net = Ipv4Network::new(base, prefix).map_err(|_| NetfoldError::InvalidPrefix(prefix))?;
        if net.network() != base {
            return Err(NetfoldError::Misaligned { base, prefix });
        }
        Ok(Self { net })
    }

    /// The `/32` block holding a single host.
    pub fn host(addr: Ipv4Addr) -> Self {
        Self {
            net: Ipv4Network::from(addr),
        }
    }

    pub fn base(&self) -> Ipv4Addr {
        self.net.network()
    }

    pub fn prefix(&self) -> u8 {
        self.net.prefix()
    }

    pub fn is_host(&self) -> bool {
        self.prefix() == 32
    }

    pub fn netmask(&self) -> Ipv4Addr {
        self.net.mask()
    }

    pub fn first(&self) -> u32 {
        u32::from(self.net.network())
    }

    pub fn last(&self) -> u32 {
        u32::from(self.net.broadcast())
    }

    /// Every address in the block, network and broadcast included.
    pub fn span(&self) -> Ipv4Range {
        Ipv4Range::new(self.net.network(), self.net.broadcast())
    }

    /// Usable host addresses under the traditional convention.
    ///
    /// `None` for blocks with fewer than four addresses.
    pub fn usable_hosts(&self) -> Option<Ipv4Range> {
        if self.prefix() > 30 {
            return None;
        }
        Some(Ipv4Range::from_u32(self.first() + 1, self.last() - 1))
    }

    pub fn usable_host_count(&self) -> u64 {
        self.usable_hosts().map_or(0, |hosts| hosts.len())
    }

    /// Addresses a rendered block admits.
    pub fn covered_hosts(&self) -> Ipv4Range {
        match self.usable_hosts() {
            Some(hosts) => hosts,
            None => self.span(),
        }
    }

    /// The enclosing block one prefix bit shorter, `None` for `/0`.
    pub fn parent(&self) -> Option<Self> {
        let prefix = self.prefix().checked_sub(1)?;
        let wide = Ipv4Network::new(self.base(), prefix).ok()?;
        let net = Ipv4Network::new(wide.network(), prefix).ok()?;
        Some(Self { net })
    }

    /// The other half of this block's parent, `None` for `/0`.
    pub fn buddy(&self) -> Option<Self> {
        let prefix = self.prefix();
        if prefix == 0 {
            return None;
        }
        let bit = 1u32 << (32 - u32::from(prefix));
        let net = Ipv4Network::new(Ipv4Addr::from(self.first() ^ bit), prefix).ok()?;
        Some(Self { net })
    }

    /// True when `other` lies entirely inside this block.
    ///
    /// Aligned blocks either nest or are disjoint, so holding the other
    /// block's base with a prefix no longer than its own is enough.
    pub fn contains(&self, other: &NetworkBlock) -> bool {
        self.prefix() <= other.prefix() && self.net.contains(other.base())
    }
}

impl Ord for NetworkBlock {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.base(), self.prefix()).cmp(&(other.base(), other.prefix()))
    }
}

impl PartialOrd for NetworkBlock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.prefix())
    }
}

impl FromStr for NetworkBlock {
    type Err = NetfoldError;

    /// Parses `a.b.c.d/p` or a bare address, which becomes a `/32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            let addr = s
                .parse::<Ipv4Addr>()
                .map_err(|e| NetfoldError::invalid_input(s, e))?;
            return Ok(Self::host(addr));
        };

        let base = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|e| NetfoldError::invalid_input(s, e))?;
        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|e| NetfoldError::invalid_input(s, e))?;

        Self::new(base, prefix)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
