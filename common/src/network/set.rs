//! # Address Set
//!
//! The deduplicated collection of IPv4 hosts an analysis runs over.
//!
//! Addresses are held as a sorted `Vec<u32>`, which keeps membership and
//! "how many members fall inside this range" queries at O(log n) and lets
//! the set be shared by reference across worker threads.

use std::net::Ipv4Addr;

use tracing::debug;

use crate::error::NetfoldError;
use crate::network::range::Ipv4Range;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressSet {
    addrs: Vec<u32>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses dotted-decimal literals, one address each.
    ///
    /// Malformed literals are rejected rather than skipped so that the
    /// statistics of a run always describe the full input.
    pub fn parse<I, S>(literals: I) -> Result<Self, NetfoldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let addrs = literals
            .into_iter()
            .map(|literal| {
                let literal = literal.as_ref().trim();
                literal
                    .parse::<Ipv4Addr>()
                    .map_err(|e| NetfoldError::invalid_input(literal, e))
            })
            .collect::<Result<Vec<Ipv4Addr>, _>>()?;

        let set: AddressSet = addrs.into_iter().collect();
        debug!("Parsed {} unique addresses", set.len());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.addrs.binary_search(&u32::from(addr)).is_ok()
    }

    /// Number of members inside `range`, bounds inclusive.
    pub fn count_in(&self, range: &Ipv4Range) -> usize {
        if range.is_empty() {
            return 0;
        }
        let lo = self.addrs.partition_point(|&a| a < range.start());
        let hi = self.addrs.partition_point(|&a| a <= range.end());
        hi - lo
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + '_ {
        self.addrs.iter().copied().map(Ipv4Addr::from)
    }
}

impl FromIterator<Ipv4Addr> for AddressSet {
    fn from_iter<T: IntoIterator<Item = Ipv4Addr>>(iter: T) -> Self {
        let mut addrs: Vec<u32> = iter.into_iter().map(u32::from).collect();
        addrs.sort_unstable();
        addrs.dedup();
        Self { addrs }
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
