//! # IPv4 Range Model
//!
//! Inclusive, contiguous runs of IPv4 addresses.
//!
//! Blocks describe their span and their host addresses as ranges so that
//! coverage can be counted without enumerating individual addresses.

use std::net::Ipv4Addr;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn from_u32(start: u32, end: u32) -> Self {
        Self::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
    }

    pub fn start(&self) -> u32 {
        u32::from(self.start_addr)
    }

    pub fn end(&self) -> u32 {
        u32::from(self.end_addr)
    }

    /// Number of addresses in the range; zero when start is past end.
    pub fn len(&self) -> u64 {
        if self.start() > self.end() {
            return 0;
        }
        u64::from(self.end() - self.start()) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Addresses in ascending order. The iterator owns its bounds, so it
    /// may outlive the range it came from.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        (self.start()..=self.end()).map(Ipv4Addr::from)
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
