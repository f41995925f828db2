//! IPv4 network primitives used by the consolidation engine.

pub mod block;
pub mod range;
pub mod set;

pub use block::NetworkBlock;
pub use range::Ipv4Range;
pub use set::AddressSet;
