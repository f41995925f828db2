//! Exact CIDR summarization.
//!
//! Collapses a set of hosts into the minimal list of aligned, non-overlapping
//! blocks whose union is exactly the input. Works as a single sort-and-scan:
//! subsumed blocks are dropped first, then a stack merges buddies as soon as
//! the upper half of a parent arrives, cascading upwards.

use netfold_common::network::{AddressSet, NetworkBlock};
use tracing::debug;

/// Summarizes `addresses` into blocks sorted by `(base, prefix)`.
///
/// An empty set yields an empty list.
pub fn aggregate(addresses: &AddressSet) -> Vec<NetworkBlock> {
    let hosts: Vec<NetworkBlock> = addresses.iter().map(NetworkBlock::host).collect();
    let blocks = collapse(hosts);
    debug!(
        "Aggregated {} addresses into {} blocks",
        addresses.len(),
        blocks.len()
    );
    blocks
}

/// Summarizes an arbitrary list of blocks, dropping duplicates and nested
/// blocks and merging buddies until nothing changes.
pub fn collapse(blocks: Vec<NetworkBlock>) -> Vec<NetworkBlock> {
    let disjoint = remove_subsumed(blocks);
    let mut stack: Vec<NetworkBlock> = Vec::with_capacity(disjoint.len());

    for block in disjoint {
        stack.push(block);
        while let Some(parent) = merge_top(&stack) {
            stack.truncate(stack.len() - 2);
            stack.push(parent);
        }
    }

    stack
}

/// Sorts `blocks` and drops every block contained in another one.
///
/// Aligned blocks either nest or are disjoint, so after sorting by
/// `(base, prefix)` a block is contained exactly when it starts inside the
/// last block kept.
pub fn remove_subsumed(mut blocks: Vec<NetworkBlock>) -> Vec<NetworkBlock> {
    blocks.sort_unstable();

    let mut kept: Vec<NetworkBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match kept.last() {
            Some(last) if last.contains(&block) => continue,
            _ => kept.push(block),
        }
    }
    kept
}

/// Returns the parent when the two topmost blocks are the halves of it.
fn merge_top(stack: &[NetworkBlock]) -> Option<NetworkBlock> {
    let [.., lower, upper] = stack else {
        return None;
    };
    if lower.prefix() != upper.prefix() || lower.buddy()? != *upper {
        return None;
    }
    let parent = lower.parent()?;
    (parent.base() == lower.base()).then_some(parent)
}

/// Every address spanned by `blocks`, network and broadcast included.
pub fn span_addresses(blocks: &[NetworkBlock]) -> AddressSet {
    blocks
        .iter()
        .flat_map(|block| block.span().iter())
        .collect::<AddressSet>()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn block(s: &str) -> NetworkBlock {
        s.parse().unwrap()
    }

    fn set(addrs: &[&str]) -> AddressSet {
        AddressSet::parse(addrs).unwrap()
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&AddressSet::new()).is_empty());
    }

    #[test]
    fn test_aggregate_single_host() {
        assert_eq!(aggregate(&set(&["10.0.0.7"])), vec![block("10.0.0.7/32")]);
    }

    #[test]
    fn test_aggregate_non_buddies_stay_apart() {
        // .1 and .2 are adjacent but belong to different /31s.
        let blocks = aggregate(&set(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]));
        assert_eq!(
            blocks,
            vec![block("10.0.0.1/32"), block("10.0.0.2/31"), block("10.0.0.4/32")]
        );
    }

    #[test]
    fn test_aggregate_aligned_run_collapses_to_one_block() {
        let addresses: AddressSet = (0..=255).map(|i| Ipv4Addr::new(172, 16, 4, i)).collect();
        assert_eq!(aggregate(&addresses), vec![block("172.16.4.0/24")]);
    }

    #[test]
    fn test_aggregate_unaligned_run() {
        let addresses: AddressSet = (1..=6).map(|i| Ipv4Addr::new(10, 0, 0, i)).collect();
        assert_eq!(
            aggregate(&addresses),
            vec![
                block("10.0.0.1/32"),
                block("10.0.0.2/31"),
                block("10.0.0.4/31"),
                block("10.0.0.6/32"),
            ]
        );
    }

    #[test]
    fn test_aggregate_full_address_space_edges() {
        let blocks = aggregate(&set(&["0.0.0.0", "0.0.0.1", "255.255.255.254", "255.255.255.255"]));
        assert_eq!(blocks, vec![block("0.0.0.0/31"), block("255.255.255.254/31")]);
    }

    #[test]
    fn test_collapse_cascades_across_sizes() {
        let blocks = vec![
            block("10.0.0.2/32"),
            block("10.0.0.0/31"),
            block("10.0.0.4/30"),
            block("10.0.0.3/32"),
        ];
        assert_eq!(collapse(blocks), vec![block("10.0.0.0/29")]);
    }

    #[test]
    fn test_remove_subsumed_drops_nested_and_duplicates() {
        let blocks = vec![
            block("10.0.0.64/26"),
            block("10.0.0.0/24"),
            block("10.0.1.0/32"),
            block("10.0.0.0/25"),
            block("10.0.1.0/32"),
        ];
        assert_eq!(
            remove_subsumed(blocks),
            vec![block("10.0.0.0/24"), block("10.0.1.0/32")]
        );
    }

    #[test]
    fn test_span_addresses_round_trip() {
        let addresses = set(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.9"]);
        assert_eq!(span_addresses(&aggregate(&addresses)), addresses);
    }
}
