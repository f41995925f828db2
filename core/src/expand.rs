//! Bias expansion.
//!
//! Grows each aggregated block towards coarser prefixes while the share of
//! parent usable hosts that are absent from the original set stays within a
//! missing-address budget. Blocks are expanded independently of each other,
//! so two siblings may climb into the same ancestor, or one may end inside
//! another's expansion. The result is deduplicated but never re-merged; see
//! [`crate::aggregate::remove_subsumed`] for callers that need disjoint output.

use netfold_common::NetfoldError;
use netfold_common::config::validate_threshold;
use netfold_common::network::{AddressSet, NetworkBlock};

/// Shortest prefix an expansion may reach.
pub const EXPANSION_FLOOR: u8 = 9;

/// Expands every block of `blocks` under a `max_missing_percent` budget.
///
/// Returns the expanded blocks deduplicated and sorted by `(base, prefix)`.
pub fn expand(
    blocks: &[NetworkBlock],
    original: &AddressSet,
    max_missing_percent: u8,
) -> Result<Vec<NetworkBlock>, NetfoldError> {
    validate_threshold(i64::from(max_missing_percent))?;

    let mut expanded: Vec<NetworkBlock> = blocks
        .iter()
        .map(|block| expand_block(*block, original, max_missing_percent))
        .collect();

    expanded.sort_unstable();
    expanded.dedup();
    Ok(expanded)
}

/// Climbs from `block` one parent at a time, stopping at the first parent
/// that exceeds the budget or would cross [`EXPANSION_FLOOR`].
///
/// Single hosts are returned unchanged.
pub fn expand_block(block: NetworkBlock, original: &AddressSet, max_missing_percent: u8) -> NetworkBlock {
    if block.is_host() {
        return block;
    }

    let mut current = block;
    while let Some(parent) = current.parent() {
        if parent.prefix() < EXPANSION_FLOOR || !within_budget(&parent, original, max_missing_percent) {
            break;
        }
        current = parent;
    }
    current
}

// Integer comparison keeps the inclusive boundary exact:
// missing / usable <= budget / 100  <=>  missing * 100 <= budget * usable.
// Blocks with no usable hosts never fit any budget.
fn within_budget(block: &NetworkBlock, original: &AddressSet, max_missing_percent: u8) -> bool {
    let Some(hosts) = block.usable_hosts() else {
        return false;
    };
    let usable = hosts.len();
    let missing = usable - original.count_in(&hosts) as u64;
    missing * 100 <= u64::from(max_missing_percent) * usable
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
