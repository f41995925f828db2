//! Per-threshold coverage statistics.

use netfold_common::network::{AddressSet, Ipv4Range, NetworkBlock};

/// Outcome of consolidating one address set under one threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdResult {
    pub threshold: u8,
    /// Blocks wider than a single host, i.e. network objects to define.
    pub objects_defined: usize,
    pub original_count: usize,
    /// Distinct addresses admitted by `networks`.
    pub final_covered_count: u64,
    /// Admitted addresses that are not in the original set.
    pub missing_included: u64,
    pub expansion_percent: f64,
    /// Normalized trade-off, lower is better. Zero until the sweep is scored.
    pub score: f64,
    pub networks: Vec<NetworkBlock>,
}

impl ThresholdResult {
    /// Computes the statistics of `networks` against `original`.
    pub fn new(threshold: u8, networks: Vec<NetworkBlock>, original: &AddressSet) -> Self {
        let (final_covered_count, members) = coverage(&networks, original);
        let missing_included = final_covered_count - members;
        let original_count = original.len();
        let expansion_percent = if original_count == 0 {
            0.0
        } else {
            missing_included as f64 * 100.0 / original_count as f64
        };

        Self {
            threshold,
            objects_defined: networks.iter().filter(|net| !net.is_host()).count(),
            original_count,
            final_covered_count,
            missing_included,
            expansion_percent,
            score: 0.0,
            networks,
        }
    }
}

/// Returns `(covered, members)`: how many distinct addresses the blocks admit
/// and how many of those belong to `original`.
///
/// Overlapping blocks are counted once by merging their host ranges.
pub fn coverage(networks: &[NetworkBlock], original: &AddressSet) -> (u64, u64) {
    let mut ranges: Vec<Ipv4Range> = networks.iter().map(NetworkBlock::covered_hosts).collect();
    ranges.sort_unstable_by_key(|range| (range.start(), range.end()));

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some((_, end)) if u64::from(range.start()) <= u64::from(*end) + 1 => {
                *end = (*end).max(range.end());
            }
            _ => merged.push((range.start(), range.end())),
        }
    }

    merged
        .into_iter()
        .map(|(start, end)| Ipv4Range::from_u32(start, end))
        .fold((0, 0), |(covered, members), range| {
            (covered + range.len(), members + original.count_in(&range) as u64)
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
