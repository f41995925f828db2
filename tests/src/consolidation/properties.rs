#![cfg(test)]
use netfold_common::config::AnalysisConfig;
use netfold_common::network::{AddressSet, NetworkBlock};
use netfold_core::aggregate::span_addresses;
use netfold_core::{EXPANSION_FLOOR, ThresholdResult, aggregate, analyze, expand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::Ipv4Addr;

const SEEDS: [u64; 6] = [1, 7, 42, 1337, 9001, 65535];

/// A few /20 regions, each filled at a random density.
fn clustered_set(rng: &mut StdRng) -> AddressSet {
    let clusters = rng.random_range(1..=4);
    let mut addrs: Vec<Ipv4Addr> = Vec::new();
    for _ in 0..clusters {
        let base: u32 = rng.random_range(0..(1u32 << 20)) << 12;
        let density: f64 = rng.random_range(0.05..0.95);
        for offset in 0..4096u32 {
            if rng.random_bool(density) {
                addrs.push(Ipv4Addr::from(base + offset));
            }
        }
    }
    addrs.into_iter().collect()
}

/// One fully populated aligned block per /20 slot, its buddy left empty, so
/// no block can grow without admitting a foreign address.
fn isolated_blocks(rng: &mut StdRng) -> AddressSet {
    let mut addrs: Vec<Ipv4Addr> = Vec::new();
    for slot in 0..rng.random_range(1..=32u32) {
        let network: u32 = (10 << 24) | (slot << 12);
        let prefix: u32 = rng.random_range(25..=32);
        let size: u32 = 1 << (32 - prefix);
        let start: u32 = network + rng.random_range(0..(256 / size)) * size;
        addrs.extend((start..start + size).map(Ipv4Addr::from));
    }
    addrs.into_iter().collect()
}

fn assert_disjoint_and_sorted(blocks: &[NetworkBlock]) {
    for pair in blocks.windows(2) {
        assert!(
            pair[0].last() < pair[1].first(),
            "{} overlaps or precedes {}",
            pair[0],
            pair[1]
        );
    }
}

fn sweep(addresses: &AddressSet, thresholds: Vec<u8>) -> Vec<ThresholdResult> {
    let cfg = AnalysisConfig {
        thresholds,
        ..Default::default()
    };
    analyze(addresses, &cfg).unwrap().results
}

#[test]
fn aggregation_covers_exactly_the_input() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let addresses = clustered_set(&mut rng);
        let blocks = aggregate(&addresses);

        assert_eq!(span_addresses(&blocks), addresses, "seed {seed}");
        assert_disjoint_and_sorted(&blocks);
    }
}

#[test]
fn aggregation_is_idempotent() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let blocks = aggregate(&clustered_set(&mut rng));
        assert_eq!(aggregate(&span_addresses(&blocks)), blocks, "seed {seed}");
    }
}

#[test]
fn buddies_never_survive_aggregation() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let blocks = aggregate(&clustered_set(&mut rng));
        for block in &blocks {
            if let Some(buddy) = block.buddy() {
                assert!(blocks.binary_search(&buddy).is_err(), "seed {seed}: {block} and {buddy}");
            }
        }
    }
}

#[test]
fn coarser_tolerance_never_costs_objects() {
    let thresholds: Vec<u8> = (0..=100).step_by(5).collect();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let results = sweep(&clustered_set(&mut rng), thresholds.clone());

        for pair in results.windows(2) {
            let (low, high) = (&pair[0], &pair[1]);
            assert!(
                low.objects_defined >= high.objects_defined,
                "seed {seed}: objects rose from {}% to {}%",
                low.threshold,
                high.threshold
            );
            assert!(
                low.missing_included <= high.missing_included,
                "seed {seed}: missing fell from {}% to {}%",
                low.threshold,
                high.threshold
            );
        }
    }
}

#[test]
fn frontier_dominates_every_other_result() {
    let thresholds: Vec<u8> = vec![0, 5, 10, 20, 25, 30, 35, 40, 45, 50, 75, 100];
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let cfg = AnalysisConfig {
            thresholds: thresholds.clone(),
            ..Default::default()
        };
        let analysis = analyze(&clustered_set(&mut rng), &cfg).unwrap();

        for result in &analysis.results {
            assert!(
                analysis.frontier.iter().any(|f| f.objects_defined <= result.objects_defined
                    && f.missing_included <= result.missing_included),
                "seed {seed}: {}% is not dominated",
                result.threshold
            );
        }
        for pair in analysis.frontier.windows(2) {
            assert!(pair[0].objects_defined < pair[1].objects_defined);
            assert!(pair[0].missing_included > pair[1].missing_included);
        }
    }
}

#[test]
fn full_tolerance_expands_to_the_floor() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let addresses = clustered_set(&mut rng);
        let expanded = expand(&aggregate(&addresses), &addresses, 100).unwrap();

        for net in expanded.iter().filter(|net| !net.is_host()) {
            assert_eq!(net.prefix(), EXPANSION_FLOOR, "seed {seed}: {net}");
        }
    }
}

#[test]
fn zero_tolerance_keeps_isolated_blocks() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let addresses = isolated_blocks(&mut rng);
        let blocks = aggregate(&addresses);

        assert_eq!(expand(&blocks, &addresses, 0).unwrap(), blocks, "seed {seed}");

        let result = &sweep(&addresses, vec![0])[0];
        let raw_objects = blocks.iter().filter(|net| !net.is_host()).count();
        assert_eq!(result.objects_defined, raw_objects, "seed {seed}");
        assert_eq!(result.missing_included, 0, "seed {seed}");
    }
}
