#![cfg(test)]
use netfold_common::NetfoldError;
use netfold_common::config::AnalysisConfig;
use netfold_common::network::{AddressSet, NetworkBlock};
use netfold_core::aggregate::span_addresses;
use netfold_core::{aggregate, analyze, analyze_one, recommend};
use std::net::Ipv4Addr;

fn block(s: &str) -> NetworkBlock {
    s.parse().unwrap()
}

/// 250 of the 254 usable hosts of 10.0.1.0/24, with one gap in each quarter.
fn nearly_full_slash_24() -> AddressSet {
    (1..=254u8)
        .filter(|i| ![32, 96, 160, 224].contains(i))
        .map(|i| Ipv4Addr::new(10, 0, 1, i))
        .collect()
}

#[test]
fn four_adjacent_hosts_aggregate_exactly() {
    let addresses = AddressSet::parse(["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]).unwrap();
    let blocks = aggregate(&addresses);

    assert_eq!(
        blocks,
        vec![block("10.0.0.1/32"), block("10.0.0.2/31"), block("10.0.0.4/32")]
    );
    assert_eq!(span_addresses(&blocks), addresses);

    // The /31 climbs to 10.0.0.0/30 because both of its usable hosts are
    // present. That block's broadcast address is .3, so .3 drops out of
    // coverage while the .1 host still sits inside the /30.
    let result = analyze_one(&addresses, 0).unwrap();
    assert_eq!(
        result.networks,
        vec![block("10.0.0.0/30"), block("10.0.0.1/32"), block("10.0.0.4/32")]
    );
    assert_eq!(result.original_count, 4);
    assert_eq!(result.final_covered_count, 3);
    assert_eq!(result.missing_included, 0);
}

#[test]
fn nearly_full_network_folds_into_one_object() {
    let addresses = nearly_full_slash_24();
    assert_eq!(addresses.len(), 250);

    let result = analyze_one(&addresses, 25).unwrap();

    assert_eq!(result.objects_defined, 1);
    assert_eq!(result.missing_included, 4);
    assert_eq!(result.final_covered_count, 254);
    assert!(result.networks.contains(&block("10.0.1.0/24")));
    assert!(result.networks.iter().all(|net| net.is_host() || *net == block("10.0.1.0/24")));
}

#[test]
fn empty_input_has_no_solution() {
    let analysis = analyze(&AddressSet::new(), &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.results.len(), 9);
    for result in &analysis.results {
        assert_eq!(result.original_count, 0);
        assert_eq!(result.objects_defined, 0);
        assert_eq!(result.missing_included, 0);
        assert!(result.networks.is_empty());
    }
    assert!(analysis.frontier.is_empty());
    assert_eq!(analysis.recommended(), Err(NetfoldError::NoSolution));
    assert_eq!(recommend(&analysis.frontier), Err(NetfoldError::NoSolution));
}

#[test]
fn default_sweep_recommends_a_frontier_member() {
    let mut addrs: Vec<Ipv4Addr> = nearly_full_slash_24().iter().collect();
    addrs.extend((1..=40).map(|i| Ipv4Addr::new(192, 168, 7, i * 5)));
    let addresses: AddressSet = addrs.into_iter().collect();

    let analysis = analyze(&addresses, &AnalysisConfig::default()).unwrap();
    let recommended = analysis.recommended().unwrap();

    assert!(analysis.frontier.contains(recommended));
    assert!(analysis.frontier.iter().all(|r| r.score >= recommended.score));
}

#[test]
fn malformed_literal_is_rejected() {
    let err = AddressSet::parse(["10.0.0.1", "10.0.0"]).unwrap_err();
    assert!(matches!(err, NetfoldError::InvalidInput { .. }));
}
