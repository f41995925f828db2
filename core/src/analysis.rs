//! The threshold sweep.
//!
//! Each threshold is an independent unit of work: aggregation is computed once
//! and shared by reference, then every unit expands it under its own budget on
//! a bounded rayon pool. Units are tagged with their position in the caller's
//! list and reassembled in that order, whatever order they finish in.

use std::sync::atomic::{AtomicUsize, Ordering};

use netfold_common::NetfoldError;
use netfold_common::config::{AnalysisConfig, validate_threshold};
use netfold_common::network::{AddressSet, NetworkBlock};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate, remove_subsumed};
use crate::cancel::CancelToken;
use crate::expand::expand;
use crate::recommend::recommend;
use crate::stats::ThresholdResult;

/// Receives the number of threshold units completed so far.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Every result of a sweep plus its Pareto frontier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analysis {
    /// One entry per requested threshold, in request order.
    pub results: Vec<ThresholdResult>,
    /// Non-dominated results, by ascending object count.
    pub frontier: Vec<ThresholdResult>,
}

impl Analysis {
    pub fn recommended(&self) -> Result<&ThresholdResult, NetfoldError> {
        recommend(&self.frontier)
    }

    /// First result computed for `threshold`, if it was part of the sweep.
    pub fn for_threshold(&self, threshold: u8) -> Option<&ThresholdResult> {
        self.results.iter().find(|r| r.threshold == threshold)
    }
}

/// Runs the sweep described by `config` to completion.
pub fn analyze(addresses: &AddressSet, config: &AnalysisConfig) -> Result<Analysis, NetfoldError> {
    analyze_with(addresses, config, &CancelToken::new(), None)
}

/// Runs the sweep, skipping units not yet started once `cancel` is set.
///
/// Returns [`NetfoldError::Cancelled`] if any unit was skipped.
pub fn analyze_with(
    addresses: &AddressSet,
    config: &AnalysisConfig,
    cancel: &CancelToken,
    on_progress: Option<ProgressFn>,
) -> Result<Analysis, NetfoldError> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.unwrap_or(0))
        .build()
        .map_err(|e| NetfoldError::WorkerPool(e.to_string()))?;

    info!(
        "Starting analysis of {} addresses across {} thresholds",
        addresses.len(),
        config.thresholds.len()
    );

    let exact: Vec<NetworkBlock> = aggregate(addresses);
    let completed = AtomicUsize::new(0);

    let tagged: Result<Vec<(usize, ThresholdResult)>, NetfoldError> = pool.install(|| {
        config
            .thresholds
            .par_iter()
            .enumerate()
            .map(|(idx, &threshold)| {
                if cancel.is_cancelled() {
                    return Err(NetfoldError::Cancelled);
                }

                let result = run_threshold(threshold, &exact, addresses, config.collapse_overlaps)?;

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(report) = &on_progress {
                    report(done);
                }
                Ok((idx, result))
            })
            .collect()
    });

    let mut tagged = match tagged {
        Ok(tagged) => tagged,
        Err(NetfoldError::Cancelled) => {
            warn!(
                "Analysis cancelled after {} of {} thresholds",
                completed.load(Ordering::Relaxed),
                config.thresholds.len()
            );
            return Err(NetfoldError::Cancelled);
        }
        Err(e) => return Err(e),
    };

    tagged.sort_unstable_by_key(|(idx, _)| *idx);
    let mut results: Vec<ThresholdResult> = tagged.into_iter().map(|(_, result)| result).collect();

    score_results(&mut results);
    // An empty address set has no frontier.
    let frontier = if addresses.is_empty() {
        Vec::new()
    } else {
        pareto_front(&results)
    };

    info!("Analysis complete. Found {} Pareto optimal solutions", frontier.len());
    Ok(Analysis { results, frontier })
}

/// Consolidates `addresses` under a single threshold.
///
/// The result is unscored, a lone result has nothing to be normalized against.
pub fn analyze_one(addresses: &AddressSet, threshold: u8) -> Result<ThresholdResult, NetfoldError> {
    validate_threshold(i64::from(threshold))?;
    run_threshold(threshold, &aggregate(addresses), addresses, false)
}

fn run_threshold(
    threshold: u8,
    exact: &[NetworkBlock],
    addresses: &AddressSet,
    collapse_overlaps: bool,
) -> Result<ThresholdResult, NetfoldError> {
    let mut networks = expand(exact, addresses, threshold)?;
    if collapse_overlaps {
        networks = remove_subsumed(networks);
    }

    let result = ThresholdResult::new(threshold, networks, addresses);
    debug!(
        threshold,
        objects = result.objects_defined,
        missing = result.missing_included,
        "Threshold unit finished"
    );
    Ok(result)
}

/// Assigns each result the mean of its min-max normalized object and
/// missing counts. A constant axis normalizes to zero.
pub fn score_results(results: &mut [ThresholdResult]) {
    let Some((min_o, max_o)) = bounds(results.iter().map(|r| r.objects_defined as f64)) else {
        return;
    };
    let Some((min_m, max_m)) = bounds(results.iter().map(|r| r.missing_included as f64)) else {
        return;
    };

    for result in results.iter_mut() {
        let obj_norm = normalize(result.objects_defined as f64, min_o, max_o);
        let miss_norm = normalize(result.missing_included as f64, min_m, max_m);
        result.score = (obj_norm + miss_norm) / 2.0;
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min { (value - min) / (max - min) } else { 0.0 }
}

/// Skyline over `(objects_defined, missing_included)`, both minimized.
///
/// Results are ordered by objects then missing, ties keeping request order;
/// a result joins when it strictly improves on the lowest missing count seen.
pub fn pareto_front(results: &[ThresholdResult]) -> Vec<ThresholdResult> {
    let mut ordered: Vec<&ThresholdResult> = results.iter().collect();
    ordered.sort_by_key(|r| (r.objects_defined, r.missing_included));

    let mut frontier = Vec::new();
    let mut best_missing: Option<u64> = None;
    for result in ordered {
        if best_missing.is_none_or(|best| result.missing_included < best) {
            best_missing = Some(result.missing_included);
            frontier.push(result.clone());
        }
    }
    frontier
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
