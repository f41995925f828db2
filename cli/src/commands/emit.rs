use netfold_common::network::AddressSet;
use netfold_core::{ThresholdResult, remove_subsumed};
use tracing::info;

use crate::commands::{SweepArgs, analyze};
use crate::input;
use crate::terminal::print;

/// Prints the blocks of one threshold as bare CIDR lines.
///
/// With an explicit threshold only that threshold is computed; otherwise the
/// full sweep runs and the recommended result is printed.
pub fn emit(sweep: &SweepArgs, threshold: Option<u8>, quiet: u8) -> anyhow::Result<()> {
    let cfg = sweep.to_config(quiet)?;
    let addresses: AddressSet = input::load_addresses(&sweep.input)?;

    let result: ThresholdResult = match threshold {
        Some(threshold) => {
            let mut result = netfold_core::analyze_one(&addresses, threshold)?;
            if cfg.collapse_overlaps {
                result = ThresholdResult::new(threshold, remove_subsumed(result.networks), &addresses);
            }
            result
        }
        None => analyze::run_sweep(&addresses, &cfg)?.recommended()?.clone(),
    };

    info!(
        "Emitting {} blocks for the {}% threshold ({} objects, {} extra addresses)",
        result.networks.len(),
        result.threshold,
        result.objects_defined,
        result.missing_included
    );

    for net in &result.networks {
        print::print(&net.to_string());
    }
    Ok(())
}
