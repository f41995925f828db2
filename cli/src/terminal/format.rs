use colored::*;
use netfold_common::network::NetworkBlock;
use netfold_core::ThresholdResult;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub const TABLE_HEADER: &str = "Threshold  Objects  Missing     Score  Expansion%";

/// One row of the sweep table, right-aligned under [`TABLE_HEADER`].
pub fn table_row(result: &ThresholdResult) -> String {
    format!(
        "{:>8}%  {:>7}  {:>7}  {:>8.3}  {:>10.1}",
        result.threshold,
        result.objects_defined,
        result.missing_included,
        result.score,
        result.expansion_percent
    )
}

pub fn result_to_details(result: &ThresholdResult) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Objects".to_string(), result.objects_defined.to_string().normal()),
        ("Missing".to_string(), result.missing_included.to_string().color(colors::MISSING)),
        ("Covered".to_string(), result.final_covered_count.to_string().normal()),
        ("Score".to_string(), format!("{:.3}", result.score).bold()),
    ];

    if let Some(widest) = result.networks.iter().min_by_key(|net| net.prefix()) {
        details.push(("Widest".to_string(), network_to_colored(widest)));
    }
    details
}

pub fn network_to_colored(net: &NetworkBlock) -> ColoredString {
    let address: ColoredString = net.base().to_string().color(colors::NETWORK_ADDR);
    let prefix: ColoredString = net.prefix().to_string().color(colors::NETWORK_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
