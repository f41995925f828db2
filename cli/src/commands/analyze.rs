use std::time::{Duration, Instant};

use colored::*;
use netfold_common::config::AnalysisConfig;
use netfold_common::network::AddressSet;
use netfold_core::analysis::{Analysis, ProgressFn};
use netfold_core::{CancelToken, ThresholdResult};

use crate::commands::SweepArgs;
use crate::input;
use crate::nprint;
use crate::signal;
use crate::terminal::{colors, format, print, spinner};

pub fn analyze(sweep: &SweepArgs, quiet: u8) -> anyhow::Result<()> {
    let cfg: AnalysisConfig = sweep.to_config(quiet)?;

    print::header("loading addresses", cfg.quiet);
    let addresses: AddressSet = input::load_addresses(&sweep.input)?;
    if cfg.quiet == 0 {
        print::print_status(format!(
            "{} unique addresses loaded from {}",
            addresses.len().to_string().green().bold(),
            sweep.input.display()
        ));
    }

    let start_time: Instant = Instant::now();
    let analysis: Analysis = run_sweep(&addresses, &cfg)?;
    analysis_ends(&analysis, start_time.elapsed(), &cfg);
    Ok(())
}

/// Runs the sweep behind a spinner. Ctrl+C stops it before the remaining
/// thresholds start.
pub fn run_sweep(addresses: &AddressSet, cfg: &AnalysisConfig) -> anyhow::Result<Analysis> {
    let total: usize = cfg.thresholds.len();
    let _spinner = spinner::start_analysis_spinner(total);
    let on_progress: ProgressFn = Box::new(move |done| spinner::report_analysis_progress(done, total));

    let cancel: CancelToken = signal::cancel_on_interrupt();
    let analysis = netfold_core::analyze_with(addresses, cfg, &cancel, Some(on_progress));
    spinner::finish_spinner();
    Ok(analysis?)
}

fn analysis_ends(analysis: &Analysis, total_time: Duration, cfg: &AnalysisConfig) {
    let recommended = match analysis.recommended() {
        Ok(recommended) => recommended,
        Err(_) => {
            print::header("nothing to consolidate", cfg.quiet);
            print::no_results();
            return;
        }
    };

    if cfg.quiet < 2 {
        print_sweep_table(&analysis.results, recommended, cfg);
        print_frontier(&analysis.frontier, cfg);
    }
    print_summary(recommended, total_time, cfg);
}

fn print_sweep_table(results: &[ThresholdResult], recommended: &ThresholdResult, cfg: &AnalysisConfig) {
    print::header("threshold sweep", cfg.quiet);
    print::print(&format::TABLE_HEADER.color(colors::SEPARATOR).to_string());
    let highlighted: Option<usize> = recommended_row(results, recommended);
    for (idx, result) in results.iter().enumerate() {
        let row: String = format::table_row(result);
        if Some(idx) == highlighted {
            print::print(&row.color(colors::PRIMARY).bold().to_string());
        } else {
            print::print(&row);
        }
    }
}

/// Row of the sweep table holding the recommendation.
///
/// A threshold listed twice yields identical rows, so only the first match
/// is picked.
fn recommended_row(results: &[ThresholdResult], recommended: &ThresholdResult) -> Option<usize> {
    results.iter().position(|result| result == recommended)
}

fn print_frontier(frontier: &[ThresholdResult], cfg: &AnalysisConfig) {
    print::header("pareto frontier", cfg.quiet);
    for (idx, result) in frontier.iter().enumerate() {
        print::tree_head(idx, &format!("{}% threshold", result.threshold));
        print::as_tree_one_level(format::result_to_details(result));
        if idx + 1 != frontier.len() {
            nprint!();
        }
    }
}

fn print_summary(recommended: &ThresholdResult, total_time: Duration, cfg: &AnalysisConfig) {
    let threshold: ColoredString = format!("{}%", recommended.threshold).bold().green();
    let objects: ColoredString = recommended.objects_defined.to_string().bold();
    let missing: ColoredString = recommended.missing_included.to_string().color(colors::MISSING);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "Recommended: {threshold} threshold, {objects} objects, {missing} extra addresses ({total_time})"
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => print::print(&output),
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
