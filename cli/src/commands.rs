pub mod analyze;
pub mod emit;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use netfold_common::config::{self, AnalysisConfig};

#[derive(Parser)]
#[command(name = "netfold")]
#[command(about = "Folds large IPv4 host lists into compact sets of CIDR blocks.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers and logs, -qq prints only the summary)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep missing-address thresholds and report the best trade-offs
    #[command(alias = "a")]
    Analyze {
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Print the CIDR blocks for one threshold, one per line
    #[command(alias = "e")]
    Emit {
        #[command(flatten)]
        sweep: SweepArgs,
        /// Threshold to emit (0-100); defaults to the recommended one
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Option<u8>,
    },
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// File with one IPv4 address per line ('#' starts a comment)
    pub input: PathBuf,

    /// Comma-separated thresholds to sweep, e.g. "0,10,25"
    #[arg(short = 'T', long)]
    pub thresholds: Option<String>,

    /// Worker threads; defaults to the number of available cores
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Drop expanded blocks that sit inside another expanded block
    #[arg(long)]
    pub collapse_overlaps: bool,
}

impl SweepArgs {
    pub fn to_config(&self, quiet: u8) -> anyhow::Result<AnalysisConfig> {
        let thresholds = match &self.thresholds {
            Some(list) => config::parse_thresholds(list)?,
            None => config::DEFAULT_THRESHOLDS.to_vec(),
        };

        Ok(AnalysisConfig {
            thresholds,
            workers: self.workers,
            collapse_overlaps: self.collapse_overlaps,
            quiet,
        })
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_threshold(s: &str) -> Result<u8, String> {
    let value = s
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid threshold '{s}': {e}"))?;
    config::validate_threshold(value).map_err(|e| e.to_string())
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

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("25"), Ok(25));
        assert!(parse_threshold("101").is_err());
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("ten").is_err());
    }

    #[test]
    fn test_emit_arguments() {
        let cli = CommandLine::try_parse_from(["netfold", "emit", "hosts.txt", "-t", "30", "-T", "0,30"]).unwrap();
        match cli.command {
            Commands::Emit { sweep, threshold } => {
                assert_eq!(threshold, Some(30));
                let cfg = sweep.to_config(0).unwrap();
                assert_eq!(cfg.thresholds, vec![0, 30]);
            }
            Commands::Analyze { .. } => panic!("expected emit"),
        }
    }

    #[test]
    fn test_default_sweep_config() {
        let cli = CommandLine::try_parse_from(["netfold", "-q", "analyze", "hosts.txt", "--collapse-overlaps"]).unwrap();
        assert_eq!(cli.quiet, 1);
        let Commands::Analyze { sweep } = cli.command else {
            panic!("expected analyze");
        };
        let cfg = sweep.to_config(cli.quiet).unwrap();
        assert_eq!(cfg.thresholds, config::DEFAULT_THRESHOLDS.to_vec());
        assert!(cfg.collapse_overlaps);
        assert!(sweep.to_config(0).is_ok());
    }
}
