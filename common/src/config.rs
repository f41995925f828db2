use crate::error::NetfoldError;

/// Threshold sweep used when the caller does not supply one.
pub const DEFAULT_THRESHOLDS: [u8; 9] = [0, 10, 20, 25, 30, 35, 40, 45, 50];

/// Parameters of one analysis run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Maximum-missing percentages to evaluate, in report order.
    ///
    /// Duplicates are kept and produce duplicate results.
    pub thresholds: Vec<u8>,
    /// Size of the worker pool. `None` uses every available execution unit.
    pub workers: Option<usize>,
    /// Drops expanded blocks that sit entirely inside another expanded block.
    ///
    /// Off by default, so overlapping expansions are reported as they are.
    pub collapse_overlaps: bool,
    /// Output verbosity reduction, 0 prints everything.
    pub quiet: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            workers: None,
            collapse_overlaps: false,
            quiet: 0,
        }
    }
}

impl AnalysisConfig {
    /// Fails on the first threshold outside of `0..=100`.
    pub fn validate(&self) -> Result<(), NetfoldError> {
        for &threshold in &self.thresholds {
            validate_threshold(i64::from(threshold))?;
        }
        Ok(())
    }
}

/// Checks a threshold without clamping it.
pub fn validate_threshold(threshold: i64) -> Result<u8, NetfoldError> {
    match u8::try_from(threshold) {
        Ok(t) if t <= 100 => Ok(t),
        _ => Err(NetfoldError::ThresholdOutOfRange(threshold)),
    }
}

/// Parses a comma-separated threshold list such as `"0, 10,25"`.
pub fn parse_thresholds(s: &str) -> Result<Vec<u8>, NetfoldError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let value = part
                .parse::<i64>()
                .map_err(|e| NetfoldError::invalid_input(part, e))?;
            validate_threshold(value)
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
