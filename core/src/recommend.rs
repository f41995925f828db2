use netfold_common::NetfoldError;

use crate::stats::ThresholdResult;

/// Picks the frontier member with the lowest score.
///
/// Ties go to the earliest member, so frontier order decides. An empty
/// frontier has no answer and reports [`NetfoldError::NoSolution`].
pub fn recommend(frontier: &[ThresholdResult]) -> Result<&ThresholdResult, NetfoldError> {
    let (first, rest) = frontier.split_first().ok_or(NetfoldError::NoSolution)?;
    Ok(rest
        .iter()
        .fold(first, |best, candidate| if candidate.score < best.score { candidate } else { best }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
