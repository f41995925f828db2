//! # Netfold Core
//!
//! The consolidation engine. Every function here is pure: inputs are borrowed,
//! outputs are fresh values, and nothing is cached between calls.
//!
//! Data flows in one direction:
//!
//! * **[`aggregate`]**: exact, lossless CIDR summarization of an address set.
//! * **[`expand`]**: threshold-bounded supernet growth of aggregated blocks.
//! * **[`stats`]**: per-threshold coverage statistics.
//! * **[`analysis`]**: the parallel threshold sweep, scoring and Pareto frontier.
//! * **[`recommend`]**: picks the best trade-off off the frontier.

pub mod aggregate;
pub mod analysis;
pub mod cancel;
pub mod expand;
pub mod recommend;
pub mod stats;

pub use aggregate::{aggregate, remove_subsumed};
pub use analysis::{Analysis, analyze, analyze_one, analyze_with};
pub use cancel::CancelToken;
pub use expand::{EXPANSION_FLOOR, expand};
pub use recommend::recommend;
pub use stats::ThresholdResult;
