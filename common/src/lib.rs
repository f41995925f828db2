//! # Netfold Common
//!
//! Shared data model for the address-consolidation engine.
//!
//! * **[`network`]**: IPv4 host sets, aligned CIDR blocks and inclusive ranges.
//! * **[`config`]**: Analysis parameters populated by the command line.
//! * **[`error`]**: The error taxonomy shared by every crate in the workspace.

pub mod config;
pub mod error;
pub mod network;

pub use error::NetfoldError;
