//! End-to-end checks of the consolidation engine through its public API.

mod consolidation;
