//! Forge demonstration systems
//!
//! Two small systems composed from the catalog's pattern vocabulary: a
//! parking lot (factory-created entities, strategy-driven spot assignment,
//! explicit ownership instead of a global instance) and an expense splitter
//! (strategy-driven shares over id-keyed directories). The `forge` binary
//! in this crate fronts both, plus the catalog domains, with a thin CLI.

#![warn(unreachable_pub)]

pub mod expense;
pub mod parking;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
