//! Forge creation machinery
//!
//! The generic pieces behind the demonstration domains: a variant registry
//! that maps closed discriminator tags to construction rules, a prototype
//! registry that answers clone requests from owned exemplars, and a step
//! ledger that keeps staged builders honest.
//!
//! # Core Concepts
//!
//! - [`Creator`]: the seam between a discriminator tag and an owned product
//! - [`VariantRegistry`]: tag → constructor map (last write wins)
//! - [`PrototypeRegistry`]: tag → exemplar map handing out independent clones
//! - [`StepLedger`]: mandatory-step bookkeeping for builders
//! - [`CreationError`]: the two failure kinds every operation shares
//!
//! # Example
//!
//! ```rust
//! use forge_core::{Creator, VariantRegistry};
//!
//! let mut registry: VariantRegistry<&str, u32> = VariantRegistry::new();
//! registry.register("answer", || 42);
//!
//! assert_eq!(registry.create(&"answer").unwrap(), 42);
//! assert!(registry.create(&"question").is_err());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod error;
mod prototype;
mod registry;

pub use builder::StepLedger;
pub use error::{CreationError, CreationResult};
pub use prototype::{PrototypeRegistry, SharedPrototypeRegistry};
pub use registry::{Creator, VariantRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
