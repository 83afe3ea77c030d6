//! Forge demonstration catalog
//!
//! Product domains wired through the `forge-core` machinery, one module per
//! domain:
//!
//! - [`shipping`]: variant registry as a simple factory (Air/Sea/Ground)
//! - [`furniture`]: family factories whose bundles never mix styles
//! - [`meal`]: staged builders driven by a fixed-order director
//! - [`character`]: prototype registry handing out independent clones
//! - [`coffee`], [`route`], [`weather`], [`payment`], [`org`]: single-hop
//!   delegation exercises (decorator, strategy, observer, adapter, composite)
//!
//! Every domain rejects unknown selectors with
//! [`forge_core::CreationError::UnknownVariant`] instead of falling back to
//! a default variant.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod character;
pub mod coffee;
pub mod furniture;
pub mod meal;
pub mod org;
pub mod payment;
pub mod route;
pub mod shipping;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
