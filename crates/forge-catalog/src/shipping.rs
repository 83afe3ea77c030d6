//! Shipping methods behind a variant registry
//!
//! The caller picks a [`ShippingTag`]; the registry hides which concrete
//! method backs it. Costs are flat per-kg-per-km rates.

use forge_core::{CreationError, VariantRegistry};
use std::fmt;
use std::str::FromStr;

/// Closed set of shipping variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingTag {
    /// Fastest, most expensive
    Air,
    /// Slow bulk freight
    Sea,
    /// Default overland carrier
    Ground,
}

impl fmt::Display for ShippingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "air"),
            Self::Sea => write!(f, "sea"),
            Self::Ground => write!(f, "ground"),
        }
    }
}

impl FromStr for ShippingTag {
    type Err = CreationError;

    /// Accepts the menu digits `1`/`2`/`3` as well as names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "air" => Ok(Self::Air),
            "2" | "sea" => Ok(Self::Sea),
            "3" | "ground" => Ok(Self::Ground),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// A bookable way of moving freight
pub trait ShippingMethod: Send + Sync {
    /// Book the shipment, returning the confirmation line
    fn book(&self) -> String;

    /// Cost of carrying `weight_kg` over `distance_km`
    fn cost(&self, weight_kg: f64, distance_km: f64) -> f64;
}

/// Air freight
#[derive(Debug, Default)]
pub struct AirShipping;

impl ShippingMethod for AirShipping {
    fn book(&self) -> String {
        "Air shipping booked.".to_string()
    }

    fn cost(&self, weight_kg: f64, distance_km: f64) -> f64 {
        weight_kg * distance_km * 0.5
    }
}

/// Sea freight
#[derive(Debug, Default)]
pub struct SeaShipping;

impl ShippingMethod for SeaShipping {
    fn book(&self) -> String {
        "Sea shipping booked.".to_string()
    }

    fn cost(&self, weight_kg: f64, distance_km: f64) -> f64 {
        weight_kg * distance_km * 0.3
    }
}

/// Overland freight
#[derive(Debug, Default)]
pub struct GroundShipping;

impl ShippingMethod for GroundShipping {
    fn book(&self) -> String {
        "Ground shipping booked.".to_string()
    }

    fn cost(&self, weight_kg: f64, distance_km: f64) -> f64 {
        weight_kg * distance_km * 0.1
    }
}

/// Registry seeded with every built-in shipping method
#[must_use]
pub fn shipping_methods() -> VariantRegistry<ShippingTag, Box<dyn ShippingMethod>> {
    let mut registry = VariantRegistry::new();
    registry.register(ShippingTag::Air, || {
        Box::new(AirShipping) as Box<dyn ShippingMethod>
    });
    registry.register(ShippingTag::Sea, || {
        Box::new(SeaShipping) as Box<dyn ShippingMethod>
    });
    registry.register(ShippingTag::Ground, || {
        Box::new(GroundShipping) as Box<dyn ShippingMethod>
    });
    registry
}
