//! Route planning strategies swapped at runtime

use forge_core::{CreationError, VariantRegistry};
use std::fmt;
use std::str::FromStr;

/// Closed set of travel modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTag {
    /// By car
    Driving,
    /// On foot
    Walking,
    /// By bicycle
    Cycling,
}

impl fmt::Display for RouteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driving => write!(f, "driving"),
            Self::Walking => write!(f, "walking"),
            Self::Cycling => write!(f, "cycling"),
        }
    }
}

impl FromStr for RouteTag {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// One way of computing a route between two places
pub trait RouteStrategy: Send + Sync {
    /// Plan a route, returning the route description
    fn plan(&self, start: &str, end: &str) -> String;
}

/// Car routing
#[derive(Debug, Default)]
pub struct DrivingRoute;

impl RouteStrategy for DrivingRoute {
    fn plan(&self, start: &str, end: &str) -> String {
        format!("Calculating driving route from {start} to {end}")
    }
}

/// Pedestrian routing
#[derive(Debug, Default)]
pub struct WalkingRoute;

impl RouteStrategy for WalkingRoute {
    fn plan(&self, start: &str, end: &str) -> String {
        format!("Calculating walking route from {start} to {end}")
    }
}

/// Bicycle routing
#[derive(Debug, Default)]
pub struct CyclingRoute;

impl RouteStrategy for CyclingRoute {
    fn plan(&self, start: &str, end: &str) -> String {
        format!("Calculating cycling route from {start} to {end}")
    }
}

/// Context holding the currently selected strategy
#[derive(Default)]
pub struct Navigator {
    strategy: Option<Box<dyn RouteStrategy>>,
}

impl Navigator {
    /// Navigator with no strategy selected yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new routing strategy
    pub fn set_strategy(&mut self, strategy: Box<dyn RouteStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Plan with the current strategy; `None` when no strategy is set
    #[must_use]
    pub fn navigate(&self, start: &str, end: &str) -> Option<String> {
        self.strategy.as_ref().map(|s| s.plan(start, end))
    }
}

/// Registry seeded with every built-in routing strategy
#[must_use]
pub fn route_strategies() -> VariantRegistry<RouteTag, Box<dyn RouteStrategy>> {
    let mut registry = VariantRegistry::new();
    registry.register(RouteTag::Driving, || {
        Box::new(DrivingRoute) as Box<dyn RouteStrategy>
    });
    registry.register(RouteTag::Walking, || {
        Box::new(WalkingRoute) as Box<dyn RouteStrategy>
    });
    registry.register(RouteTag::Cycling, || {
        Box::new(CyclingRoute) as Box<dyn RouteStrategy>
    });
    registry
}
