//! Coffee add-ons layered as decorators

use forge_core::CreationError;
use std::str::FromStr;

/// Anything that can be priced and described on the menu
pub trait Beverage: Send {
    /// Total cost including every layered add-on
    fn cost(&self) -> f64;

    /// Menu line including every layered add-on
    fn description(&self) -> String;
}

/// The undecorated base drink
#[derive(Debug, Default)]
pub struct SimpleCoffee;

impl Beverage for SimpleCoffee {
    fn cost(&self) -> f64 {
        5.0
    }

    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

/// Milk add-on
pub struct Milk(pub Box<dyn Beverage>);

impl Beverage for Milk {
    fn cost(&self) -> f64 {
        self.0.cost() + 1.5
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.0.description())
    }
}

/// Sugar add-on
pub struct Sugar(pub Box<dyn Beverage>);

impl Beverage for Sugar {
    fn cost(&self) -> f64 {
        self.0.cost() + 0.5
    }

    fn description(&self) -> String {
        format!("{}, Sugar", self.0.description())
    }
}

/// Whipped cream add-on
pub struct WhippedCream(pub Box<dyn Beverage>);

impl Beverage for WhippedCream {
    fn cost(&self) -> f64 {
        self.0.cost() + 2.0
    }

    fn description(&self) -> String {
        format!("{}, Whipped Cream", self.0.description())
    }
}

/// Selectable add-ons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraTag {
    /// +1.5
    Milk,
    /// +0.5
    Sugar,
    /// +2.0
    WhippedCream,
}

impl FromStr for ExtraTag {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "milk" => Ok(Self::Milk),
            "sugar" => Ok(Self::Sugar),
            "whipped-cream" | "cream" => Ok(Self::WhippedCream),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// Wrap `drink` in the add-on selected by `extra`
#[must_use]
pub fn with_extra(drink: Box<dyn Beverage>, extra: ExtraTag) -> Box<dyn Beverage> {
    match extra {
        ExtraTag::Milk => Box::new(Milk(drink)),
        ExtraTag::Sugar => Box::new(Sugar(drink)),
        ExtraTag::WhippedCream => Box::new(WhippedCream(drink)),
    }
}
