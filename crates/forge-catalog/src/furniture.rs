//! Furniture families: one factory per style, every piece consistent
//!
//! A [`FurnitureFactory`] only ever produces pieces of its own style, so a
//! bundle created through it can never mix Victorian and Modern.

use forge_core::{CreationError, VariantRegistry};
use std::fmt;
use std::str::FromStr;

/// Closed set of furniture styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Ornate nineteenth-century styling
    Victorian,
    /// Clean contemporary styling
    Modern,
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Victorian => write!(f, "Victorian"),
            Self::Modern => write!(f, "Modern"),
        }
    }
}

impl FromStr for StyleTag {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "victorian" => Ok(Self::Victorian),
            "2" | "modern" => Ok(Self::Modern),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// A seating surface for one person
pub trait Chair: Send + Sync {
    /// Sit down, returning the experience line
    fn sit_on(&self) -> String;

    /// Style this chair belongs to
    fn style(&self) -> StyleTag;
}

/// A seating surface to stretch out on
pub trait Sofa: Send + Sync {
    /// Lie down, returning the experience line
    fn lie_on(&self) -> String;

    /// Style this sofa belongs to
    fn style(&self) -> StyleTag;
}

/// Ornate chair
#[derive(Debug, Default)]
pub struct VictorianChair;

impl Chair for VictorianChair {
    fn sit_on(&self) -> String {
        "Sitting on a Victorian chair.".to_string()
    }

    fn style(&self) -> StyleTag {
        StyleTag::Victorian
    }
}

/// Ornate sofa
#[derive(Debug, Default)]
pub struct VictorianSofa;

impl Sofa for VictorianSofa {
    fn lie_on(&self) -> String {
        "Lying on a Victorian sofa.".to_string()
    }

    fn style(&self) -> StyleTag {
        StyleTag::Victorian
    }
}

/// Contemporary chair
#[derive(Debug, Default)]
pub struct ModernChair;

impl Chair for ModernChair {
    fn sit_on(&self) -> String {
        "Sitting on a Modern chair.".to_string()
    }

    fn style(&self) -> StyleTag {
        StyleTag::Modern
    }
}

/// Contemporary sofa
#[derive(Debug, Default)]
pub struct ModernSofa;

impl Sofa for ModernSofa {
    fn lie_on(&self) -> String {
        "Lying on a Modern sofa.".to_string()
    }

    fn style(&self) -> StyleTag {
        StyleTag::Modern
    }
}

/// A consistent bundle produced by one factory
pub struct FurnitureSet {
    /// The set's chair
    pub chair: Box<dyn Chair>,
    /// The set's sofa
    pub sofa: Box<dyn Sofa>,
}

/// Produces every piece of one furniture style
pub trait FurnitureFactory: Send + Sync {
    /// Style every product of this factory carries
    fn style(&self) -> StyleTag;

    /// Create a chair in this factory's style
    fn create_chair(&self) -> Box<dyn Chair>;

    /// Create a sofa in this factory's style
    fn create_sofa(&self) -> Box<dyn Sofa>;

    /// Create the whole bundle in one go
    fn create_set(&self) -> FurnitureSet {
        FurnitureSet {
            chair: self.create_chair(),
            sofa: self.create_sofa(),
        }
    }
}

/// Factory for Victorian pieces
#[derive(Debug, Default)]
pub struct VictorianFurniture;

impl FurnitureFactory for VictorianFurniture {
    fn style(&self) -> StyleTag {
        StyleTag::Victorian
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }
}

/// Factory for Modern pieces
#[derive(Debug, Default)]
pub struct ModernFurniture;

impl FurnitureFactory for ModernFurniture {
    fn style(&self) -> StyleTag {
        StyleTag::Modern
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }
}

/// Registry mapping each style to its family factory
#[must_use]
pub fn furniture_families() -> VariantRegistry<StyleTag, Box<dyn FurnitureFactory>> {
    let mut registry = VariantRegistry::new();
    registry.register(StyleTag::Victorian, || {
        Box::new(VictorianFurniture) as Box<dyn FurnitureFactory>
    });
    registry.register(StyleTag::Modern, || {
        Box::new(ModernFurniture) as Box<dyn FurnitureFactory>
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::Creator;

    #[test]
    fn families_never_mix_styles() {
        let registry = furniture_families();

        for tag in [StyleTag::Victorian, StyleTag::Modern] {
            let factory = registry.create(&tag).unwrap();
            let set = factory.create_set();
            assert_eq!(set.chair.style(), tag);
            assert_eq!(set.sofa.style(), tag);
        }
    }

    #[test]
    fn victorian_pieces_report_victorian_lines() {
        let registry = furniture_families();
        let factory = registry.create(&StyleTag::Victorian).unwrap();

        assert_eq!(factory.create_chair().sit_on(), "Sitting on a Victorian chair.");
        assert_eq!(factory.create_sofa().lie_on(), "Lying on a Victorian sofa.");
    }

    #[test]
    fn modern_pieces_report_modern_lines() {
        let registry = furniture_families();
        let factory = registry.create(&StyleTag::Modern).unwrap();

        assert_eq!(factory.create_chair().sit_on(), "Sitting on a Modern chair.");
        assert_eq!(factory.create_sofa().lie_on(), "Lying on a Modern sofa.");
    }

    #[test]
    fn unknown_style_is_not_defaulted() {
        let err = "baroque".parse::<StyleTag>().unwrap_err();
        assert_eq!(err, CreationError::UnknownVariant("baroque".to_string()));
    }
}
