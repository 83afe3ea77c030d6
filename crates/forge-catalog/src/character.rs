//! Game characters cloned from registered exemplars
//!
//! Building a character is treated as expensive; the registry holds one
//! exemplar per class and hands out deep copies on demand.

use forge_core::{CreationError, PrototypeRegistry};
use std::fmt;
use std::str::FromStr;

/// Closed set of character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTag {
    /// Front-line fighter
    Warrior,
    /// Spell caster
    Mage,
    /// Ranged attacker
    Archer,
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warrior => write!(f, "warrior"),
            Self::Mage => write!(f, "mage"),
            Self::Archer => write!(f, "archer"),
        }
    }
}

impl FromStr for ClassTag {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "warrior" => Ok(Self::Warrior),
            "mage" => Ok(Self::Mage),
            "archer" => Ok(Self::Archer),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// A playable character
///
/// `boxed_clone` is the deep-copy seam: the copy owns all of its state and
/// can be renamed without touching the source.
pub trait Character: Send {
    /// Class this character belongs to
    fn class(&self) -> ClassTag;

    /// Current display name
    fn name(&self) -> &str;

    /// Give the character a new name
    fn rename(&mut self, name: &str);

    /// Deep copy with independent ownership
    fn boxed_clone(&self) -> Box<dyn Character>;

    /// One-line description, e.g. `Warrior: Conan`
    fn details(&self) -> String {
        let class = match self.class() {
            ClassTag::Warrior => "Warrior",
            ClassTag::Mage => "Mage",
            ClassTag::Archer => "Archer",
        };
        format!("{}: {}", class, self.name())
    }
}

impl Clone for Box<dyn Character> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Front-line fighter
#[derive(Debug, Clone)]
pub struct Warrior {
    name: String,
}

impl Warrior {
    /// Create a warrior with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Warrior {
    fn class(&self) -> ClassTag {
        ClassTag::Warrior
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn boxed_clone(&self) -> Box<dyn Character> {
        Box::new(self.clone())
    }
}

/// Spell caster
#[derive(Debug, Clone)]
pub struct Mage {
    name: String,
}

impl Mage {
    /// Create a mage with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Mage {
    fn class(&self) -> ClassTag {
        ClassTag::Mage
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn boxed_clone(&self) -> Box<dyn Character> {
        Box::new(self.clone())
    }
}

/// Ranged attacker
#[derive(Debug, Clone)]
pub struct Archer {
    name: String,
}

impl Archer {
    /// Create an archer with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Archer {
    fn class(&self) -> ClassTag {
        ClassTag::Archer
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn boxed_clone(&self) -> Box<dyn Character> {
        Box::new(self.clone())
    }
}

/// Registry seeded with one exemplar per class
#[must_use]
pub fn character_prototypes() -> PrototypeRegistry<ClassTag, Box<dyn Character>> {
    let mut registry = PrototypeRegistry::new();
    registry.register(ClassTag::Warrior, Box::new(Warrior::new("Conan")) as Box<dyn Character>);
    registry.register(ClassTag::Mage, Box::new(Mage::new("Gandalf")) as Box<dyn Character>);
    registry.register(ClassTag::Archer, Box::new(Archer::new("Legolas")) as Box<dyn Character>);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_match_their_exemplars() {
        let registry = character_prototypes();

        assert_eq!(registry.clone_of(&ClassTag::Warrior).unwrap().details(), "Warrior: Conan");
        assert_eq!(registry.clone_of(&ClassTag::Mage).unwrap().details(), "Mage: Gandalf");
        assert_eq!(registry.clone_of(&ClassTag::Archer).unwrap().details(), "Archer: Legolas");
    }

    #[test]
    fn renaming_a_clone_leaves_exemplar_untouched() {
        let registry = character_prototypes();

        let mut hero = registry.clone_of(&ClassTag::Warrior).unwrap();
        hero.rename("Kull");
        assert_eq!(hero.details(), "Warrior: Kull");

        // The exemplar and later clones keep the original name
        let fresh = registry.clone_of(&ClassTag::Warrior).unwrap();
        assert_eq!(fresh.details(), "Warrior: Conan");
    }

    #[test]
    fn sibling_clones_are_independent() {
        let registry = character_prototypes();

        let mut first = registry.clone_of(&ClassTag::Mage).unwrap();
        let second = registry.clone_of(&ClassTag::Mage).unwrap();
        first.rename("Saruman");

        assert_eq!(second.details(), "Mage: Gandalf");
    }

    #[test]
    fn unregistered_class_fails() {
        let mut registry = character_prototypes();
        assert!(registry.remove(&ClassTag::Archer).is_some());

        let err = registry.clone_of(&ClassTag::Archer).unwrap_err();
        assert_eq!(err, CreationError::UnknownVariant("archer".to_string()));
    }

    #[test]
    fn re_registering_overwrites_exemplar() {
        let mut registry = character_prototypes();
        registry.register(ClassTag::Warrior, Box::new(Warrior::new("Kull")) as Box<dyn Character>);

        assert_eq!(registry.clone_of(&ClassTag::Warrior).unwrap().details(), "Warrior: Kull");
        assert_eq!(registry.len(), 3);
    }
}
