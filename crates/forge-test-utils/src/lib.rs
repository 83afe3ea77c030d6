//! Testing utilities for the forge workspace
//!
//! Shared fixtures for integration tests.

#![allow(missing_docs)]

use forge_catalog::character::{character_prototypes, Character, ClassTag};
use forge_catalog::meal::{MealBuilder, MealDirector};
use forge_core::{CreationResult, PrototypeRegistry};

/// Seeded character registry plus one pre-made clone of each class
pub fn characters_with_clones() -> (
    PrototypeRegistry<ClassTag, Box<dyn Character>>,
    Vec<Box<dyn Character>>,
) {
    let registry = character_prototypes();
    let clones = [ClassTag::Warrior, ClassTag::Mage, ClassTag::Archer]
        .iter()
        .map(|tag| registry.clone_of(tag).expect("seeded class"))
        .collect();
    (registry, clones)
}

/// Run a builder through the director's fixed step order
pub fn construct_meal(builder: &mut dyn MealBuilder) -> CreationResult<forge_catalog::meal::Meal> {
    MealDirector.construct(builder)
}
