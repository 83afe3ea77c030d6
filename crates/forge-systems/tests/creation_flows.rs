//! End-to-end flows through the catalog's creation machinery

use forge_catalog::furniture::{furniture_families, StyleTag};
use forge_catalog::meal::{meal_builders, MealTag};
use forge_catalog::shipping::{shipping_methods, ShippingTag};
use forge_core::{CreationError, Creator};
use forge_test_utils::{characters_with_clones, construct_meal};
use pretty_assertions::assert_eq;

#[test]
fn air_booking_costs_weight_times_distance_times_half() {
    let registry = shipping_methods();
    let method = registry.create(&ShippingTag::Air).unwrap();

    assert_eq!(method.book(), "Air shipping booked.");
    let cost = method.cost(10.0, 500.0);
    assert!((cost - 2500.0).abs() < f64::EPSILON);
}

#[test]
fn every_registered_shipping_tag_creates() {
    let registry = shipping_methods();
    for tag in [ShippingTag::Air, ShippingTag::Sea, ShippingTag::Ground] {
        assert!(registry.create(&tag).is_ok(), "tag {tag} should create");
    }
}

#[test]
fn selector_that_maps_to_nothing_fails_without_a_product() {
    let err = "5".parse::<ShippingTag>().unwrap_err();
    assert_eq!(err, CreationError::UnknownVariant("5".to_string()));
}

#[test]
fn furniture_families_are_never_mixed() {
    let registry = furniture_families();

    let victorian = registry.create(&StyleTag::Victorian).unwrap().create_set();
    assert_eq!(victorian.chair.style(), StyleTag::Victorian);
    assert_eq!(victorian.sofa.style(), StyleTag::Victorian);

    let modern = registry.create(&StyleTag::Modern).unwrap().create_set();
    assert_eq!(modern.chair.style(), StyleTag::Modern);
    assert_eq!(modern.sofa.style(), StyleTag::Modern);
}

#[test]
fn vegetarian_meal_follows_director_order() {
    let mut builder = meal_builders().create(&MealTag::Vegetarian).unwrap();
    let meal = construct_meal(builder.as_mut()).unwrap();

    assert_eq!(meal.dishes(), &["Vegetarian Burger", "Salad", "Lemonade"]);
}

#[test]
fn clone_round_trip_preserves_behavior_and_independence() {
    let (registry, clones) = characters_with_clones();

    // Clones match their exemplars
    let details: Vec<String> = clones.iter().map(|c| c.details()).collect();
    assert_eq!(details, vec!["Warrior: Conan", "Mage: Gandalf", "Archer: Legolas"]);

    // A mutated clone leaves the registry's exemplar untouched
    let mut hero = clones.into_iter().next().unwrap();
    hero.rename("Kull");
    assert_eq!(hero.details(), "Warrior: Kull");
    assert_eq!(
        registry
            .clone_of(&forge_catalog::character::ClassTag::Warrior)
            .unwrap()
            .details(),
        "Warrior: Conan"
    );
}
