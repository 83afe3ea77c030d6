//! Meal assembly: staged builders driven by a director
//!
//! Concrete builders vary only in what each step contributes; the director
//! owns the one algorithmic decision, the step order. Extracting before
//! every mandatory step ran fails loudly.

use forge_core::{CreationError, CreationResult, StepLedger, VariantRegistry};
use std::fmt;
use std::str::FromStr;

const MAIN_DISH: &str = "main_dish";
const SIDE_DISH: &str = "side_dish";
const DRINK: &str = "drink";

const MANDATORY_STEPS: [&str; 3] = [MAIN_DISH, SIDE_DISH, DRINK];

/// Closed set of meal kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealTag {
    /// No meat anywhere
    Vegetarian,
    /// The carnivore option
    NonVegetarian,
}

impl fmt::Display for MealTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vegetarian => write!(f, "vegetarian"),
            Self::NonVegetarian => write!(f, "non-vegetarian"),
        }
    }
}

impl FromStr for MealTag {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "vegetarian" | "veg" => Ok(Self::Vegetarian),
            "2" | "non-vegetarian" | "nonveg" => Ok(Self::NonVegetarian),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// A finished meal: an ordered list of dishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    dishes: Vec<String>,
}

impl Meal {
    /// Dishes in the order they were added
    #[inline]
    #[must_use]
    pub fn dishes(&self) -> &[String] {
        &self.dishes
    }

    /// One-line description of the whole meal
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Meal includes: {}", self.dishes.join(", "))
    }
}

/// Assembles a [`Meal`] across ordered construction steps
///
/// Repeating a step accumulates deterministically: the step's dish is
/// appended again. [`MealBuilder::extract`] verifies that every mandatory
/// step ran, yields the finished meal, and resets the builder for reuse.
pub trait MealBuilder: Send {
    /// Contribute the main component
    fn main_dish(&mut self);

    /// Contribute the side component
    fn side_dish(&mut self);

    /// Contribute the drink
    fn drink(&mut self);

    /// Yield the finished meal and reset the build state
    ///
    /// # Errors
    /// [`CreationError::IncompleteBuild`] when a mandatory step has not run.
    fn extract(&mut self) -> CreationResult<Meal>;
}

#[derive(Debug)]
struct BuildState {
    dishes: Vec<String>,
    ledger: StepLedger,
}

impl BuildState {
    fn new() -> Self {
        Self {
            dishes: Vec::new(),
            ledger: StepLedger::new(&MANDATORY_STEPS),
        }
    }

    fn add(&mut self, step: &'static str, dish: &str) {
        self.dishes.push(dish.to_string());
        self.ledger.record(step);
    }

    fn extract(&mut self) -> CreationResult<Meal> {
        self.ledger.verify()?;
        let meal = Meal {
            dishes: std::mem::take(&mut self.dishes),
        };
        self.ledger.reset();
        Ok(meal)
    }
}

/// Builds the vegetarian menu
#[derive(Debug)]
pub struct VegetarianMealBuilder {
    state: BuildState,
}

impl VegetarianMealBuilder {
    /// Start a fresh build session
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BuildState::new(),
        }
    }
}

impl Default for VegetarianMealBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MealBuilder for VegetarianMealBuilder {
    fn main_dish(&mut self) {
        self.state.add(MAIN_DISH, "Vegetarian Burger");
    }

    fn side_dish(&mut self) {
        self.state.add(SIDE_DISH, "Salad");
    }

    fn drink(&mut self) {
        self.state.add(DRINK, "Lemonade");
    }

    fn extract(&mut self) -> CreationResult<Meal> {
        self.state.extract()
    }
}

/// Builds the non-vegetarian menu
#[derive(Debug)]
pub struct NonVegetarianMealBuilder {
    state: BuildState,
}

impl NonVegetarianMealBuilder {
    /// Start a fresh build session
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BuildState::new(),
        }
    }
}

impl Default for NonVegetarianMealBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MealBuilder for NonVegetarianMealBuilder {
    fn main_dish(&mut self) {
        self.state.add(MAIN_DISH, "Chicken Burger");
    }

    fn side_dish(&mut self) {
        self.state.add(SIDE_DISH, "Fries");
    }

    fn drink(&mut self) {
        self.state.add(DRINK, "Coke");
    }

    fn extract(&mut self) -> CreationResult<Meal> {
        self.state.extract()
    }
}

/// Drives any [`MealBuilder`] through the fixed step order
///
/// Callers never sequence steps themselves; the director runs
/// main → side → drink and extracts.
#[derive(Debug, Default)]
pub struct MealDirector;

impl MealDirector {
    /// Run the full construction sequence on `builder`
    ///
    /// # Errors
    /// Propagates the builder's extraction error; with the fixed order this
    /// only fires if a builder implementation skips recording a step.
    pub fn construct(&self, builder: &mut dyn MealBuilder) -> CreationResult<Meal> {
        builder.main_dish();
        builder.side_dish();
        builder.drink();
        builder.extract()
    }
}

/// Registry mapping each meal kind to a fresh builder
#[must_use]
pub fn meal_builders() -> VariantRegistry<MealTag, Box<dyn MealBuilder>> {
    let mut registry = VariantRegistry::new();
    registry.register(MealTag::Vegetarian, || {
        Box::new(VegetarianMealBuilder::new()) as Box<dyn MealBuilder>
    });
    registry.register(MealTag::NonVegetarian, || {
        Box::new(NonVegetarianMealBuilder::new()) as Box<dyn MealBuilder>
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::Creator;

    #[test]
    fn director_builds_vegetarian_meal_in_order() {
        let director = MealDirector;
        let mut builder = VegetarianMealBuilder::new();

        let meal = director.construct(&mut builder).unwrap();
        assert_eq!(meal.dishes(), &["Vegetarian Burger", "Salad", "Lemonade"]);
    }

    #[test]
    fn director_builds_non_vegetarian_meal_in_order() {
        let director = MealDirector;
        let mut builder = NonVegetarianMealBuilder::new();

        let meal = director.construct(&mut builder).unwrap();
        assert_eq!(meal.dishes(), &["Chicken Burger", "Fries", "Coke"]);
    }

    #[test]
    fn extract_before_steps_fails_loudly() {
        let mut builder = VegetarianMealBuilder::new();
        let err = builder.extract().unwrap_err();
        assert_eq!(err, CreationError::IncompleteBuild("main_dish"));
    }

    #[test]
    fn extract_names_first_missing_step() {
        let mut builder = VegetarianMealBuilder::new();
        builder.main_dish();
        builder.drink();

        let err = builder.extract().unwrap_err();
        assert_eq!(err, CreationError::IncompleteBuild("side_dish"));
    }

    #[test]
    fn repeated_step_accumulates_deterministically() {
        let mut builder = VegetarianMealBuilder::new();
        builder.main_dish();
        builder.main_dish();
        builder.side_dish();
        builder.drink();

        let meal = builder.extract().unwrap();
        assert_eq!(
            meal.dishes(),
            &["Vegetarian Burger", "Vegetarian Burger", "Salad", "Lemonade"]
        );
    }

    #[test]
    fn extract_resets_builder_for_reuse() {
        let director = MealDirector;
        let mut builder = VegetarianMealBuilder::new();

        let first = director.construct(&mut builder).unwrap();
        let second = director.construct(&mut builder).unwrap();
        assert_eq!(first, second);

        // Fresh session after extraction, so an immediate extract fails again
        let err = builder.extract().unwrap_err();
        assert_eq!(err, CreationError::IncompleteBuild("main_dish"));
    }

    #[test]
    fn registry_hands_out_fresh_builders() {
        let registry = meal_builders();
        let director = MealDirector;

        let mut builder = registry.create(&MealTag::NonVegetarian).unwrap();
        let meal = director.construct(builder.as_mut()).unwrap();
        assert_eq!(meal.summary(), "Meal includes: Chicken Burger, Fries, Coke");
    }
}
