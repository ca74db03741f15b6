//! Pizzas and their shared preparation steps.
//!
//! [`Pizza`] is the contract every pizza variant implements. Only [`Pizza::prepare`] differs
//! between variants: it decides which ingredients to pull from the bound
//! [`PizzaIngredientFactory`]. Baking, cutting, boxing and the customer message are provided
//! methods shared by all variants, working on the composed [`PizzaBase`].
//!
//! # Variants
//!
//! | Kind | Ingredients |
//! |---|---|
//! | [`CheesePizza`] | dough, sauce, cheese |
//! | [`PepperoniPizza`] | dough, sauce, cheese, topping |

mod cheese;
mod pepperoni;

pub use cheese::CheesePizza;
pub use pepperoni::PepperoniPizza;

use crate::ingredient::{IngredientKind, Ingredients};
use crate::ingredient_factory::{PizzaIngredientFactory, Region};
use crate::kitchen_log::KitchenLog;
use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use std::sync::Arc;

pub const BAKE_LINE: &str = "-Bake for 25 minutes at 350";
pub const CUT_LINE: &str = "-Cutting the pizza into diagonal slices";
pub const BOX_LINE: &str = "-Place pizza in official PizzaStore box";

/// The pizza variants a store can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaKind {
    Cheese,
    Pepperoni,
}

impl PizzaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaKind::Cheese => "cheese",
            PizzaKind::Pepperoni => "pepperoni",
        }
    }
}

impl Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PizzaKind {
    type Err = StoreError;

    /// Parses an order string. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cheese" => Ok(PizzaKind::Cheese),
            "pepperoni" => Ok(PizzaKind::Pepperoni),
            other => Err(StoreError::UnknownPizzaType(other.to_string())),
        }
    }
}

/// State shared by every pizza variant.
///
/// The ingredient factory is bound once at construction and never replaced.
#[derive(Debug)]
pub struct PizzaBase {
    name: String,
    ingredients: Ingredients,
    factory: Arc<dyn PizzaIngredientFactory>,
}

impl PizzaBase {
    pub fn new(factory: Arc<dyn PizzaIngredientFactory>) -> Self {
        Self {
            name: String::new(),
            ingredients: Ingredients::default(),
            factory,
        }
    }

    /// Splits the base into the factory (read-only) and the ingredient slots (writable).
    pub fn factory_and_ingredients(&mut self) -> (&dyn PizzaIngredientFactory, &mut Ingredients) {
        (self.factory.as_ref(), &mut self.ingredients)
    }

    /// Records the header line that opens a pizza's preparation.
    pub fn announce_preparation(&self, log: &dyn KitchenLog) {
        log.record(&format!("-- Preparing {} --", self.name));
    }
}

/// Serializable description of a pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSummary {
    pub name: String,
    pub kind: PizzaKind,
    pub region: Region,
    pub ingredients: Vec<IngredientKind>,
}

/// A pizza that can be run through the kitchen.
///
/// Implementors supply [`Pizza::prepare`] and access to their [`PizzaBase`]; every other step
/// is provided. `prepare` is expected to run before the remaining steps.
pub trait Pizza: Debug {
    fn kind(&self) -> PizzaKind;

    fn base(&self) -> &PizzaBase;

    fn base_mut(&mut self) -> &mut PizzaBase;

    /// Fetches this variant's ingredients from the bound factory.
    fn prepare(&mut self, log: &dyn KitchenLog);

    fn name(&self) -> &str {
        &self.base().name
    }

    fn set_name(&mut self, name: &str) {
        self.base_mut().name = name.to_string();
    }

    fn ingredients(&self) -> &Ingredients {
        &self.base().ingredients
    }

    fn ingredient_factory(&self) -> &dyn PizzaIngredientFactory {
        self.base().factory.as_ref()
    }

    fn bake(&self, log: &dyn KitchenLog) {
        log.record(BAKE_LINE);
    }

    fn cut(&self, log: &dyn KitchenLog) {
        log.record(CUT_LINE);
    }

    fn box_up(&self, log: &dyn KitchenLog) {
        log.record(BOX_LINE);
    }

    /// Announces the finished pizza to the customer.
    fn message(&self, log: &dyn KitchenLog) {
        log.record(&format!("-- Customer ordered a {} --", self.name()));
    }

    fn summary(&self) -> PizzaSummary {
        PizzaSummary {
            name: self.name().to_string(),
            kind: self.kind(),
            region: self.ingredient_factory().region(),
            ingredients: self.ingredients().kinds(),
        }
    }
}
