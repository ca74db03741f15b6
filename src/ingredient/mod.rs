//! Ingredient capabilities.
//!
//! A pizza is assembled from four independent capabilities: [`Dough`], [`Sauce`], [`Cheese`]
//! and [`Topping`]. Each has a single `prepare` step that writes one line to the
//! [`KitchenLog`]. Concrete variants run `prepare` as part of construction, so an ingredient
//! value always means "this ingredient has been prepared".
//!
//! Region-specific variants live in submodules (see [`ny`]).

pub mod ny;

use crate::kitchen_log::KitchenLog;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// The dough capability.
pub trait Dough: Debug {
    fn prepare(&self, log: &dyn KitchenLog);
}

/// The sauce capability.
pub trait Sauce: Debug {
    fn prepare(&self, log: &dyn KitchenLog);
}

/// The cheese capability.
pub trait Cheese: Debug {
    fn prepare(&self, log: &dyn KitchenLog);
}

/// The topping capability (pepperoni in the NY family).
pub trait Topping: Debug {
    fn prepare(&self, log: &dyn KitchenLog);
}

/// Tag for each ingredient capability, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Dough,
    Sauce,
    Cheese,
    Topping,
}

pub static INGREDIENT_KINDS: [IngredientKind; 4] = [
    IngredientKind::Dough,
    IngredientKind::Sauce,
    IngredientKind::Cheese,
    IngredientKind::Topping,
];

impl Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IngredientKind::Dough => "dough",
                IngredientKind::Sauce => "sauce",
                IngredientKind::Cheese => "cheese",
                IngredientKind::Topping => "topping",
            }
        )
    }
}

/// The ingredient slots owned by a pizza.
///
/// All slots are empty until the pizza is prepared; each pizza variant fills only the
/// slots its recipe needs.
#[derive(Debug, Default)]
pub struct Ingredients {
    pub dough: Option<Box<dyn Dough>>,
    pub sauce: Option<Box<dyn Sauce>>,
    pub cheese: Option<Box<dyn Cheese>>,
    pub topping: Option<Box<dyn Topping>>,
}

impl Ingredients {
    /// Returns true if the slot for `kind` is populated.
    pub fn has(&self, kind: IngredientKind) -> bool {
        match kind {
            IngredientKind::Dough => self.dough.is_some(),
            IngredientKind::Sauce => self.sauce.is_some(),
            IngredientKind::Cheese => self.cheese.is_some(),
            IngredientKind::Topping => self.topping.is_some(),
        }
    }

    /// The populated capabilities, in canonical order.
    pub fn kinds(&self) -> Vec<IngredientKind> {
        INGREDIENT_KINDS
            .iter()
            .copied()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }
}
