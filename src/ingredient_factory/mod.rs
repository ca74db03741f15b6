//! The abstract ingredient factory.
//!
//! [`PizzaIngredientFactory`] groups one creation operation per ingredient capability. Each
//! region implements it with its own ingredient variants. Pizzas receive a factory at
//! construction time and never look one up on their own, so adding a region only means adding a
//! factory and its ingredients.

mod ny;

pub use ny::NyPizzaIngredientFactory;

use crate::ingredient::{Cheese, Dough, Sauce, Topping};
use crate::kitchen_log::KitchenLog;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// The family tag selecting which concrete ingredients and store behavior are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Ny,
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Ny => write!(f, "NY"),
        }
    }
}

/// Produces fresh, already prepared ingredients for one region.
///
/// Every call returns a new instance; factories hold no state beyond their region.
pub trait PizzaIngredientFactory: Debug {
    fn region(&self) -> Region;

    fn create_dough(&self, log: &dyn KitchenLog) -> Box<dyn Dough>;
    fn create_sauce(&self, log: &dyn KitchenLog) -> Box<dyn Sauce>;
    fn create_cheese(&self, log: &dyn KitchenLog) -> Box<dyn Cheese>;
    fn create_topping(&self, log: &dyn KitchenLog) -> Box<dyn Topping>;
}
