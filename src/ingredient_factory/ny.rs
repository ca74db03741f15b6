use super::{PizzaIngredientFactory, Region};
use crate::ingredient::ny::{MarinaraSauce, ReggianoCheese, SlicedPepperoni, ThinCrustDough};
use crate::ingredient::{Cheese, Dough, Sauce, Topping};
use crate::kitchen_log::KitchenLog;

/// Ingredient family for New York style pizzas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NyPizzaIngredientFactory;

impl NyPizzaIngredientFactory {
    pub fn new() -> Self {
        Self
    }
}

impl PizzaIngredientFactory for NyPizzaIngredientFactory {
    fn region(&self) -> Region {
        Region::Ny
    }

    fn create_dough(&self, log: &dyn KitchenLog) -> Box<dyn Dough> {
        Box::new(ThinCrustDough::new(log))
    }

    fn create_sauce(&self, log: &dyn KitchenLog) -> Box<dyn Sauce> {
        Box::new(MarinaraSauce::new(log))
    }

    fn create_cheese(&self, log: &dyn KitchenLog) -> Box<dyn Cheese> {
        Box::new(ReggianoCheese::new(log))
    }

    fn create_topping(&self, log: &dyn KitchenLog) -> Box<dyn Topping> {
        Box::new(SlicedPepperoni::new(log))
    }
}
