use super::{Pizza, PizzaBase, PizzaKind};
use crate::ingredient_factory::PizzaIngredientFactory;
use crate::kitchen_log::KitchenLog;
use std::sync::Arc;

/// Dough, sauce, cheese and a pepperoni topping.
#[derive(Debug)]
pub struct PepperoniPizza {
    base: PizzaBase,
}

impl PepperoniPizza {
    pub fn new(factory: Arc<dyn PizzaIngredientFactory>) -> Self {
        Self {
            base: PizzaBase::new(factory),
        }
    }
}

impl Pizza for PepperoniPizza {
    fn kind(&self) -> PizzaKind {
        PizzaKind::Pepperoni
    }

    fn base(&self) -> &PizzaBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PizzaBase {
        &mut self.base
    }

    fn prepare(&mut self, log: &dyn KitchenLog) {
        self.base.announce_preparation(log);
        let (factory, ingredients) = self.base.factory_and_ingredients();
        ingredients.dough = Some(factory.create_dough(log));
        ingredients.sauce = Some(factory.create_sauce(log));
        ingredients.cheese = Some(factory.create_cheese(log));
        ingredients.topping = Some(factory.create_topping(log));
    }
}
