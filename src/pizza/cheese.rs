use super::{Pizza, PizzaBase, PizzaKind};
use crate::ingredient_factory::PizzaIngredientFactory;
use crate::kitchen_log::KitchenLog;
use std::sync::Arc;

/// Dough, sauce and cheese. No topping.
#[derive(Debug)]
pub struct CheesePizza {
    base: PizzaBase,
}

impl CheesePizza {
    pub fn new(factory: Arc<dyn PizzaIngredientFactory>) -> Self {
        Self {
            base: PizzaBase::new(factory),
        }
    }
}

impl Pizza for CheesePizza {
    fn kind(&self) -> PizzaKind {
        PizzaKind::Cheese
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::IngredientKind;
    use crate::ingredient_factory::NyPizzaIngredientFactory;
    use crate::kitchen_log::mock::RecordingLog;

    #[test]
    fn prepare_fetches_three_ingredients() {
        let mut pizza = CheesePizza::new(Arc::new(NyPizzaIngredientFactory::new()));
        pizza.set_name("Plain");
        let log = RecordingLog::new();

        assert!(pizza.ingredients().is_empty());
        pizza.prepare(&log);

        log.assert_sequence(&[
            "-- Preparing Plain --",
            "preparing dough...",
            "preparing sauce...",
            "preparing cheese...",
        ]);
        assert!(!pizza.ingredients().has(IngredientKind::Topping));
    }
}
