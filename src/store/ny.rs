use super::{PizzaStore, StoreError};
use crate::ingredient_factory::{NyPizzaIngredientFactory, PizzaIngredientFactory, Region};
use crate::pizza::{CheesePizza, PepperoniPizza, Pizza, PizzaKind};
use std::sync::Arc;
use tracing::debug;

pub const NY_CHEESE_NAME: &str = "New York Style Cheese Pizza";
pub const NY_PEPPERONI_NAME: &str = "New York Style Pepperoni Pizza";

/// New York style store. Every pizza gets a fresh [`NyPizzaIngredientFactory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NyPizzaStore;

impl NyPizzaStore {
    pub fn new() -> Self {
        Self
    }
}

impl PizzaStore for NyPizzaStore {
    fn region(&self) -> Region {
        Region::Ny
    }

    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>, StoreError> {
        let kind: PizzaKind = kind.parse()?;
        let factory: Arc<dyn PizzaIngredientFactory> = Arc::new(NyPizzaIngredientFactory::new());

        let mut pizza: Box<dyn Pizza> = match kind {
            PizzaKind::Cheese => Box::new(CheesePizza::new(factory)),
            PizzaKind::Pepperoni => Box::new(PepperoniPizza::new(factory)),
        };
        pizza.set_name(match kind {
            PizzaKind::Cheese => NY_CHEESE_NAME,
            PizzaKind::Pepperoni => NY_PEPPERONI_NAME,
        });

        debug!(%kind, pizza = pizza.name(), "Created pizza");
        Ok(pizza)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_named_unprepared_pizzas() {
        let store = NyPizzaStore::new();

        let cheese = store.create_pizza("cheese").unwrap();
        assert_eq!(cheese.name(), NY_CHEESE_NAME);
        assert_eq!(cheese.kind(), PizzaKind::Cheese);
        assert!(cheese.ingredients().is_empty());

        let pepperoni = store.create_pizza("pepperoni").unwrap();
        assert_eq!(pepperoni.name(), NY_PEPPERONI_NAME);
        assert_eq!(pepperoni.ingredient_factory().region(), Region::Ny);
    }

    #[test]
    fn unknown_type_is_a_typed_error() {
        let store = NyPizzaStore::new();
        let err = store.create_pizza("hawaiian").unwrap_err();
        assert_eq!(err, StoreError::UnknownPizzaType("hawaiian".to_string()));
        assert_eq!(err.to_string(), "Unknown pizza type: hawaiian");
    }
}
