//! Pizza stores.
//!
//! A [`PizzaStore`] runs every order through the same fixed pipeline:
//!
//! ```text
//! create_pizza -> prepare -> bake -> cut -> box_up -> message
//! ```
//!
//! Only [`PizzaStore::create_pizza`] is store-specific. It picks the pizza variant for a type
//! string, binds it to the store's regional ingredient factory and names it.
//! [`PizzaStore::order_pizza`] is provided and identical for every store.
//!
//! Unknown type strings fail with [`StoreError::UnknownPizzaType`] before anything reaches the
//! kitchen log.

pub mod error;
mod ny;

pub use error::*;
pub use ny::{NyPizzaStore, NY_CHEESE_NAME, NY_PEPPERONI_NAME};

use crate::ingredient_factory::Region;
use crate::kitchen_log::KitchenLog;
use crate::pizza::Pizza;
use tracing::{info, info_span, warn};

pub trait PizzaStore {
    fn region(&self) -> Region;

    /// Returns a named, unprepared pizza for `kind`, bound to this store's ingredient factory.
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>, StoreError>;

    /// Creates the pizza and runs it through the full pipeline, returning it to the caller.
    fn order_pizza(&self, kind: &str, log: &dyn KitchenLog) -> Result<Box<dyn Pizza>, StoreError> {
        let span = info_span!("order_pizza", kind, region = %self.region());
        let _guard = span.enter();

        let mut pizza = match self.create_pizza(kind) {
            Ok(pizza) => pizza,
            Err(e) => {
                warn!(error = %e, "Order rejected");
                return Err(e);
            }
        };

        pizza.prepare(log);
        pizza.bake(log);
        pizza.cut(log);
        pizza.box_up(log);
        pizza.message(log);

        info!(pizza = pizza.name(), "Order completed");
        Ok(pizza)
    }
}
