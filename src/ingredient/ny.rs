//! New York style ingredients.
//!
//! Each type prepares itself when constructed and records one line.

use super::{Cheese, Dough, Sauce, Topping};
use crate::kitchen_log::KitchenLog;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinCrustDough;

impl ThinCrustDough {
    pub fn new(log: &dyn KitchenLog) -> Self {
        let dough = Self;
        dough.prepare(log);
        dough
    }
}

impl Dough for ThinCrustDough {
    fn prepare(&self, log: &dyn KitchenLog) {
        debug!(ingredient = "thin crust dough", "Preparing");
        log.record("preparing dough...");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarinaraSauce;

impl MarinaraSauce {
    pub fn new(log: &dyn KitchenLog) -> Self {
        let sauce = Self;
        sauce.prepare(log);
        sauce
    }
}

impl Sauce for MarinaraSauce {
    fn prepare(&self, log: &dyn KitchenLog) {
        debug!(ingredient = "marinara sauce", "Preparing");
        log.record("preparing sauce...");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReggianoCheese;

impl ReggianoCheese {
    pub fn new(log: &dyn KitchenLog) -> Self {
        let cheese = Self;
        cheese.prepare(log);
        cheese
    }
}

impl Cheese for ReggianoCheese {
    fn prepare(&self, log: &dyn KitchenLog) {
        debug!(ingredient = "reggiano cheese", "Preparing");
        log.record("preparing cheese...");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicedPepperoni;

impl SlicedPepperoni {
    pub fn new(log: &dyn KitchenLog) -> Self {
        let pepperoni = Self;
        pepperoni.prepare(log);
        pepperoni
    }
}

impl Topping for SlicedPepperoni {
    fn prepare(&self, log: &dyn KitchenLog) {
        debug!(ingredient = "sliced pepperoni", "Preparing");
        log.record("preparing pepperoni...");
    }
}
