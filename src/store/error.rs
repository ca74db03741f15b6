//! Error types for pizza stores.

use thiserror::Error;

/// Errors that can occur while ordering a pizza.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The requested pizza type is not on this store's menu.
    #[error("Unknown pizza type: {0}")]
    UnknownPizzaType(String),
}
