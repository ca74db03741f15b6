//! Runtime orchestration for the demo binary.
//!
//! - [`setup_tracing`] - Initializes diagnostic logging
//! - [`run_demo`] / [`run_orders`] - Places orders against a store
//! - [`wait_for_key_press`] - The interactive pause before exit

pub mod demo;
pub mod tracing;

pub use self::demo::*;
pub use self::tracing::*;
