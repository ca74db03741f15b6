#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pizza Factory
//!
//! > **Abstract Factory and Factory Method, served as pizza.**
//!
//! A store creates region-specific pizzas, and each pizza assembles its ingredients from a
//! region-specific ingredient factory.
//!
//! ## 🏗️ Design Philosophy
//!
//! Three seams, three traits:
//! - **[`PizzaStore`](store::PizzaStore)**: the fixed order pipeline is a provided method;
//!   only `create_pizza` (the factory method) varies per store.
//! - **[`Pizza`](pizza::Pizza)**: `prepare` varies per pizza; bake, cut, box and the customer
//!   message are shared.
//! - **[`PizzaIngredientFactory`](ingredient_factory::PizzaIngredientFactory)**: one creation
//!   method per ingredient capability, one implementation per region.
//!
//! The factory is handed to each pizza at construction time. Adding a region means adding a
//! factory, its ingredients and a store; pizzas and the pipeline stay untouched.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Injected Output
//! Every kitchen line goes through a [`KitchenLog`](kitchen_log::KitchenLog) passed by the
//! caller. The binary uses [`ConsoleLog`](kitchen_log::ConsoleLog); tests use
//! [`RecordingLog`](kitchen_log::mock::RecordingLog) and assert on the exact line sequence.
//!
//! ### 2. Typed Errors
//! An unknown pizza type fails with [`StoreError::UnknownPizzaType`](store::StoreError)
//! before any preparation starts.
//!
//! ### 3. Observability
//! Diagnostics use `tracing` on stderr. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`ingredient`] - Ingredient capabilities and the NY variants
//! - [`ingredient_factory`] - The abstract factory and [`Region`](ingredient_factory::Region)
//! - [`pizza`] - The pizza trait, shared steps, cheese and pepperoni pizzas
//! - [`store`] - Stores and the order pipeline
//! - [`kitchen_log`] - Output sinks
//! - [`lifecycle`] - Tracing setup and the demo driver
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod ingredient;
pub mod ingredient_factory;
pub mod kitchen_log;
pub mod lifecycle;
pub mod pizza;
pub mod store;
