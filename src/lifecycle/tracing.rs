//! # Diagnostic Logging
//!
//! Diagnostics use the `tracing` crate and go to **stderr**, so stdout only carries the
//! kitchen lines written through [`ConsoleLog`](crate::kitchen_log::ConsoleLog).
//!
//! ## What Gets Traced
//!
//! - **Orders**: each `order_pizza` call runs in an `order_pizza` span with `kind` and `region`
//! - **Rejections**: unknown pizza types at `warn`
//! - **Ingredients**: every prepared ingredient at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Silent diagnostics (default)
//! cargo run
//!
//! # Order lifecycle
//! RUST_LOG=info cargo run
//!
//! # Ingredient level detail
//! RUST_LOG=pizza_factory=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the stderr output for one order looks like:
//!
//! ```text
//! DEBUG order_pizza{kind="cheese" region=NY}: Created pizza kind=cheese pizza="New York Style Cheese Pizza"
//! DEBUG order_pizza{kind="cheese" region=NY}: Preparing ingredient="thin crust dough"
//! ...
//! INFO order_pizza{kind="cheese" region=NY}: Order completed pizza="New York Style Cheese Pizza"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
