//! # Pizza Factory
//!
//! Opens a New York style [`NyPizzaStore`], orders a cheese and a pepperoni pizza, prints the
//! kitchen's progress to stdout and waits for a key press before exiting.
//!
//! Diagnostics are off by default; set `RUST_LOG=info` (or `debug`) to see them on stderr.

use pizza_factory::kitchen_log::ConsoleLog;
use pizza_factory::lifecycle::{run_demo, setup_tracing, wait_for_key_press};
use pizza_factory::store::NyPizzaStore;
use tracing::{debug, error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_tracing();

    info!("Opening NY pizza store");

    let store = NyPizzaStore::new();
    let log = ConsoleLog::new();

    let span = tracing::info_span!("demo_orders");
    match span.in_scope(|| run_demo(&store, &log)) {
        Ok(pizzas) => {
            for pizza in &pizzas {
                debug!(summary = ?pizza.summary(), "Pizza delivered");
            }
            info!(delivered = pizzas.len(), "All orders processed");
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    if let Err(e) = wait_for_key_press().await {
        warn!(error = %e, "Could not read from stdin");
    }

    info!("Store closed");
}
