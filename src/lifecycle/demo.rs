use crate::kitchen_log::KitchenLog;
use crate::pizza::Pizza;
use crate::store::{PizzaStore, StoreError};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;

/// The orders placed by the demo binary, in order.
pub const DEMO_ORDERS: [&str; 2] = ["cheese", "pepperoni"];

/// Places each order in sequence, stopping at the first rejected one.
pub fn run_orders(
    store: &dyn PizzaStore,
    kinds: &[&str],
    log: &dyn KitchenLog,
) -> Result<Vec<Box<dyn Pizza>>, StoreError> {
    info!(region = %store.region(), orders = kinds.len(), "Placing orders");
    kinds
        .iter()
        .map(|kind| store.order_pizza(kind, log))
        .collect()
}

/// Places [`DEMO_ORDERS`] against `store`.
pub fn run_demo(
    store: &dyn PizzaStore,
    log: &dyn KitchenLog,
) -> Result<Vec<Box<dyn Pizza>>, StoreError> {
    run_orders(store, &DEMO_ORDERS, log)
}

/// Waits until a single byte is read from stdin, or stdin is closed.
pub async fn wait_for_key_press() -> std::io::Result<()> {
    wait_for_key_press_from(tokio::io::stdin()).await
}

/// Waits until a single byte is read from `input`, or `input` reaches EOF.
pub async fn wait_for_key_press_from<R: AsyncRead + Unpin>(mut input: R) -> std::io::Result<()> {
    let mut key = [0u8; 1];
    input.read(&mut key).await?;
    Ok(())
}
