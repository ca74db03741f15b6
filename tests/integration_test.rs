use pizza_factory::ingredient::IngredientKind;
use pizza_factory::ingredient_factory::Region;
use pizza_factory::kitchen_log::mock::RecordingLog;
use pizza_factory::lifecycle::{run_demo, run_orders, wait_for_key_press_from, DEMO_ORDERS};
use pizza_factory::pizza::{Pizza, PizzaKind, PizzaSummary, BAKE_LINE, BOX_LINE, CUT_LINE};
use pizza_factory::store::{NyPizzaStore, StoreError};

/// Full demo run: two orders, each following the fixed line order.
#[test]
fn test_demo_places_both_orders() {
    let store = NyPizzaStore::new();
    let log = RecordingLog::new();

    let pizzas = run_demo(&store, &log).expect("demo orders are all on the menu");

    let names: Vec<&str> = pizzas.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec!["New York Style Cheese Pizza", "New York Style Pepperoni Pizza"]
    );
    assert_eq!(DEMO_ORDERS, ["cheese", "pepperoni"]);

    let lines = log.lines();
    assert_eq!(lines.len(), 8 + 9);
    assert_eq!(lines[0], "-- Preparing New York Style Cheese Pizza --");
    assert_eq!(lines[8], "-- Preparing New York Style Pepperoni Pizza --");
    assert_eq!(
        lines.last().map(String::as_str),
        Some("-- Customer ordered a New York Style Pepperoni Pizza --")
    );
}

/// For every order the ingredient lines come first, then bake, cut, box and the message.
#[test]
fn test_pipeline_order_never_varies() {
    let store = NyPizzaStore::new();

    for kind in DEMO_ORDERS {
        let log = RecordingLog::new();
        let pizza = run_orders(&store, &[kind], &log).unwrap().remove(0);
        let lines = log.lines();

        let position = |needle: &str| lines.iter().position(|l| l == needle).unwrap();
        let last_ingredient = lines
            .iter()
            .rposition(|l| l.starts_with("preparing "))
            .unwrap();

        assert_eq!(position(format!("-- Preparing {} --", pizza.name()).as_str()), 0);
        assert!(last_ingredient < position(BAKE_LINE));
        assert!(position(BAKE_LINE) < position(CUT_LINE));
        assert!(position(CUT_LINE) < position(BOX_LINE));
        assert_eq!(position(BOX_LINE), lines.len() - 2);
        assert_eq!(
            lines[lines.len() - 1],
            format!("-- Customer ordered a {} --", pizza.name())
        );
    }
}

/// A rejected order stops the run; earlier orders have already gone through the kitchen.
#[test]
fn test_run_orders_stops_at_unknown_type() {
    let store = NyPizzaStore::new();
    let log = RecordingLog::new();

    let result = run_orders(&store, &["cheese", "hawaiian", "pepperoni"], &log);

    assert_eq!(
        result.unwrap_err(),
        StoreError::UnknownPizzaType("hawaiian".to_string())
    );
    assert!(log.contains("-- Customer ordered a New York Style Cheese Pizza --"));
    assert!(!log.contains("preparing pepperoni..."));
}

/// Summaries serialize with lowercase names.
#[test]
fn test_summary_serializes() {
    let store = NyPizzaStore::new();
    let pizzas = run_demo(&store, &RecordingLog::new()).unwrap();

    let summary = pizzas[1].summary();
    assert_eq!(
        summary,
        PizzaSummary {
            name: "New York Style Pepperoni Pizza".to_string(),
            kind: PizzaKind::Pepperoni,
            region: Region::Ny,
            ingredients: vec![
                IngredientKind::Dough,
                IngredientKind::Sauce,
                IngredientKind::Cheese,
                IngredientKind::Topping,
            ],
        }
    );

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["kind"], "pepperoni");
    assert_eq!(json["region"], "ny");
    assert_eq!(json["ingredients"][3], "topping");

    let kind: PizzaKind = serde_json::from_str("\"cheese\"").unwrap();
    assert_eq!(kind, PizzaKind::Cheese);
}

/// The pause returns after one byte, and also when input is already closed.
#[tokio::test]
async fn test_wait_for_key_press() {
    let input: &[u8] = b"\n";
    wait_for_key_press_from(input).await.unwrap();

    let closed: &[u8] = b"";
    wait_for_key_press_from(closed).await.unwrap();
}
