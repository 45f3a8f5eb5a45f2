// Property-based tests for the sales analytics pipeline.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::HashSet;

use analytics::{AnalysisOptions, TOP_PRODUCTS_LIMIT, aggregator, analyze_sales_data};
use core_types::{ResultRecord, SalesData};
use proptest::prelude::*;
use serde_json::{Value, json};
use strategies::SimpleRevenue;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

const SKUS: usize = 14;

fn sku(n: usize) -> String {
    format!("SKU_{n:03}")
}

/// Arbitrary line item over a fixed SKU pool. `SKU_013` is never in the catalog.
fn arb_item() -> impl Strategy<Value = Value> {
    (0..SKUS, 0.0f64..500.0, 0u32..20, prop_oneof![3 => 0.0f64..30.0, 1 => Just(0.0)])
        .prop_map(|(n, sale_price, quantity, discount)| {
            json!({
                "sku": sku(n),
                "sale_price": (sale_price * 100.0).round() / 100.0,
                "quantity": quantity,
                "discount": discount.round()
            })
        })
}

/// A record for seller `0..sellers`, or for an unknown seller when the index overflows.
fn arb_record(sellers: usize) -> impl Strategy<Value = Value> {
    (0..sellers + 2, 0.0f64..5000.0, prop::collection::vec(arb_item(), 0..6)).prop_map(
        move |(seller, total, items)| {
            let seller_id = if seller < sellers {
                format!("seller_{seller}")
            } else {
                format!("ghost_{seller}")
            };
            json!({
                "seller_id": seller_id,
                "total_amount": (total * 100.0).round() / 100.0,
                "items": items
            })
        },
    )
}

fn arb_dataset() -> impl Strategy<Value = Value> {
    (0usize..8).prop_flat_map(|sellers| {
        let catalog = prop::collection::vec(0.0f64..300.0, SKUS - 1);
        let records = prop::collection::vec(arb_record(sellers), 0..40);
        (Just(sellers), catalog, records).prop_map(|(sellers, prices, records)| {
            let sellers: Vec<Value> = (0..sellers)
                .map(|n| json!({"id": format!("seller_{n}"), "first_name": "F", "last_name": n}))
                .collect();
            let products: Vec<Value> = prices
                .iter()
                .enumerate()
                .map(|(n, price)| json!({"sku": sku(n), "purchase_price": price}))
                .collect();
            json!({
                "sellers": sellers,
                "products": products,
                "purchase_records": records
            })
        })
    })
}

fn run(data: &Value) -> Vec<ResultRecord> {
    analyze_sales_data(Some(data), Some(&AnalysisOptions::defaults())).unwrap()
}

fn has_two_decimals(value: f64) -> bool {
    let cents = value * 100.0;
    (cents - cents.round()).abs() < 1e-6
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn one_record_per_seller(data in arb_dataset()) {
        let results = run(&data);
        let sellers = data["sellers"].as_array().unwrap();
        prop_assert_eq!(results.len(), sellers.len());

        let ids: HashSet<_> = results.iter().map(|r| r.seller_id.clone()).collect();
        prop_assert_eq!(ids.len(), results.len());
        for seller in sellers {
            prop_assert!(ids.contains(seller["id"].as_str().unwrap()));
        }
    }

    #[test]
    fn ordered_by_non_increasing_profit(data in arb_dataset()) {
        let results = run(&data);
        for pair in results.windows(2) {
            prop_assert!(pair[0].profit >= pair[1].profit, "{} < {}", pair[0].profit, pair[1].profit);
        }
    }

    #[test]
    fn money_has_at_most_two_decimals(data in arb_dataset()) {
        for r in run(&data) {
            prop_assert!(has_two_decimals(r.revenue), "revenue {}", r.revenue);
            prop_assert!(has_two_decimals(r.profit), "profit {}", r.profit);
            prop_assert!(has_two_decimals(r.bonus), "bonus {}", r.bonus);
        }
    }

    #[test]
    fn top_products_bounded_and_sorted(data in arb_dataset()) {
        for r in run(&data) {
            prop_assert!(r.top_products.len() <= TOP_PRODUCTS_LIMIT);
            for pair in r.top_products.windows(2) {
                prop_assert!(pair[0].quantity >= pair[1].quantity);
            }
        }
    }

    #[test]
    fn sales_count_matches_attributed_records(data in arb_dataset()) {
        let results = run(&data);
        let records = data["purchase_records"].as_array().unwrap();

        for r in &results {
            let mine: Vec<&Value> = records
                .iter()
                .filter(|rec| rec["seller_id"] == r.seller_id.as_str())
                .collect();
            prop_assert_eq!(r.sales_count, mine.len());
        }
    }

    #[test]
    fn products_sold_totals_match_attributed_quantities(data in arb_dataset()) {
        let typed: SalesData = serde_json::from_value(data.clone()).unwrap();
        let stats = aggregator::aggregate(&typed, &SimpleRevenue);
        let records = data["purchase_records"].as_array().unwrap();

        prop_assert_eq!(stats.len(), typed.sellers.len());
        for stat in &stats {
            let expected: f64 = records
                .iter()
                .filter(|rec| rec["seller_id"] == stat.id.as_str())
                .flat_map(|rec| rec["items"].as_array().unwrap())
                .map(|item| item["quantity"].as_f64().unwrap())
                .sum();
            prop_assert_eq!(stat.products_sold.total_quantity(), expected);
        }
    }

    #[test]
    fn unknown_seller_records_contribute_nothing(data in arb_dataset()) {
        let mut cleaned = data.clone();
        cleaned["purchase_records"]
            .as_array_mut()
            .unwrap()
            .retain(|rec| rec["seller_id"].as_str().unwrap().starts_with("seller_"));
        prop_assert_eq!(run(&data), run(&cleaned));
    }
}
