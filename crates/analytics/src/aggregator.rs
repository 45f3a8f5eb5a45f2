//! Walks purchase records and accumulates per-seller figures.

use core_types::{LineItem, Product, SalesData, SellerStat};
use std::collections::HashMap;
use strategies::RevenueStrategy;

/// Builds one `SellerStat` per input seller and fills it from the purchase records.
///
/// * `revenue` grows by each record's `total_amount`.
/// * `profit` grows by `item_revenue - cost` for every line item, where the
///   item revenue comes from the injected strategy.
/// * `sales_count` counts records, `products_sold` sums quantities per SKU.
///
/// Records naming an unknown seller are skipped entirely. Items naming an
/// unknown SKU are costed at zero and handed to the strategy without a product.
/// The returned stats are in seller input order.
pub fn aggregate(data: &SalesData, revenue: &dyn RevenueStrategy) -> Vec<SellerStat> {
    let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();
    let seller_index = index_sellers(data);
    let catalog = index_products(&data.products);

    let mut skipped = 0usize;
    for record in &data.purchase_records {
        let Some(&pos) = seller_index.get(record.seller_id.as_str()) else {
            tracing::debug!(seller_id = %record.seller_id, "Skipping record for unknown seller.");
            skipped += 1;
            continue;
        };
        let seller = &mut stats[pos];

        seller.sales_count += 1;
        seller.revenue += record.total_amount;

        for item in &record.items {
            let product = catalog.get(item.sku.as_str()).copied();
            let cost = line_cost(item, product);
            let item_revenue = revenue.calculate(item, product);

            seller.profit += item_revenue - cost;
            seller.products_sold.add(&item.sku, item.quantity);
        }
    }

    tracing::debug!(
        sellers = stats.len(),
        records = data.purchase_records.len(),
        skipped,
        "Aggregation finished."
    );
    stats
}

/// Purchase cost of a line item. Zero unless the product is known and has a
/// positive purchase price.
pub fn line_cost(item: &LineItem, product: Option<&Product>) -> f64 {
    match product {
        Some(p) if p.purchase_price > 0.0 => p.purchase_price * item.quantity,
        _ => 0.0,
    }
}

/// Maps seller id to its position in `data.sellers`. A repeated id points at
/// its last occurrence.
fn index_sellers(data: &SalesData) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(data.sellers.len());
    for (pos, seller) in data.sellers.iter().enumerate() {
        if index.insert(seller.id.as_str(), pos).is_some() {
            tracing::warn!(seller_id = %seller.id, "Duplicate seller id; the last entry receives its sales.");
        }
    }
    index
}

/// Maps SKU to catalog entry. A repeated SKU resolves to its last occurrence.
fn index_products(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        if index.insert(product.sku.as_str(), product).is_some() {
            tracing::warn!(sku = %product.sku, "Duplicate product sku; the last entry wins.");
        }
    }
    index
}
