//! Builds the top-products lists and the final output records.

use crate::ranker::{descending, ranking_value};
use core_types::{ProductsSold, ResultRecord, SellerStat, TopProduct, round_money};

/// Maximum number of entries in a seller's `top_products`.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Fills in `top_products` on every stat and returns the rounded output records,
/// in the same order as `stats`.
pub fn report(stats: &mut [SellerStat]) -> Vec<ResultRecord> {
    for seller in stats.iter_mut() {
        seller.top_products = top_products(&seller.products_sold, TOP_PRODUCTS_LIMIT);
    }
    stats.iter().map(to_record).collect()
}

/// The `limit` best sellers by quantity. Equal quantities keep first-sale order.
pub fn top_products(sold: &ProductsSold, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = sold
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.to_string(),
            quantity,
        })
        .collect();
    products.sort_by(|a, b| descending(ranking_value(a.quantity), ranking_value(b.quantity)));
    products.truncate(limit);
    products
}

fn to_record(seller: &SellerStat) -> ResultRecord {
    ResultRecord {
        seller_id: seller.id.clone(),
        name: seller.name.clone(),
        revenue: round_money(seller.revenue),
        profit: round_money(seller.profit),
        sales_count: seller.sales_count,
        top_products: seller.top_products.clone(),
        bonus: round_money(seller.bonus),
    }
}
