use crate::numeric::{deserialize_number, deserialize_text};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A seller who receives credit for purchase records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub last_name: String,
}

impl Seller {
    /// The display name used in reports: first and last name separated by a space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry, keyed by `sku`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_text")]
    pub sku: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub purchase_price: f64,
}

/// A single product line within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Missing SKUs read as an empty string and are costed at zero.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub sku: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub sale_price: f64,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub quantity: f64,
    /// Percentage discount. Missing or non-numeric values read as `0.0`.
    #[serde(default, deserialize_with = "deserialize_number")]
    pub discount: f64,
}

/// One transaction attributed to a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Missing ids read as an empty string, which matches no seller.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub seller_id: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The three input collections consumed by the analytics pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// Quantities sold per SKU, kept in first-sale order.
///
/// Only SKUs that appeared on a seller's line items are present; the
/// catalog is never used to pre-populate the tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsSold {
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl ProductsSold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the tally for `sku`, starting from zero on first sight.
    pub fn add(&mut self, sku: &str, quantity: f64) {
        match self.positions.get(sku) {
            Some(&pos) => self.entries[pos].1 += quantity,
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<f64> {
        self.positions.get(sku).map(|&pos| self.entries[pos].1)
    }

    /// Iterates `(sku, quantity)` pairs in first-sale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(sku, qty)| (sku.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_quantity(&self) -> f64 {
        self.entries.iter().map(|(_, qty)| qty).sum()
    }
}

/// A `{sku, quantity}` pair in a seller's best-seller list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: f64,
}

/// Per-seller working state, mutated by the aggregation and ranking stages.
///
/// `revenue` and `profit` hold full-precision running sums; only the final
/// report rounds them.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: usize,
    pub products_sold: ProductsSold,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

impl SellerStat {
    /// Creates a zeroed-out stat for `seller`.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: ProductsSold::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }
}

/// The final, rounded per-seller output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: usize,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}
