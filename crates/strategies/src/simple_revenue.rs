use crate::RevenueStrategy;
use core_types::{LineItem, Product};

/// Revenue as `sale_price * quantity * (1 - discount / 100)`.
///
/// The discount factor is not clamped: a discount above 100 yields negative
/// revenue and a negative discount inflates it. The catalog entry is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn calculate(&self, item: &LineItem, _product: Option<&Product>) -> f64 {
        let factor = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity * factor
    }
}
