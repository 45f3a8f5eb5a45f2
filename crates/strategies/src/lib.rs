//! # Sales Strategy Library
//!
//! This crate contains the pluggable calculation rules used by the analytics
//! pipeline. It defines two capability traits and ships one default
//! implementation of each.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure functions of their inputs. No I/O, no shared state.
//!   Depends only on `core-types` and `configuration`.
//! - **Injection, not inheritance:** the analytics engine is handed a
//!   `&dyn RevenueStrategy` and a `&dyn BonusStrategy` and never knows which
//!   concrete rule it is running. Plain closures with the right signature
//!   work too.
//!
//! ## Public API
//!
//! - `RevenueStrategy` / `BonusStrategy`: the traits.
//! - `SimpleRevenue` / `ProfitRankBonus`: the shipped defaults.
//! - `create_revenue_strategy` / `create_bonus_strategy`: the factory.

pub mod error;
pub mod factory;
pub mod profit_rank_bonus;
pub mod simple_revenue;

pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use profit_rank_bonus::ProfitRankBonus;
pub use simple_revenue::SimpleRevenue;

use core_types::{LineItem, Product, SellerStat};

/// Computes the revenue recognised for a single line item.
///
/// `product` is `None` when the line item's SKU is not in the catalog;
/// implementations must tolerate that.
pub trait RevenueStrategy: Send + Sync {
    fn calculate(&self, item: &LineItem, product: Option<&Product>) -> f64;
}

/// Computes a seller's bonus from their position in the profit ranking.
///
/// * `index` - Zero-based rank, 0 being the most profitable seller.
/// * `total` - Number of ranked sellers.
/// * `seller` - The seller's aggregated stats, with unrounded profit.
pub trait BonusStrategy: Send + Sync {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStat) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, Option<&Product>) -> f64 + Send + Sync,
{
    fn calculate(&self, item: &LineItem, product: Option<&Product>) -> f64 {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> f64 + Send + Sync,
{
    fn calculate(&self, index: usize, total: usize, seller: &SellerStat) -> f64 {
        self(index, total, seller)
    }
}
