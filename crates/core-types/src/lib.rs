//! # Sales Analytics Core Types
//!
//! Layer 0 of the workspace: the records that flow through the analytics
//! pipeline, the identifiers used to pick calculation strategies, and the
//! numeric helpers shared by every other crate.

pub mod enums;
pub mod error;
pub mod numeric;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusStrategyId, RevenueStrategyId};
pub use error::CoreError;
pub use numeric::{coerce_number, round_money};
pub use structs::{
    LineItem, Product, ProductsSold, PurchaseRecord, ResultRecord, SalesData, Seller, SellerStat,
    TopProduct,
};
