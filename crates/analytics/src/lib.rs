//! # Sales Analytics Engine
//!
//! This crate turns sellers, a product catalog and purchase records into a
//! ranked per-seller report: revenue, profit, number of sales, a bonus and
//! the ten best-selling products.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. No I/O, no threads, no
//!   shared state. It depends only on `core-types` and `strategies`.
//! - **Strict phases:** Validator, Aggregator, Ranker and Reporter run once,
//!   in that order. Validation completes before any aggregation starts.
//! - **Injected rules:** revenue per line item and bonus per rank come from
//!   the caller through `AnalysisOptions`.
//!
//! ## Public API
//!
//! - `analyze_sales_data`: validate an untyped dataset and run the pipeline.
//! - `AnalyticsEngine`: the stateless calculator over already-typed data.
//! - `AnalysisOptions`: the two injected strategies.
//! - `AnalyticsError`: the errors surfaced by validation.

// Declare the modules that constitute this crate.
pub mod aggregator;
pub mod engine;
pub mod error;
pub mod ranker;
pub mod reporter;
pub mod validator;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalysisOptions, AnalyticsEngine, analyze_sales_data};
pub use error::AnalyticsError;
pub use reporter::TOP_PRODUCTS_LIMIT;
