use crate::error::AnalyticsError;
use crate::{aggregator, ranker, reporter, validator};
use core_types::{ResultRecord, SalesData};
use serde_json::Value;
use strategies::{BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue};

/// The calculation strategies injected into a run.
///
/// Either slot may be left empty; validation reports the omission as
/// `AnalyticsError::MissingStrategy` before any work is done.
#[derive(Default)]
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Creates options with neither strategy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the shipped `SimpleRevenue` and `ProfitRankBonus` rules.
    pub fn defaults() -> Self {
        Self::new()
            .with_revenue_strategy(SimpleRevenue::new())
            .with_bonus_strategy(ProfitRankBonus::default())
    }

    pub fn with_revenue_strategy(self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.with_boxed_revenue_strategy(Box::new(strategy))
    }

    pub fn with_bonus_strategy(self, strategy: impl BonusStrategy + 'static) -> Self {
        self.with_boxed_bonus_strategy(Box::new(strategy))
    }

    /// Accepts a strategy straight from `strategies::create_revenue_strategy`.
    pub fn with_boxed_revenue_strategy(mut self, strategy: Box<dyn RevenueStrategy>) -> Self {
        self.calculate_revenue = Some(strategy);
        self
    }

    /// Accepts a strategy straight from `strategies::create_bonus_strategy`.
    pub fn with_boxed_bonus_strategy(mut self, strategy: Box<dyn BonusStrategy>) -> Self {
        self.calculate_bonus = Some(strategy);
        self
    }

    pub fn revenue_strategy(&self) -> Option<&dyn RevenueStrategy> {
        self.calculate_revenue.as_deref()
    }

    pub fn bonus_strategy(&self) -> Option<&dyn BonusStrategy> {
        self.calculate_bonus.as_deref()
    }
}

/// A stateless calculator for deriving per-seller sales results.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates an untyped dataset and the options, then runs the pipeline.
    ///
    /// Data is checked before options. Nothing is aggregated unless both pass.
    pub fn analyze(
        &self,
        data: Option<&Value>,
        options: Option<&AnalysisOptions>,
    ) -> Result<Vec<ResultRecord>, AnalyticsError> {
        let data = validator::validate_data(data)?;
        let strategies = validator::validate_options(options)?;
        Ok(self.calculate(&data, strategies.revenue, strategies.bonus))
    }

    /// The main entry point for already-typed data.
    ///
    /// # Arguments
    ///
    /// * `data` - Sellers, catalog and purchase records.
    /// * `revenue` - Revenue recognised per line item.
    /// * `bonus` - Bonus per profit rank.
    ///
    /// # Returns
    ///
    /// One `ResultRecord` per seller, most profitable first.
    pub fn calculate(
        &self,
        data: &SalesData,
        revenue: &dyn RevenueStrategy,
        bonus: &dyn BonusStrategy,
    ) -> Vec<ResultRecord> {
        let mut stats = aggregator::aggregate(data, revenue);
        ranker::rank(&mut stats, bonus);
        let results = reporter::report(&mut stats);

        tracing::info!(
            sellers = results.len(),
            purchase_records = data.purchase_records.len(),
            "Sales analysis complete."
        );
        results
    }
}

/// Validates `data` and `options` and computes the per-seller report.
///
/// Shorthand for `AnalyticsEngine::new().analyze(data, options)`.
pub fn analyze_sales_data(
    data: Option<&Value>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<ResultRecord>, AnalyticsError> {
    AnalyticsEngine::new().analyze(data, options)
}
