use core_types::{BonusStrategyId, RevenueStrategyId};
use serde::{Deserialize, Serialize};

/// The root configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategies: StrategySettings,
}

/// Selects the calculation strategies handed to the analytics engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Which line-item revenue calculator to use.
    #[serde(default)]
    pub revenue: RevenueStrategyId,
    /// Which rank-based bonus calculator to use.
    #[serde(default)]
    pub bonus: BonusStrategyId,
    #[serde(default)]
    pub profit_rank: ProfitRankBonusParams,
}

/// Rates for the profit-rank bonus. Each rate is a fraction of profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitRankBonusParams {
    /// Applied to the seller ranked first.
    pub first_place_rate: f64,
    /// Applied to the sellers ranked second and third.
    pub podium_rate: f64,
    /// Applied to everyone else except the last-ranked seller.
    pub base_rate: f64,
}

impl Default for ProfitRankBonusParams {
    fn default() -> Self {
        Self {
            first_place_rate: 0.15,
            podium_rate: 0.10,
            base_rate: 0.05,
        }
    }
}
