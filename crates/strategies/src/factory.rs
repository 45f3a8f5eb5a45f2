use crate::error::StrategyError;
use crate::profit_rank_bonus::ProfitRankBonus;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::StrategySettings;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates the revenue strategy selected by `id`.
pub fn create_revenue_strategy(
    id: RevenueStrategyId,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    tracing::debug!(strategy = %id, "Creating revenue strategy.");
    // The compiler will error if a new RevenueStrategyId is added but not handled here.
    match id {
        RevenueStrategyId::Simple => Ok(Box::new(SimpleRevenue::new())),
    }
}

/// Creates the bonus strategy selected by `id`, parameterised from `settings`.
pub fn create_bonus_strategy(
    id: BonusStrategyId,
    settings: &StrategySettings,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    tracing::debug!(strategy = %id, "Creating bonus strategy.");
    match id {
        BonusStrategyId::ProfitRank => {
            let params = settings.profit_rank.clone();
            Ok(Box::new(ProfitRankBonus::new(params)?))
        }
    }
}
