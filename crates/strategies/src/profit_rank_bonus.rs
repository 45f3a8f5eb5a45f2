use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::ProfitRankBonusParams;
use core_types::SellerStat;

/// Bonus as a rank-dependent share of profit.
///
/// The checks run in a fixed priority order, which matters when there are
/// three or fewer sellers and the conditions overlap:
///
/// 1. no sellers: `0`
/// 2. rank 0: `first_place_rate`
/// 3. ranks 1 and 2: `podium_rate`
/// 4. last rank: `0`
/// 5. everyone else: `base_rate`
///
/// So a lone seller takes the first-place rate, and with two sellers the
/// last one still takes the podium rate.
#[derive(Debug, Clone)]
pub struct ProfitRankBonus {
    params: ProfitRankBonusParams,
}

impl ProfitRankBonus {
    /// Creates a new `ProfitRankBonus`, rejecting negative or non-finite rates.
    pub fn new(params: ProfitRankBonusParams) -> Result<Self, StrategyError> {
        for (name, rate) in [
            ("first_place_rate", params.first_place_rate),
            ("podium_rate", params.podium_rate),
            ("base_rate", params.base_rate),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(StrategyError::InvalidParameters(format!(
                    "{name} must be a non-negative number, got {rate}"
                )));
            }
        }
        Ok(Self { params })
    }
}

impl Default for ProfitRankBonus {
    fn default() -> Self {
        Self {
            params: ProfitRankBonusParams::default(),
        }
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStat) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let profit = if seller.profit.is_nan() { 0.0 } else { seller.profit };

        if index == 0 {
            return profit * self.params.first_place_rate;
        }
        if index == 1 || index == 2 {
            return profit * self.params.podium_rate;
        }
        if index == total - 1 {
            return 0.0;
        }
        profit * self.params.base_rate
    }
}
