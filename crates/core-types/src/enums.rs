use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which line-item revenue calculator to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategyId {
    /// `sale_price * quantity * (1 - discount / 100)`.
    #[default]
    Simple,
}

/// Identifies which rank-based bonus calculator to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategyId {
    /// A percentage of profit that depends on the seller's rank.
    #[default]
    ProfitRank,
}

impl FromStr for RevenueStrategyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(RevenueStrategyId::Simple),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}

impl FromStr for BonusStrategyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "profit_rank" => Ok(BonusStrategyId::ProfitRank),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for RevenueStrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueStrategyId::Simple => write!(f, "simple"),
        }
    }
}

impl fmt::Display for BonusStrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusStrategyId::ProfitRank => write!(f, "profit_rank"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_ids() {
        assert_eq!("Simple".parse::<RevenueStrategyId>().unwrap(), RevenueStrategyId::Simple);
        assert_eq!("profit-rank".parse::<BonusStrategyId>().unwrap(), BonusStrategyId::ProfitRank);
    }

    #[test]
    fn rejects_unknown_ids() {
        assert!(matches!(
            "tiered".parse::<BonusStrategyId>(),
            Err(CoreError::UnknownStrategy(s)) if s == "tiered"
        ));
    }

    #[test]
    fn display_matches_serde_name() {
        let json = serde_json::to_string(&BonusStrategyId::ProfitRank).unwrap();
        assert_eq!(json, format!("\"{}\"", BonusStrategyId::ProfitRank));
    }
}
