use crate::engine::AnalysisOptions;
use crate::error::AnalyticsError;
use core_types::SalesData;
use serde::Deserialize;
use serde_json::Value;
use strategies::{BonusStrategy, RevenueStrategy};

/// The collections a dataset must carry, in the order they are checked.
pub const REQUIRED_COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// The two strategies pulled out of validated `AnalysisOptions`.
pub struct ResolvedStrategies<'a> {
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// Checks the shape of an untyped dataset and converts it into `SalesData`.
///
/// Fails with `InvalidInput` when the dataset is absent or not an object,
/// when any required collection is missing or not an array, or when one of
/// their elements cannot be read as the expected record.
pub fn validate_data(data: Option<&Value>) -> Result<SalesData, AnalyticsError> {
    let data = data.ok_or_else(|| AnalyticsError::InvalidInput("no data supplied".to_string()))?;
    let object = data.as_object().ok_or_else(|| {
        AnalyticsError::InvalidInput(format!("expected an object, found {}", kind(data)))
    })?;

    for name in REQUIRED_COLLECTIONS {
        match object.get(name) {
            Some(Value::Array(_)) => {}
            Some(other) => {
                return Err(AnalyticsError::InvalidInput(format!(
                    "`{name}` must be an array, found {}",
                    kind(other)
                )));
            }
            None => {
                return Err(AnalyticsError::InvalidInput(format!("`{name}` is missing")));
            }
        }
    }

    SalesData::deserialize(data)
        .map_err(|e| AnalyticsError::InvalidInput(format!("malformed record: {e}")))
}

/// Checks that both calculation strategies were supplied.
pub fn validate_options(
    options: Option<&AnalysisOptions>,
) -> Result<ResolvedStrategies<'_>, AnalyticsError> {
    let options = options
        .ok_or_else(|| AnalyticsError::MissingStrategy("no options supplied".to_string()))?;

    let revenue = options.revenue_strategy().ok_or_else(|| {
        AnalyticsError::MissingStrategy("`calculate_revenue` is not set".to_string())
    })?;
    let bonus = options.bonus_strategy().ok_or_else(|| {
        AnalyticsError::MissingStrategy("`calculate_bonus` is not set".to_string())
    })?;

    Ok(ResolvedStrategies { revenue, bonus })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_invalid(data: Option<&Value>, needle: &str) {
        match validate_data(data) {
            Err(AnalyticsError::InvalidInput(msg)) => {
                assert!(msg.contains(needle), "message {msg:?} should mention {needle:?}")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn rejects_absent_data() {
        assert_invalid(None, "no data");
    }

    #[test]
    fn rejects_non_object_data() {
        assert_invalid(Some(&json!([1, 2, 3])), "an array");
    }

    #[test]
    fn rejects_each_missing_or_non_array_collection() {
        assert_invalid(Some(&json!({"products": [], "purchase_records": []})), "sellers");
        assert_invalid(
            Some(&json!({"sellers": [], "products": {}, "purchase_records": []})),
            "`products` must be an array",
        );
        assert_invalid(
            Some(&json!({"sellers": [], "products": [], "purchase_records": "none"})),
            "purchase_records",
        );
    }

    #[test]
    fn rejects_malformed_elements() {
        let data = json!({
            "sellers": [{"first_name": "no id"}],
            "products": [],
            "purchase_records": []
        });
        assert_invalid(Some(&data), "malformed record");
    }

    #[test]
    fn accepts_empty_collections() {
        let data = json!({"sellers": [], "products": [], "purchase_records": []});
        let parsed = validate_data(Some(&data)).unwrap();
        assert_eq!(parsed, SalesData::default());
    }

    #[test]
    fn rejects_absent_options() {
        assert!(matches!(
            validate_options(None),
            Err(AnalyticsError::MissingStrategy(_))
        ));
    }

    #[test]
    fn rejects_options_missing_either_strategy() {
        let only_revenue = AnalysisOptions::new().with_revenue_strategy(strategies::SimpleRevenue);
        assert!(matches!(
            validate_options(Some(&only_revenue)),
            Err(AnalyticsError::MissingStrategy(msg)) if msg.contains("calculate_bonus")
        ));

        let only_bonus =
            AnalysisOptions::new().with_bonus_strategy(strategies::ProfitRankBonus::default());
        assert!(matches!(
            validate_options(Some(&only_bonus)),
            Err(AnalyticsError::MissingStrategy(msg)) if msg.contains("calculate_revenue")
        ));
    }

    #[test]
    fn accepts_complete_options() {
        assert!(validate_options(Some(&AnalysisOptions::defaults())).is_ok());
    }
}
