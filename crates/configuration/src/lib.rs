use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, ProfitRankBonusParams, StrategySettings};

/// Prefix for environment overrides, e.g. `SALES__STRATEGIES__PROFIT_RANK__BASE_RATE=0.02`.
pub const ENV_PREFIX: &str = "SALES";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file at `path`
/// (when one is given it must exist), then `SALES__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let rates = &config.strategies.profit_rank;
    for (name, rate) in [
        ("first_place_rate", rates.first_place_rate),
        ("podium_rate", rates.podium_rate),
        ("base_rate", rates.base_rate),
    ] {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "strategies.profit_rank.{name} must be a non-negative number, got {rate}"
            )));
        }
    }
    Ok(())
}
