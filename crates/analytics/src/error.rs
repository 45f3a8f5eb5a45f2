use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Missing calculation strategy: {0}")]
    MissingStrategy(String),
}
