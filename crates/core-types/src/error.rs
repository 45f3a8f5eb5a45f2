use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown strategy identifier: {0}")]
    UnknownStrategy(String),
}
