use thiserror::Error;

use crate::models::MacroClass;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("{target} has no {channel} to match against")]
    ZeroChannel { target: String, channel: MacroClass },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SwapError>;
