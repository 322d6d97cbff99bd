//! Error types for the sales_forecast crate

use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Too few observations to fill a window plus its target
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A feature channel with zero range cannot be min-max scaled
    #[error("Degenerate channel '{channel}': every value equals {value}, min-max scaling is undefined")]
    DegenerateChannel { channel: String, value: f64 },

    /// Window or row dimensions do not match what a consumer expects
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
