//! Recognized forecasting options

use crate::data::Channel;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Forecasting run options
///
/// Every value has a default; a JSON config file may set any subset and the
/// rest fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Window length in days
    pub seq_length: usize,
    /// Forecast horizon in days
    pub horizon: usize,
    /// Feature channels, in column order
    pub channels: Vec<Channel>,
    /// Number of training passes over the window set
    pub epochs: usize,
    /// Training mini-batch size
    pub batch_size: usize,
    /// Hidden state dimension of the sequence model
    pub hidden_size: usize,
    /// Gradient descent step size
    pub learning_rate: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            seq_length: 30,
            horizon: 7,
            channels: vec![Channel::Sales, Channel::DayOfWeek, Channel::Month],
            epochs: 100,
            batch_size: 16,
            hidden_size: 64,
            learning_rate: 0.05,
        }
    }
}

impl ForecastConfig {
    /// Load and validate a config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate option values
    ///
    /// The sales channel must be present: it is both the model target and
    /// the slot the roll-forward loop feeds predictions back into.
    pub fn validate(&self) -> Result<()> {
        if self.seq_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "seq_length must be positive".to_string(),
            ));
        }
        if self.channels.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "At least one feature channel is required".to_string(),
            ));
        }
        if !self.channels.contains(&Channel::Sales) {
            return Err(ForecastError::InvalidParameter(
                "The sales channel must be among the feature channels".to_string(),
            ));
        }
        if self.epochs == 0 {
            return Err(ForecastError::InvalidParameter(
                "epochs must be positive".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "batch_size must be positive".to_string(),
            ));
        }
        if self.hidden_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "hidden_size must be positive".to_string(),
            ));
        }
        if self.learning_rate <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "learning_rate must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
