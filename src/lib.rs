//! # Sales Forecast
//!
//! A Rust library for daily sales time series forecasting with a recurrent
//! sequence model.
//!
//! ## Features
//!
//! - CSV sales history loading with calendar feature derivation
//! - Per-channel min-max scaling behind fit-once, reuse-forever scalers
//! - Overlapping window construction over the scaled history
//! - An LSTM-based next-step regressor behind a stubbable [`Predictor`] trait
//! - Iterative roll-forward forecasting over a configurable horizon
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::config::ForecastConfig;
//! use sales_forecast::data::SalesSeries;
//! use sales_forecast::forecast::forecast_sales;
//!
//! # fn main() -> sales_forecast::error::Result<()> {
//! // Load data
//! let series = SalesSeries::from_csv("sales_data.csv")?;
//!
//! // Forecast the next week with the default options
//! let config = ForecastConfig::default();
//! let forecast = forecast_sales(&series, &config)?;
//!
//! for (i, point) in forecast.points().iter().enumerate() {
//!     println!("Day {}: {:.2}", i + 1, point.sales);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod preprocess;
pub mod scale;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::{Channel, Observation, SalesSeries};
pub use crate::error::ForecastError;
pub use crate::forecast::{forecast_sales, roll_forward, Forecast, ForecastPoint};
pub use crate::models::{Predictor, SalesModel};
pub use crate::preprocess::{create_sequences, fit_and_sequence, Prepared, Window};
pub use crate::scale::MinMaxScaler;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
