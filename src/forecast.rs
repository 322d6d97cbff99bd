//! Roll-forward multi-step forecasting
//!
//! Each step predicts one scaled value from the current window, then feeds
//! a synthesized row back into the window so the next step sees it. Two
//! approximations are carried by the row synthesis:
//!
//! - The predicted value goes into the sales slot as-is. It is a scaled
//!   target-space value, not re-scaled through the feature transform, so it
//!   only approximately matches the sales channel's scaled range.
//! - The month feature is held at the last observed month for every future
//!   step; there is no month rollover.

use crate::config::ForecastConfig;
use crate::data::{Channel, SalesSeries};
use crate::error::{ForecastError, Result};
use crate::models::lstm::LstmRegressor;
use crate::models::{Predictor, SalesModel};
use crate::preprocess::{fit_and_sequence, Prepared, Window};
use crate::scale::MinMaxScaler;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One forecast step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast date
    pub date: NaiveDate,
    /// Predicted sales volume
    pub sales: f64,
}

/// Ordered multi-step forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Get the forecast points in date order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Get the predicted sales values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.sales).collect()
    }

    /// Get the forecast dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|point| point.date).collect()
    }

    /// Number of forecast steps
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast holds no steps
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialize the forecast to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Roll a window forward `n_days` past the end of the history
///
/// Step `i` (1-based) predicts one scaled value, synthesizes the row for
/// `last_date + i` with `day_of_week = (last day of week + i) mod 7` and the
/// last observed month, appends it, and drops the oldest row. Predictions
/// are inverse-transformed through `scaler_y` at the end and paired with
/// daily dates starting the day after `last_date`.
///
/// The window is validated against the predictor's expected shape on every
/// call; `n_days = 0` yields an empty forecast.
pub fn roll_forward<P: Predictor + ?Sized>(
    predictor: &P,
    scaler_x: &MinMaxScaler,
    scaler_y: &MinMaxScaler,
    last_window: Window,
    last_date: NaiveDate,
    channels: &[Channel],
    n_days: usize,
) -> Result<Forecast> {
    if channels.len() != scaler_x.width() {
        return Err(ForecastError::ShapeMismatch(format!(
            "{} channels given for a {}-column feature scaler",
            channels.len(),
            scaler_x.width()
        )));
    }
    if !channels.contains(&Channel::Sales) {
        return Err(ForecastError::InvalidParameter(
            "The sales channel must be among the feature channels".to_string(),
        ));
    }
    if n_days > 0 && last_window.is_empty() {
        return Err(ForecastError::ShapeMismatch(
            "Cannot roll an empty window forward".to_string(),
        ));
    }

    let last_day_of_week = last_date.weekday().num_days_from_monday() as usize;
    let last_month = f64::from(last_date.month());

    let mut window = last_window;
    let mut scaled_predictions = Vec::with_capacity(n_days);

    for i in 1..=n_days {
        let predicted = predictor.predict(&window)?;

        let day_of_week = ((last_day_of_week + i) % 7) as f64;
        let mut row = Vec::with_capacity(channels.len());
        for (index, channel) in channels.iter().enumerate() {
            let value = match channel {
                Channel::Sales => predicted,
                Channel::DayOfWeek => scaler_x.transform_value(index, day_of_week)?,
                Channel::Month => scaler_x.transform_value(index, last_month)?,
            };
            row.push(value);
        }

        window.remove(0);
        window.push(row);
        scaled_predictions.push(predicted);
    }

    let mut points = Vec::with_capacity(n_days);
    for (offset, predicted) in scaled_predictions.iter().enumerate() {
        points.push(ForecastPoint {
            date: last_date + Duration::days(offset as i64 + 1),
            sales: scaler_y.inverse_value(0, *predicted)?,
        });
    }

    Ok(Forecast { points })
}

/// End-to-end pipeline: scale, window, train, and forecast
///
/// Fits the scalers once over `series`, trains an [`LstmRegressor`] on the
/// windowed history, and rolls the final window forward `config.horizon`
/// days. Training quality is not checked before forecasting; a poorly fit
/// model forecasts anyway.
pub fn forecast_sales(series: &SalesSeries, config: &ForecastConfig) -> Result<Forecast> {
    config.validate()?;

    let Prepared {
        windows,
        targets,
        scaler_x,
        scaler_y,
        last_window,
    } = fit_and_sequence(series, &config.channels, config.seq_length)?;
    info!(
        windows = windows.len(),
        seq_length = config.seq_length,
        "training data prepared"
    );

    let model = LstmRegressor::from_config(config)?;
    let trained = model.train(&windows, &targets)?;
    info!(model = trained.name(), "model trained");

    roll_forward(
        &trained,
        &scaler_x,
        &scaler_y,
        last_window,
        series.last_date(),
        &config.channels,
        config.horizon,
    )
}
