//! Sales history data handling

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One feature channel of the series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Daily sales volume
    Sales,
    /// Day of week, 0 = Monday through 6 = Sunday
    DayOfWeek,
    /// Month of year, 1 through 12
    Month,
}

impl Channel {
    /// Stable label used in error messages and scaler bookkeeping
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Sales => "sales",
            Channel::DayOfWeek => "day_of_week",
            Channel::Month => "month",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single dated sales observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Sales volume on that date
    pub sales: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, sales: f64) -> Self {
        Self { date, sales }
    }

    /// Day of week with 0 = Monday, derived from the date
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    /// Month of year, 1 through 12
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Project the observation onto one feature channel
    pub fn channel_value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Sales => self.sales,
            Channel::DayOfWeek => f64::from(self.day_of_week()),
            Channel::Month => f64::from(self.month()),
        }
    }
}

/// Ordered daily sales history
///
/// Observations are sorted by date ascending on construction. Dates are
/// assumed contiguous daily; gaps are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSeries {
    observations: Vec<Observation>,
}

impl SalesSeries {
    /// Create a series from observations, sorting them by date ascending
    pub fn new(mut observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(ForecastError::DataError(
                "Empty sales series".to_string(),
            ));
        }

        observations.sort_by_key(|obs| obs.date);
        Ok(Self { observations })
    }

    /// Load a series from a CSV file with `date` and `sales` columns
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut observations = Vec::new();

        for record in reader.deserialize() {
            let observation: Observation = record?;
            observations.push(observation);
        }

        Self::new(observations)
    }

    /// Get the observations in date order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The earliest observation
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// The latest observation
    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// Date of the latest observation
    pub fn last_date(&self) -> NaiveDate {
        self.last().date
    }

    /// The raw sales values in date order
    pub fn sales(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.sales).collect()
    }

    /// Project the series onto the given channels, one row per observation
    pub fn feature_matrix(&self, channels: &[Channel]) -> Vec<Vec<f64>> {
        self.observations
            .iter()
            .map(|obs| {
                channels
                    .iter()
                    .map(|channel| obs.channel_value(*channel))
                    .collect()
            })
            .collect()
    }
}
