//! Per-channel min-max scaling
//!
//! A [`MinMaxScaler`] maps each column's observed `[min, max]` linearly onto
//! `[0, 1]`. It is fitted once over the full history and then treated as an
//! immutable value object: the same scaler must be reused for every
//! transform and inverse transform in a run, never refit.

use crate::error::{ForecastError, Result};

/// Fitted affine range for one column
#[derive(Debug, Clone, PartialEq)]
struct ChannelRange {
    label: String,
    min: f64,
    max: f64,
}

/// Per-column min-max scaler fitted over a feature matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    ranges: Vec<ChannelRange>,
}

impl MinMaxScaler {
    /// Fit one `[min, max] -> [0, 1]` map per column
    ///
    /// Fails with [`ForecastError::DegenerateChannel`] when a column is
    /// constant: a zero-range channel has no defined min-max transform.
    pub fn fit(rows: &[Vec<f64>], labels: &[&str]) -> Result<Self> {
        if rows.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot fit a scaler on zero rows".to_string(),
            ));
        }

        for row in rows {
            if row.len() != labels.len() {
                return Err(ForecastError::ShapeMismatch(format!(
                    "Expected rows of width {}, found a row of width {}",
                    labels.len(),
                    row.len()
                )));
            }
        }

        let mut ranges = Vec::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for row in rows {
                min = min.min(row[index]);
                max = max.max(row[index]);
            }

            if min == max {
                return Err(ForecastError::DegenerateChannel {
                    channel: (*label).to_string(),
                    value: min,
                });
            }

            ranges.push(ChannelRange {
                label: (*label).to_string(),
                min,
                max,
            });
        }

        Ok(Self { ranges })
    }

    /// Fit a single-column scaler over a value vector
    pub fn fit_column(values: &[f64], label: &str) -> Result<Self> {
        let rows: Vec<Vec<f64>> = values.iter().map(|value| vec![*value]).collect();
        Self::fit(&rows, &[label])
    }

    /// Number of columns the scaler was fitted over
    pub fn width(&self) -> usize {
        self.ranges.len()
    }

    /// Scale one row into `[0, 1]` per column
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_width(row.len())?;
        Ok(row
            .iter()
            .zip(&self.ranges)
            .map(|(value, range)| (value - range.min) / (range.max - range.min))
            .collect())
    }

    /// Scale a full matrix row by row
    pub fn transform(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }

    /// Undo the scaling of one row
    pub fn inverse_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_width(row.len())?;
        Ok(row
            .iter()
            .zip(&self.ranges)
            .map(|(value, range)| value * (range.max - range.min) + range.min)
            .collect())
    }

    /// Scale a single value through the transform of column `index`
    pub fn transform_value(&self, index: usize, value: f64) -> Result<f64> {
        let range = self.range_at(index)?;
        Ok((value - range.min) / (range.max - range.min))
    }

    /// Undo the scaling of a single value of column `index`
    pub fn inverse_value(&self, index: usize, value: f64) -> Result<f64> {
        let range = self.range_at(index)?;
        Ok(value * (range.max - range.min) + range.min)
    }

    fn range_at(&self, index: usize) -> Result<&ChannelRange> {
        self.ranges.get(index).ok_or_else(|| {
            ForecastError::ShapeMismatch(format!(
                "Column index {} out of range for a {}-column scaler",
                index,
                self.ranges.len()
            ))
        })
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if width != self.ranges.len() {
            return Err(ForecastError::ShapeMismatch(format!(
                "Scaler fitted over {} columns, got a row of width {}",
                self.ranges.len(),
                width
            )));
        }
        Ok(())
    }
}
