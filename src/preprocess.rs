//! Feature scaling and window construction
//!
//! Turns an ordered sales history into overlapping fixed-length windows of
//! scaled features, each paired with the scaled sales value immediately
//! after it. The fitted scalers ride along in [`Prepared`] so that later
//! stages reuse them instead of refitting.

use crate::data::{Channel, SalesSeries};
use crate::error::{ForecastError, Result};
use crate::scale::MinMaxScaler;

/// One model input: `seq_length` rows of scaled channel values
pub type Window = Vec<Vec<f64>>;

/// Output of [`fit_and_sequence`]: training pairs plus the fitted scalers
#[derive(Debug, Clone)]
pub struct Prepared {
    /// Overlapping windows over the scaled feature matrix
    pub windows: Vec<Window>,
    /// Scaled next-step sales value for each window
    pub targets: Vec<f64>,
    /// Scaler fitted over the feature channels
    pub scaler_x: MinMaxScaler,
    /// Scaler fitted over the sales target
    pub scaler_y: MinMaxScaler,
    /// The final `seq_length` scaled rows, the seed for roll-forward forecasting
    pub last_window: Window,
}

/// Fit the scalers once over the full history and slice it into windows
///
/// Requires strictly more observations than `seq_length`, otherwise no
/// window has a target and the call fails with
/// [`ForecastError::InsufficientData`]. A constant channel fails scaler
/// fitting with [`ForecastError::DegenerateChannel`].
pub fn fit_and_sequence(
    series: &SalesSeries,
    channels: &[Channel],
    seq_length: usize,
) -> Result<Prepared> {
    if seq_length == 0 {
        return Err(ForecastError::InvalidParameter(
            "seq_length must be positive".to_string(),
        ));
    }
    if channels.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "At least one feature channel is required".to_string(),
        ));
    }
    if series.len() <= seq_length {
        return Err(ForecastError::InsufficientData(format!(
            "{} observations cannot fill a {}-step window plus its target; need at least {}",
            series.len(),
            seq_length,
            seq_length + 1
        )));
    }

    let raw = series.feature_matrix(channels);
    let labels: Vec<&str> = channels.iter().map(|channel| channel.label()).collect();
    let scaler_x = MinMaxScaler::fit(&raw, &labels)?;
    let x = scaler_x.transform(&raw)?;

    let sales = series.sales();
    let scaler_y = MinMaxScaler::fit_column(&sales, Channel::Sales.label())?;
    let y = sales
        .iter()
        .map(|value| scaler_y.transform_value(0, *value))
        .collect::<Result<Vec<f64>>>()?;

    let (windows, targets) = create_sequences(&x, &y, seq_length);
    let last_window: Window = x[x.len() - seq_length..].to_vec();

    Ok(Prepared {
        windows,
        targets,
        scaler_x,
        scaler_y,
        last_window,
    })
}

/// Slice a scaled feature matrix into overlapping windows with targets
///
/// Window `i` covers rows `[i, i + seq_length)` and is paired with
/// `y[i + seq_length]`. An input of length `L` yields exactly
/// `max(0, L - seq_length)` windows. `x` and `y` are assumed to be the same
/// length, as produced by scaling one series.
pub fn create_sequences(x: &[Vec<f64>], y: &[f64], seq_length: usize) -> (Vec<Window>, Vec<f64>) {
    let count = x.len().saturating_sub(seq_length);
    let mut windows = Vec::with_capacity(count);
    let mut targets = Vec::with_capacity(count);

    for i in 0..count {
        windows.push(x[i..i + seq_length].to_vec());
        targets.push(y[i + seq_length]);
    }

    (windows, targets)
}
