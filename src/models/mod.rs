//! Sequence models mapping a feature window to a next-step value

use crate::error::Result;
use crate::preprocess::Window;
use std::fmt::Debug;

/// One-step-ahead predictor over a fixed-shape feature window
///
/// Implementations validate the window shape on every call. Outputs live in
/// the scaled target space and are roughly within `[0, 1]`, but nothing
/// constrains them to the scaler's range.
pub trait Predictor: Debug {
    /// Predict the scaled next-step value for one window
    fn predict(&self, window: &Window) -> Result<f64>;

    /// Expected window shape as `(seq_length, channels)`
    fn input_shape(&self) -> (usize, usize);

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained into a [`Predictor`]
pub trait SalesModel: Debug + Clone {
    /// The type of trained predictor produced
    type Trained: Predictor;

    /// Train the model on window/target pairs
    fn train(&self, windows: &[Window], targets: &[f64]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod lstm;
