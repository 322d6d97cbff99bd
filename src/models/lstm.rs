//! Recurrent sales regressor: an LSTM encoder with a linear output head
//!
//! The encoder is a single LSTM cell whose weights are fixed at their
//! Xavier initialization; training fits only the linear head on top of the
//! final hidden state, by mini-batch gradient descent on squared error.
//! Training is open-loop: a fixed number of epochs, no early stopping, no
//! validation split, and no check of fit quality before forecasting.

use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::models::{Predictor, SalesModel};
use crate::preprocess::Window;
use rand::Rng;
use tracing::debug;

/// Sigmoid activation function
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Matrix-vector multiplication: W * x
fn mat_vec_mul(w: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    w.iter()
        .map(|row| row.iter().zip(x.iter()).map(|(a, b)| a * b).sum())
        .collect()
}

/// Element-wise vector addition
fn vec_add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Element-wise vector multiplication (Hadamard product)
fn vec_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).collect()
}

/// Dot product of two equal-length vectors
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Xavier initialization for a weight matrix
fn xavier_init<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    let scale = (2.0 / (rows + cols) as f64).sqrt();
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-scale..scale)).collect())
        .collect()
}

/// LSTM cell with a stateless forward pass; callers thread `(h, c)` through
#[derive(Debug, Clone)]
struct LstmCell {
    input_size: usize,
    hidden_size: usize,

    // Input gate weights
    w_i: Vec<Vec<f64>>, // [hidden_size x input_size]
    u_i: Vec<Vec<f64>>, // [hidden_size x hidden_size]
    b_i: Vec<f64>,      // [hidden_size]

    // Forget gate weights
    w_f: Vec<Vec<f64>>,
    u_f: Vec<Vec<f64>>,
    b_f: Vec<f64>,

    // Cell gate weights
    w_c: Vec<Vec<f64>>,
    u_c: Vec<Vec<f64>>,
    b_c: Vec<f64>,

    // Output gate weights
    w_o: Vec<Vec<f64>>,
    u_o: Vec<Vec<f64>>,
    b_o: Vec<f64>,
}

impl LstmCell {
    /// Create a new cell with Xavier-initialized weights
    fn new<R: Rng>(rng: &mut R, input_size: usize, hidden_size: usize) -> Self {
        let w_i = xavier_init(rng, hidden_size, input_size);
        let u_i = xavier_init(rng, hidden_size, hidden_size);
        let w_f = xavier_init(rng, hidden_size, input_size);
        let u_f = xavier_init(rng, hidden_size, hidden_size);
        let w_c = xavier_init(rng, hidden_size, input_size);
        let u_c = xavier_init(rng, hidden_size, hidden_size);
        let w_o = xavier_init(rng, hidden_size, input_size);
        let u_o = xavier_init(rng, hidden_size, hidden_size);

        // Zero biases, except forget gate bias = 1.0
        let b_i = vec![0.0; hidden_size];
        let b_f = vec![1.0; hidden_size];
        let b_c = vec![0.0; hidden_size];
        let b_o = vec![0.0; hidden_size];

        Self {
            input_size,
            hidden_size,
            w_i,
            u_i,
            b_i,
            w_f,
            u_f,
            b_f,
            w_c,
            u_c,
            b_c,
            w_o,
            u_o,
            b_o,
        }
    }

    /// One step of the standard LSTM equations
    ///
    /// i_t = sigmoid(W_i x + U_i h + b_i)
    /// f_t = sigmoid(W_f x + U_f h + b_f)
    /// c_t = f_t * c + i_t * tanh(W_c x + U_c h + b_c)
    /// o_t = sigmoid(W_o x + U_o h + b_o)
    /// h_t = o_t * tanh(c_t)
    fn forward(&self, x: &[f64], h: &[f64], c: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let i_t: Vec<f64> = vec_add(
            &vec_add(&mat_vec_mul(&self.w_i, x), &mat_vec_mul(&self.u_i, h)),
            &self.b_i,
        )
        .iter()
        .map(|&v| sigmoid(v))
        .collect();

        let f_t: Vec<f64> = vec_add(
            &vec_add(&mat_vec_mul(&self.w_f, x), &mat_vec_mul(&self.u_f, h)),
            &self.b_f,
        )
        .iter()
        .map(|&v| sigmoid(v))
        .collect();

        let c_tilde: Vec<f64> = vec_add(
            &vec_add(&mat_vec_mul(&self.w_c, x), &mat_vec_mul(&self.u_c, h)),
            &self.b_c,
        )
        .iter()
        .map(|&v| v.tanh())
        .collect();

        let new_c = vec_add(&vec_mul(&f_t, c), &vec_mul(&i_t, &c_tilde));

        let o_t: Vec<f64> = vec_add(
            &vec_add(&mat_vec_mul(&self.w_o, x), &mat_vec_mul(&self.u_o, h)),
            &self.b_o,
        )
        .iter()
        .map(|&v| sigmoid(v))
        .collect();

        let tanh_c: Vec<f64> = new_c.iter().map(|&v| v.tanh()).collect();
        let new_h = vec_mul(&o_t, &tanh_c);

        (new_h, new_c)
    }

    /// Run a full window through the cell from zero state, returning the
    /// final hidden state
    fn encode(&self, window: &Window) -> Vec<f64> {
        let mut h = vec![0.0; self.hidden_size];
        let mut c = vec![0.0; self.hidden_size];
        for row in window {
            let (new_h, new_c) = self.forward(row, &h, &c);
            h = new_h;
            c = new_c;
        }
        h
    }
}

/// Untrained LSTM regressor
#[derive(Debug, Clone)]
pub struct LstmRegressor {
    /// Name of the model
    name: String,
    /// Hidden state dimension of the encoder
    hidden_size: usize,
    /// Number of passes over the training set
    epochs: usize,
    /// Mini-batch size for head updates
    batch_size: usize,
    /// Gradient descent step size
    learning_rate: f64,
}

/// Trained LSTM regressor
#[derive(Debug, Clone)]
pub struct TrainedLstmRegressor {
    /// Name of the model
    name: String,
    /// Frozen encoder
    cell: LstmCell,
    /// Linear head weights over the final hidden state
    head: Vec<f64>,
    /// Linear head bias
    bias: f64,
    /// Expected window length
    seq_length: usize,
}

impl LstmRegressor {
    /// Create a new LSTM regressor
    pub fn new(
        hidden_size: usize,
        epochs: usize,
        batch_size: usize,
        learning_rate: f64,
    ) -> Result<Self> {
        if hidden_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Hidden size must be positive".to_string(),
            ));
        }
        if epochs == 0 {
            return Err(ForecastError::InvalidParameter(
                "Epoch count must be positive".to_string(),
            ));
        }
        if batch_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Batch size must be positive".to_string(),
            ));
        }
        if learning_rate <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Learning rate must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!(
                "LSTM regressor (hidden={}, epochs={}, batch={})",
                hidden_size, epochs, batch_size
            ),
            hidden_size,
            epochs,
            batch_size,
            learning_rate,
        })
    }

    /// Create a regressor from the training options of a config
    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        Self::new(
            config.hidden_size,
            config.epochs,
            config.batch_size,
            config.learning_rate,
        )
    }
}

impl SalesModel for LstmRegressor {
    type Trained = TrainedLstmRegressor;

    fn train(&self, windows: &[Window], targets: &[f64]) -> Result<Self::Trained> {
        if windows.is_empty() {
            return Err(ForecastError::InsufficientData(
                "No training windows".to_string(),
            ));
        }
        if windows.len() != targets.len() {
            return Err(ForecastError::ShapeMismatch(format!(
                "{} windows paired with {} targets",
                windows.len(),
                targets.len()
            )));
        }

        let seq_length = windows[0].len();
        let input_size = windows[0].first().map_or(0, |row| row.len());
        if seq_length == 0 || input_size == 0 {
            return Err(ForecastError::ShapeMismatch(
                "Training windows must have at least one row and one channel".to_string(),
            ));
        }
        for window in windows {
            check_window_shape(window, seq_length, input_size)?;
        }

        let mut rng = rand::thread_rng();
        let cell = LstmCell::new(&mut rng, input_size, self.hidden_size);

        // The encoder stays at its initialization, so each window's encoding
        // is computed once up front.
        let encodings: Vec<Vec<f64>> = windows.iter().map(|window| cell.encode(window)).collect();

        let mut head = xavier_init(&mut rng, 1, self.hidden_size).remove(0);
        let mut bias = 0.0;

        for epoch in 0..self.epochs {
            let mut sum_sq = 0.0;

            for (batch_enc, batch_targets) in encodings
                .chunks(self.batch_size)
                .zip(targets.chunks(self.batch_size))
            {
                let mut grad_head = vec![0.0; self.hidden_size];
                let mut grad_bias = 0.0;

                for (encoding, &target) in batch_enc.iter().zip(batch_targets.iter()) {
                    let prediction = dot(&head, encoding) + bias;
                    let err = prediction - target;
                    sum_sq += err * err;

                    for (grad, &enc) in grad_head.iter_mut().zip(encoding.iter()) {
                        *grad += err * enc;
                    }
                    grad_bias += err;
                }

                let batch_len = batch_enc.len() as f64;
                for (weight, grad) in head.iter_mut().zip(grad_head.iter()) {
                    *weight -= self.learning_rate * 2.0 * grad / batch_len;
                }
                bias -= self.learning_rate * 2.0 * grad_bias / batch_len;
            }

            let mse = sum_sq / windows.len() as f64;
            debug!(epoch, mse, "training epoch complete");
        }

        Ok(TrainedLstmRegressor {
            name: self.name.clone(),
            cell,
            head,
            bias,
            seq_length,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Predictor for TrainedLstmRegressor {
    fn predict(&self, window: &Window) -> Result<f64> {
        check_window_shape(window, self.seq_length, self.cell.input_size)?;
        let encoding = self.cell.encode(window);
        Ok(dot(&self.head, &encoding) + self.bias)
    }

    fn input_shape(&self) -> (usize, usize) {
        (self.seq_length, self.cell.input_size)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Validate that a window has the expected row count and row width
fn check_window_shape(window: &Window, seq_length: usize, input_size: usize) -> Result<()> {
    if window.len() != seq_length {
        return Err(ForecastError::ShapeMismatch(format!(
            "Expected a window of {} rows, got {}",
            seq_length,
            window.len()
        )));
    }
    for row in window {
        if row.len() != input_size {
            return Err(ForecastError::ShapeMismatch(format!(
                "Expected window rows of width {}, got {}",
                input_size,
                row.len()
            )));
        }
    }
    Ok(())
}
