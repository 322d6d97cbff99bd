use sales_forecast::config::ForecastConfig;
use sales_forecast::error::ForecastError;
use sales_forecast::models::lstm::LstmRegressor;
use sales_forecast::models::{Predictor, SalesModel};
use sales_forecast::preprocess::Window;

/// Small synthetic training set: windows over a slow sine, all values in [0, 1]
fn training_pairs(count: usize, seq_length: usize, width: usize) -> (Vec<Window>, Vec<f64>) {
    let series: Vec<f64> = (0..count + seq_length + 1)
        .map(|i| 0.5 + 0.4 * (i as f64 * 0.3).sin())
        .collect();

    let mut windows = Vec::with_capacity(count);
    let mut targets = Vec::with_capacity(count);
    for start in 0..count {
        let window: Window = (start..start + seq_length)
            .map(|i| vec![series[i]; width])
            .collect();
        windows.push(window);
        targets.push(series[start + seq_length]);
    }
    (windows, targets)
}

#[test]
fn test_parameter_validation() {
    assert!(matches!(
        LstmRegressor::new(0, 10, 4, 0.05),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        LstmRegressor::new(8, 0, 4, 0.05),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        LstmRegressor::new(8, 10, 0, 0.05),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        LstmRegressor::new(8, 10, 4, 0.0),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        LstmRegressor::new(8, 10, 4, -1.0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_from_config() {
    let model = LstmRegressor::from_config(&ForecastConfig::default()).unwrap();
    assert!(model.name().contains("LSTM"));
}

#[test]
fn test_train_and_predict() {
    let (windows, targets) = training_pairs(24, 6, 3);
    let model = LstmRegressor::new(8, 15, 8, 0.05).unwrap();

    let trained = model.train(&windows, &targets).unwrap();
    assert_eq!(trained.input_shape(), (6, 3));

    let prediction = trained.predict(&windows[0]).unwrap();
    assert!(prediction.is_finite());
}

#[test]
fn test_predict_rejects_wrong_shape() {
    let (windows, targets) = training_pairs(24, 6, 3);
    let model = LstmRegressor::new(8, 5, 8, 0.05).unwrap();
    let trained = model.train(&windows, &targets).unwrap();

    // Wrong row count
    let short: Window = windows[0][..4].to_vec();
    assert!(matches!(
        trained.predict(&short),
        Err(ForecastError::ShapeMismatch(_))
    ));

    // Wrong row width
    let narrow: Window = windows[0].iter().map(|row| row[..2].to_vec()).collect();
    assert!(matches!(
        trained.predict(&narrow),
        Err(ForecastError::ShapeMismatch(_))
    ));
}

#[test]
fn test_train_input_validation() {
    let model = LstmRegressor::new(8, 5, 8, 0.05).unwrap();

    // No training windows
    assert!(matches!(
        model.train(&[], &[]),
        Err(ForecastError::InsufficientData(_))
    ));

    // Window/target count mismatch
    let (windows, targets) = training_pairs(10, 4, 2);
    assert!(matches!(
        model.train(&windows, &targets[..5]),
        Err(ForecastError::ShapeMismatch(_))
    ));

    // Inconsistent window shapes
    let mut ragged = windows.clone();
    ragged[3].pop();
    assert!(matches!(
        model.train(&ragged, &targets),
        Err(ForecastError::ShapeMismatch(_))
    ));
}

#[test]
fn test_predictions_vary_with_input() {
    // A trained model is not a constant function of its window
    let (windows, targets) = training_pairs(30, 6, 3);
    let model = LstmRegressor::new(8, 20, 8, 0.05).unwrap();
    let trained = model.train(&windows, &targets).unwrap();

    let a = trained.predict(&windows[0]).unwrap();
    let zeros: Window = vec![vec![0.0; 3]; 6];
    let b = trained.predict(&zeros).unwrap();
    assert!(a.is_finite() && b.is_finite());
    assert!((a - b).abs() > 1e-12);
}
