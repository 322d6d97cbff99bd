use assert_approx_eq::assert_approx_eq;
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use sales_forecast::data::{Channel, Observation, SalesSeries};
use sales_forecast::error::ForecastError;
use sales_forecast::preprocess::{create_sequences, fit_and_sequence};

const CHANNELS: [Channel; 3] = [Channel::Sales, Channel::DayOfWeek, Channel::Month];

fn daily_series(start: NaiveDate, sales: &[f64]) -> SalesSeries {
    let observations = sales
        .iter()
        .enumerate()
        .map(|(i, &value)| Observation::new(start + Duration::days(i as i64), value))
        .collect();
    SalesSeries::new(observations).unwrap()
}

#[test]
fn test_create_sequences_window_count() {
    // An input of length L yields exactly max(0, L - seq_length) windows
    let x: Vec<Vec<f64>> = (0..40).map(|i| vec![i as f64]).collect();
    let y: Vec<f64> = (0..40).map(|i| i as f64).collect();

    let (windows, targets) = create_sequences(&x, &y, 30);
    assert_eq!(windows.len(), 10);
    assert_eq!(targets.len(), 10);
    for window in &windows {
        assert_eq!(window.len(), 30);
    }

    let (windows, targets) = create_sequences(&x, &y, 40);
    assert_eq!(windows.len(), 0);
    assert_eq!(targets.len(), 0);

    let (windows, _) = create_sequences(&x, &y, 50);
    assert_eq!(windows.len(), 0);
}

#[test]
fn test_create_sequences_targets_follow_windows() {
    // Each window's target is the series value at window_start + seq_length
    let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
    let y: Vec<f64> = (0..20).map(|i| i as f64 * 10.0).collect();

    let (windows, targets) = create_sequences(&x, &y, 5);
    assert_eq!(windows.len(), 15);

    for (start, (window, target)) in windows.iter().zip(targets.iter()).enumerate() {
        assert_eq!(window[0], vec![start as f64]);
        assert_eq!(window[4], vec![(start + 4) as f64]);
        assert_approx_eq!(*target, (start + 5) as f64 * 10.0);
    }
}

#[test]
fn test_fit_and_sequence_single_window() {
    // 31 increasing days with a 30-step window: one window, target is the
    // scaled value of the raw 31, which is the channel maximum
    let start = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    let sales: Vec<f64> = (1..=31).map(f64::from).collect();
    let series = daily_series(start, &sales);

    let prepared = fit_and_sequence(&series, &CHANNELS, 30).unwrap();

    assert_eq!(prepared.windows.len(), 1);
    assert_eq!(prepared.targets.len(), 1);
    assert_approx_eq!(prepared.targets[0], 1.0);
}

#[test]
fn test_fit_and_sequence_shapes_and_last_window() {
    let start = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
    let sales: Vec<f64> = (0..45).map(|i| 100.0 + i as f64).collect();
    let series = daily_series(start, &sales);

    let prepared = fit_and_sequence(&series, &CHANNELS, 30).unwrap();

    assert_eq!(prepared.windows.len(), 15);
    assert_eq!(prepared.scaler_x.width(), CHANNELS.len());
    assert_eq!(prepared.scaler_y.width(), 1);
    for window in &prepared.windows {
        assert_eq!(window.len(), 30);
        for row in window {
            assert_eq!(row.len(), CHANNELS.len());
        }
    }

    // The last window is the final 30 scaled rows; its sales column ends at
    // the channel maximum
    assert_eq!(prepared.last_window.len(), 30);
    let final_row = prepared.last_window.last().unwrap();
    assert_approx_eq!(final_row[0], 1.0);
}

#[test]
fn test_fit_and_sequence_insufficient_data() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let sales: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let series = daily_series(start, &sales);

    // 30 observations and a 30-step window: zero windows would result
    let result = fit_and_sequence(&series, &CHANNELS, 30);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));

    let result = fit_and_sequence(&series, &CHANNELS, 100);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}

#[test]
fn test_fit_and_sequence_constant_sales_rejected() {
    // 40 days of constant sales: the sales channel has zero range and must
    // be reported, not silently scaled into NaNs
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let sales = vec![100.0; 40];
    let series = daily_series(start, &sales);

    let result = fit_and_sequence(&series, &CHANNELS, 30);
    match result {
        Err(ForecastError::DegenerateChannel { channel, value }) => {
            assert_eq!(channel, "sales");
            assert_approx_eq!(value, 100.0);
        }
        other => panic!("Expected DegenerateChannel, got {:?}", other),
    }
}

#[test]
fn test_fit_and_sequence_parameter_validation() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let sales: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let series = daily_series(start, &sales);

    let result = fit_and_sequence(&series, &CHANNELS, 0);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));

    let result = fit_and_sequence(&series, &[], 30);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}
