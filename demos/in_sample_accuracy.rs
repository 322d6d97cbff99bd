use chrono::{Datelike, Duration, NaiveDate};
use sales_forecast::config::ForecastConfig;
use sales_forecast::data::{Observation, SalesSeries};
use sales_forecast::forecast::roll_forward;
use sales_forecast::metrics::forecast_accuracy;
use sales_forecast::models::lstm::LstmRegressor;
use sales_forecast::models::{Predictor, SalesModel};
use sales_forecast::preprocess::fit_and_sequence;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: In-Sample Accuracy Example");
    println!("==========================================\n");

    let series = create_sample_sales()?;
    let config = ForecastConfig {
        seq_length: 14,
        epochs: 40,
        hidden_size: 16,
        ..ForecastConfig::default()
    };

    // Scale the history and slice it into windows
    let prepared = fit_and_sequence(&series, &config.channels, config.seq_length)?;
    println!(
        "Prepared {} windows of {} days each",
        prepared.windows.len(),
        config.seq_length
    );

    // Train the regressor on the windowed history
    let model = LstmRegressor::from_config(&config)?;
    let trained = model.train(&prepared.windows, &prepared.targets)?;
    println!("Trained: {}\n", trained.name());

    // One-step-ahead predictions over the training windows, in scaled space
    let mut predictions = Vec::with_capacity(prepared.windows.len());
    for window in &prepared.windows {
        predictions.push(trained.predict(window)?);
    }

    let accuracy = forecast_accuracy(&predictions, &prepared.targets)?;
    println!("{}", accuracy);

    // Roll the final window forward one week
    let forecast = roll_forward(
        &trained,
        &prepared.scaler_x,
        &prepared.scaler_y,
        prepared.last_window.clone(),
        series.last_date(),
        &config.channels,
        config.horizon,
    )?;

    println!("Predicted sales for next {} days:", forecast.len());
    for (i, point) in forecast.points().iter().enumerate() {
        println!("Day {} ({}): {:.2}", i + 1, point.date, point.sales);
    }

    Ok(())
}

/// Create sample daily sales with weekly seasonality
fn create_sample_sales() -> Result<SalesSeries, Box<dyn std::error::Error>> {
    let start_date = NaiveDate::from_ymd_opt(2023, 3, 1).ok_or("invalid start date")?;
    let mut observations = Vec::with_capacity(90);

    let mut sales = 150.0;
    for i in 0..90 {
        let current_date = start_date + Duration::days(i);
        let day_of_week = current_date.weekday().num_days_from_monday() as f64;
        let seasonality = (day_of_week * std::f64::consts::PI / 7.0).sin() * 10.0;
        let noise = (i as f64 * 0.2).cos() * 4.0;

        sales += 0.2;
        observations.push(Observation::new(current_date, sales + seasonality + noise));
    }

    Ok(SalesSeries::new(observations)?)
}
