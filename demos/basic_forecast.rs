use chrono::{Datelike, Duration, NaiveDate};
use sales_forecast::config::ForecastConfig;
use sales_forecast::data::{Observation, SalesSeries};
use sales_forecast::forecast::forecast_sales;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Basic Forecasting Example");
    println!("=========================================\n");

    // Create sample data
    println!("Creating sample data...");
    let series = create_sample_sales()?;
    println!(
        "Sample data created: {} daily observations ({} to {})\n",
        series.len(),
        series.first().date,
        series.last().date
    );

    // Keep the demo quick: fewer epochs and a smaller encoder than the defaults
    let config = ForecastConfig {
        epochs: 25,
        hidden_size: 16,
        ..ForecastConfig::default()
    };

    println!("Training model and forecasting {} days...", config.horizon);
    let forecast = forecast_sales(&series, &config)?;

    println!("\nPredicted sales for next {} days:", forecast.len());
    for (i, point) in forecast.points().iter().enumerate() {
        println!("Day {} ({}): {:.2}", i + 1, point.date, point.sales);
    }

    println!("\nForecast as JSON:");
    println!("{}", forecast.to_json()?);

    Ok(())
}

/// Create sample daily sales with a trend and weekly seasonality
fn create_sample_sales() -> Result<SalesSeries, Box<dyn std::error::Error>> {
    let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).ok_or("invalid start date")?;
    let mut observations = Vec::with_capacity(120);

    // 120 days of data with a trend and some seasonality
    let mut sales = 200.0;
    let trend = 0.3; // 0.3 units per day upward trend

    for i in 0..120 {
        let current_date = start_date + Duration::days(i);

        // Add some weekly seasonality
        let day_of_week = current_date.weekday().num_days_from_monday() as f64;
        let seasonality = (day_of_week * std::f64::consts::PI / 7.0).sin() * 15.0;

        // Add some noise
        let noise = (i as f64 * 0.1).sin() * 5.0;

        sales += trend;
        observations.push(Observation::new(current_date, sales + seasonality + noise));
    }

    Ok(SalesSeries::new(observations)?)
}
