//! Command-line sales forecaster
//!
//! Loads a CSV sales history, trains the sequence model, and prints the
//! predicted sales for the next `horizon` days.

use clap::Parser;
use sales_forecast::config::ForecastConfig;
use sales_forecast::data::SalesSeries;
use sales_forecast::forecast::forecast_sales;

#[derive(Parser, Debug)]
#[command(name = "sales_forecast")]
#[command(about = "Forecast daily sales from a CSV history")]
struct Args {
    /// Input CSV with 'date' and 'sales' columns
    #[arg(long, default_value = "sales_data.csv")]
    data: String,

    /// Optional JSON config file; CLI flags below override its values
    #[arg(long)]
    config: Option<String>,

    /// Window length in days
    #[arg(long)]
    seq_length: Option<usize>,

    /// Forecast horizon in days
    #[arg(long)]
    horizon: Option<usize>,

    /// Number of training epochs
    #[arg(long)]
    epochs: Option<usize>,

    /// Training mini-batch size
    #[arg(long)]
    batch_size: Option<usize>,

    /// Optional output CSV for the forecast
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ForecastConfig::from_json_file(path)?,
        None => ForecastConfig::default(),
    };
    if let Some(seq_length) = args.seq_length {
        config.seq_length = seq_length;
    }
    if let Some(horizon) = args.horizon {
        config.horizon = horizon;
    }
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    config.validate()?;

    let series = SalesSeries::from_csv(&args.data)?;
    println!(
        "Loaded {} observations ({} to {})",
        series.len(),
        series.first().date,
        series.last().date
    );

    let forecast = forecast_sales(&series, &config)?;

    println!("Predicted sales for next {} days:", forecast.len());
    for (i, point) in forecast.points().iter().enumerate() {
        println!("Day {}: {:.2}", i + 1, point.sales);
    }

    if let Some(path) = &args.output {
        let mut writer = csv::Writer::from_path(path)?;
        for point in forecast.points() {
            writer.serialize(point)?;
        }
        writer.flush()?;
        println!("Forecast written to {}", path);
    }

    Ok(())
}
