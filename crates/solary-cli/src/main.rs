//! Command-line client for the Solary chart API.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use solary_core::SolarAggregate;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Solary server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report subscription status for an API key
    Status {
        #[arg(long)]
        apikey: String,
    },
    /// Fetch the aggregated solar dataset for a location
    Chart {
        #[arg(long)]
        apikey: String,
        #[arg(long)]
        lat: String,
        #[arg(long)]
        lng: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/api/solar_chart", args.url);

    match args.command {
        Command::Status { apikey } => {
            let response = client
                .get(&endpoint)
                .query(&[("apikey", apikey)])
                .send()
                .await?;
            let status = response.status();
            let body: Value = response.json().await?;

            if !status.is_success() {
                bail!("server returned {}: {}", status, error_text(&body));
            }
            println!("Subscription valid until {}", body["expiration_date"]);
            println!("Days remaining: {}", body["valid_for_days"]);
        }
        Command::Chart { apikey, lat, lng } => {
            let response = client
                .get(&endpoint)
                .query(&[("apikey", apikey), ("lat", lat), ("lng", lng)])
                .send()
                .await?;
            let status = response.status();

            if !status.is_success() {
                let body: Value = response.json().await?;
                bail!("server returned {}: {}", status, error_text(&body));
            }

            let data: SolarAggregate = response.json().await?;
            println!("Samples: {}", data.values.len());
            println!(
                "Azimuth range: {}..{}  Elevation range: {}..{}",
                data.min_azymut, data.max_azymut, data.min_elevation, data.max_elevation
            );
            println!("Total power: {:.3} kW", data.sum_power);
        }
    }

    Ok(())
}

fn error_text(body: &Value) -> String {
    body["error"]
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| body.to_string())
}
