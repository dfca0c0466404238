//! Provision a demo user, subscription, and chart locations.
//!
//! Prints the API key to use against `/api/solar_chart`. Safe to re-run:
//! an existing API key is reused and existing locations are kept.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use solary_server::config::Config;
use solary_server::persistence::{self, locations, users};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// API key to provision (generated when omitted)
    #[arg(long)]
    apikey: Option<String>,

    /// Subscription period in days
    #[arg(long, default_value_t = 30)]
    period_days: i64,

    /// Locations to provision, as "lat,lon" pairs
    #[arg(long, value_delimiter = ';', default_value = "40,-74;52,21;45,7")]
    locations: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await?;
    let pool = db.pool();

    let apikey = args
        .apikey
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());

    match users::find_user_by_apikey(pool, &apikey).await? {
        Some(user) => {
            println!("User already provisioned with {} grant(s)", user.subscriptions.len());
        }
        None => {
            let type_id =
                users::insert_subscription_type(pool, "seeded", args.period_days).await?;
            let user_id = users::insert_user(pool, &apikey).await?;
            users::insert_subscription(pool, user_id, type_id, Utc::now()).await?;
            println!("Provisioned user with a {}-day subscription", args.period_days);
        }
    }

    for pair in &args.locations {
        let Some((lat, lon)) = parse_pair(pair) else {
            eprintln!("Skipping malformed location {pair:?} (expected \"lat,lon\")");
            continue;
        };
        let id = locations::insert_location(pool, lat, lon).await?;
        println!("Location ({lat}, {lon}) ready (id {id})");
    }

    println!("API key: {apikey}");
    println!(
        "Try: curl 'http://localhost:{}/api/solar_chart?apikey={}&lat=40&lng=-74'",
        config.server_port, apikey
    );

    Ok(())
}

fn parse_pair(pair: &str) -> Option<(i64, i64)> {
    let (lat, lon) = pair.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}
