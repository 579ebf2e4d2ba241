//! Strong Wind Alerting Service - Main Entry Point
//!
//! Checks the HKO marine windtable for every monitored location, and sends
//! one summary notification when strong wind is forecast inside the
//! daylight window at any of them.
//!
//! Usage:
//!   cargo run --release                    # One monitoring pass, then exit
//!   cargo run --release -- --interval 180  # Re-run every 180 minutes
//!
//! Environment:
//!   WINDMON_WEBHOOK_URL - notification endpoint (required, .env supported)
//!   RUST_LOG            - tracing filter (default "info")
//!
//! Configuration:
//!   windmon.toml in the working directory overrides the alert thresholds;
//!   see config.rs for the fields and defaults.

use std::env;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use windmon_service::config;
use windmon_service::notify::{WebhookNotifier, WEBHOOK_URL_VAR};
use windmon_service::runner::{run_once, HkoSource};

fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut interval_minutes: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--interval" => {
                if i + 1 < args.len() {
                    interval_minutes = args[i + 1].parse().ok();
                    if interval_minutes.is_none() {
                        eprintln!("Error: --interval requires a number of minutes");
                        std::process::exit(1);
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --interval requires a number of minutes");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--interval MINUTES]", args[0]);
                std::process::exit(1);
            }
        }
    }

    let alert_config = config::load_config();
    info!(
        "Alerting at >= {} km/h between {}:00 and {}:00",
        alert_config.min_wind_speed_kmh,
        alert_config.alert_hour_start,
        alert_config.alert_hour_end
    );

    let Some(notifier) = WebhookNotifier::from_env() else {
        eprintln!("{} is not set.", WEBHOOK_URL_VAR);
        eprintln!("Set it in the environment or in .env before starting the service.");
        std::process::exit(1);
    };

    let source = HkoSource::new();

    loop {
        match run_once(&source, &notifier, &alert_config) {
            Ok(outcome) => {
                info!(
                    "Pass complete: {} finding(s), delivery id {:?}",
                    outcome.findings, outcome.delivery_id
                );
            }
            Err(e) => {
                error!("Monitoring pass failed: {}", e);
                if interval_minutes.is_none() {
                    std::process::exit(1);
                }
            }
        }

        match interval_minutes {
            Some(minutes) => std::thread::sleep(Duration::from_secs(minutes * 60)),
            None => break,
        }
    }
}
