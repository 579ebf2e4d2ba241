/// One monitoring pass for the strong-wind alerting service.
///
/// This module implements the run that the daemon shell schedules:
/// 1. Fetches the windtable page for every registry location, in order
/// 2. Skips each page's leading legend table, parses the rest
/// 3. Filters records through the strong-wind classifier
/// 4. Groups findings and renders the alert
/// 5. Delivers the alert — only when at least one finding exists
///
/// A fetch or parse failure is isolated to its location/table: it is
/// logged and the remaining locations still run, so one broken page never
/// suppresses alerting for the others. A delivery failure is terminal for
/// the run.

use std::error::Error;
use tracing::{info, warn};

use crate::alert::classify::is_strong;
use crate::alert::format::generate_alert;
use crate::analysis::grouping::group_by_date_location;
use crate::config::{AlertConfig, EXPECTED_DIMENSIONS};
use crate::ingest::hko::{self, ExtractedTable};
use crate::ingest::table::parse_forecast_table;
use crate::locations::LOCATION_REGISTRY;
use crate::model::{FetchError, Finding, HourlyForecast};
use crate::notify::Notifier;

// ---------------------------------------------------------------------------
// Forecast source
// ---------------------------------------------------------------------------

/// Where forecast tables come from. Production fetches the HKO page;
/// tests feed fixture pages through `extract_tables`.
pub trait ForecastSource {
    fn tables_for(&self, location_code: &str) -> Result<Vec<ExtractedTable>, FetchError>;
}

/// Live HKO windtable source over a blocking HTTP client.
pub struct HkoSource {
    client: reqwest::blocking::Client,
}

impl HkoSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HkoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastSource for HkoSource {
    fn tables_for(&self, location_code: &str) -> Result<Vec<ExtractedTable>, FetchError> {
        hko::fetch_windtable(&self.client, location_code)
    }
}

// ---------------------------------------------------------------------------
// The monitoring pass
// ---------------------------------------------------------------------------

/// What one pass did, for the daemon shell's logging.
#[derive(Debug, PartialEq)]
pub struct RunOutcome {
    /// Number of (date, location) findings with strong wind.
    pub findings: usize,
    /// Delivery id from the notifier, when an alert was sent.
    pub delivery_id: Option<String>,
}

/// Runs one complete monitoring pass.
///
/// The notifier is invoked only when at least one finding exists.
///
/// # Errors
/// Only notification delivery failures propagate; per-location fetch and
/// per-table parse failures are logged and skipped.
pub fn run_once(
    source: &dyn ForecastSource,
    notifier: &dyn Notifier,
    config: &AlertConfig,
) -> Result<RunOutcome, Box<dyn Error>> {
    let mut findings: Vec<Finding> = Vec::new();

    for location in LOCATION_REGISTRY {
        info!("Checking forecast for {}", location.name);

        let tables = match source.tables_for(location.code) {
            Ok(tables) => tables,
            Err(e) => {
                warn!("Skipping {}: {}", location.name, e);
                continue;
            }
        };

        // The first table on the page is a legend, not a forecast.
        for table in tables.iter().skip(1) {
            let (date, forecasts) = match parse_forecast_table(table, &EXPECTED_DIMENSIONS) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Skipping a table for {}: {}", location.name, e);
                    continue;
                }
            };

            let strong: Vec<HourlyForecast> = forecasts
                .into_iter()
                .filter(|forecast| is_strong(forecast, config))
                .collect();

            if !strong.is_empty() {
                let summaries: Vec<String> = strong.iter().map(|f| f.summary()).collect();
                info!(
                    "Strong wind detected at {} on {}: {}",
                    location.name,
                    date.format("%d/%m"),
                    summaries.join(", ")
                );
                findings.push(Finding {
                    date,
                    location: location.code.to_string(),
                    hours: strong,
                });
            }
        }
    }

    if findings.is_empty() {
        info!(
            "No strong wind forecasted at all {} locations",
            LOCATION_REGISTRY.len()
        );
        return Ok(RunOutcome {
            findings: 0,
            delivery_id: None,
        });
    }

    info!("Strong wind found on {} location-day(s)", findings.len());
    let finding_count = findings.len();
    let aggregate = group_by_date_location(findings);
    let (subject, body) = generate_alert(&aggregate);
    let delivery_id = notifier.notify(&subject, &body)?;
    info!("Alerted: {}", subject);

    Ok(RunOutcome {
        findings: finding_count,
        delivery_id: Some(delivery_id),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
