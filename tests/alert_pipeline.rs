/// Integration tests for the full alerting pipeline
///
/// These tests verify, over raw windtable HTML:
/// 1. HTML → table extraction → parse → classify → group → format → notify
/// 2. The leading legend table is skipped, never parsed
/// 3. The notifier stays untouched when every location is calm
/// 4. A broken location is isolated from the rest of the run
///
/// Run with: cargo test --test alert_pipeline

use std::cell::RefCell;
use std::collections::HashMap;

use windmon_service::config::AlertConfig;
use windmon_service::ingest::hko::{extract_tables, ExtractedTable};
use windmon_service::model::{FetchError, NotifyError};
use windmon_service::notify::Notifier;
use windmon_service::runner::{run_once, ForecastSource};

// Windtable HTML as the HKO page serves it: a legend table first, then one
// captioned table per forecast date with five dimension-major rows.
const STANLEY_PAGE: &str = r#"<html><body>
  <table class="legend">
    <tr><th>Symbol</th><th>Meaning</th></tr>
    <tr><td>NE</td><td>Wind from the north-east</td></tr>
  </table>
  <table class="forecast">
    <caption>Forecast Date: 2024-3-5</caption>
    <tr><th>Time (Hour)</th><td>8</td><td>9</td><td>17</td></tr>
    <tr><th>Temperature (°C)</th><td>18.0</td><td>18.5</td><td>17.0</td></tr>
    <tr><th>Wind Speed (km/h)</th><td>15</td><td>25</td><td>30</td></tr>
    <tr><th>Wind Direction</th><td>NE</td><td>NE</td><td>E</td></tr>
    <tr><th>3-Hourly Rainfall (mm)</th><td>0.0</td><td>0.0</td><td>0.5</td></tr>
  </table>
</body></html>"#;

const CALM_PAGE: &str = r#"<html><body>
  <table class="legend">
    <tr><th>Symbol</th><th>Meaning</th></tr>
  </table>
  <table class="forecast">
    <caption>Forecast Date: 2024-3-5</caption>
    <tr><th>Time (Hour)</th><td>9</td><td>12</td><td>20</td></tr>
    <tr><th>Temperature (°C)</th><td>18.5</td><td>19.5</td><td>18.0</td></tr>
    <tr><th>Wind Speed (km/h)</th><td>10</td><td>19</td><td>35</td></tr>
    <tr><th>Wind Direction</th><td>SE</td><td>SE</td><td>SE</td></tr>
    <tr><th>3-Hourly Rainfall (mm)</th><td>0.0</td><td>0.0</td><td>0.0</td></tr>
  </table>
</body></html>"#;

struct PageSource {
    pages: HashMap<&'static str, &'static str>,
}

impl PageSource {
    fn serving(pages: &[(&'static str, &'static str)]) -> Self {
        Self {
            pages: pages.iter().copied().collect(),
        }
    }
}

impl ForecastSource for PageSource {
    fn tables_for(&self, location_code: &str) -> Result<Vec<ExtractedTable>, FetchError> {
        match self.pages.get(location_code) {
            Some(html) => Ok(extract_tables(html)),
            None => Err(FetchError::Status {
                location: location_code.to_string(),
                status: 500,
            }),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<String, NotifyError> {
        self.sent
            .borrow_mut()
            .push((subject.to_string(), body.to_string()));
        Ok("integration-msg".to_string())
    }
}

#[test]
fn test_end_to_end_single_strong_hour_at_stanley() {
    // Hours 8 (15 km/h) and 17 (30 km/h) fail the classifier for opposite
    // reasons; only 9 (25 km/h) should reach the alert.
    let source = PageSource::serving(&[
        ("TMTWSC", CALM_PAGE),
        ("S", STANLEY_PAGE),
        ("TM", CALM_PAGE),
    ]);
    let notifier = RecordingNotifier::default();

    let outcome = run_once(&source, &notifier, &AlertConfig::default())
        .expect("pipeline should complete");

    assert_eq!(outcome.findings, 1, "exactly one location-day finding");
    assert_eq!(outcome.delivery_id.as_deref(), Some("integration-msg"));

    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    let (subject, body) = &sent[0];

    assert!(
        subject.contains("05/03 @Stanley"),
        "subject must name the date and location, got: {}",
        subject
    );
    assert!(
        body.contains("2024-03-05 (Tue)"),
        "body must head the section with the long date, got: {}",
        body
    );
    assert!(body.contains("\t9:00 - 25 km/h\n"), "got: {}", body);
    assert!(!body.contains("8:00 - 15"), "hour 8 is outside the window");
    assert!(!body.contains("17:00"), "hour 17 is outside the window");
}

#[test]
fn test_end_to_end_calm_everywhere_never_notifies() {
    let source = PageSource::serving(&[
        ("TMTWSC", CALM_PAGE),
        ("S", CALM_PAGE),
        ("TM", CALM_PAGE),
    ]);
    let notifier = RecordingNotifier::default();

    let outcome = run_once(&source, &notifier, &AlertConfig::default())
        .expect("calm pipeline should complete");

    assert_eq!(outcome.findings, 0);
    assert_eq!(outcome.delivery_id, None);
    assert!(
        notifier.sent.borrow().is_empty(),
        "notifier must never be invoked without findings"
    );
}

#[test]
fn test_end_to_end_broken_location_is_isolated() {
    // TMTWSC and TM serve nothing (HTTP 500); Stanley's alert still lands.
    let source = PageSource::serving(&[("S", STANLEY_PAGE)]);
    let notifier = RecordingNotifier::default();

    let outcome = run_once(&source, &notifier, &AlertConfig::default())
        .expect("per-location failures must not abort the run");

    assert_eq!(outcome.findings, 1);
    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].0.contains("@Stanley"));
}
