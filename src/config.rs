/// Alert configuration loader - thresholds and the expected table schema.
///
/// The built-in defaults reproduce the service's long-standing policy
/// (20 km/h minimum inside the 09:00–16:00 daylight window). An optional
/// `windmon.toml` in the working directory overrides them, making it easy
/// to tune thresholds without recompiling the service.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Dimension labels the forecast table must carry, in order. This is the
/// schema contract with the windtable page: any reordering, omission, or
/// extra column on the page is rejected by the parser rather than guessed
/// around.
pub const EXPECTED_DIMENSIONS: [&str; 5] = [
    "Time (Hour)",
    "Temperature (°C)",
    "Wind Speed (km/h)",
    "Wind Direction",
    "3-Hourly Rainfall (mm)",
];

/// Strong-wind alert thresholds, read-only for the duration of a run.
///
/// Passed into the classifier explicitly rather than read from globals so
/// the classifier stays pure and independently testable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    /// Minimum wind speed to alert on, in km/h (inclusive).
    pub min_wind_speed_kmh: u32,
    /// First hour of the daylight window to check (inclusive).
    pub alert_hour_start: u8,
    /// Last hour of the daylight window to check (inclusive).
    pub alert_hour_end: u8,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            min_wind_speed_kmh: 20,
            alert_hour_start: 9,
            alert_hour_end: 16,
        }
    }
}

/// Loads the alert configuration, taking overrides from `windmon.toml` in
/// the working directory when present and defaults otherwise.
///
/// # Panics
/// Panics if `windmon.toml` exists but is unreadable or malformed. This is
/// intentional — silently alerting on the wrong thresholds is worse than
/// failing to start.
pub fn load_config() -> AlertConfig {
    load_config_from(Path::new("windmon.toml"))
}

fn load_config_from(path: &Path) -> AlertConfig {
    if !path.exists() {
        return AlertConfig::default();
    }

    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
