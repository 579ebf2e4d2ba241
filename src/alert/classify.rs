/// Strong-wind classification.
///
/// A single pure predicate: an hour is "strong" when its wind speed meets
/// the configured minimum AND the hour falls inside the configured daylight
/// window, both bounds inclusive. Hours outside the window are ignored no
/// matter how hard it blows — nobody is on the water at 03:00.

use crate::config::AlertConfig;
use crate::model::HourlyForecast;

/// Returns true if this hour should contribute to an alert.
pub fn is_strong(forecast: &HourlyForecast, config: &AlertConfig) -> bool {
    forecast.wind_speed_kmh >= config.min_wind_speed_kmh
        && (config.alert_hour_start..=config.alert_hour_end).contains(&forecast.hour)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
