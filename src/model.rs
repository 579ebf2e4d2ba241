/// Shared data types for the strong-wind alerting service.
///
/// Everything downstream of the ingest layer speaks in these types: one
/// `HourlyForecast` per parsed table column, one `Finding` per
/// (date, location) pair with at least one strong-wind hour, and one
/// `AlertAggregate` per run once findings are grouped for formatting.

use chrono::NaiveDate;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Hourly forecast record
// ---------------------------------------------------------------------------

/// One forecast record for a single hour at one location on one date.
///
/// Constructed only via [`HourlyForecast::from_strings`], which performs
/// strict conversion of the five positional cell texts. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Wind speed in km/h.
    pub wind_speed_kmh: u32,
    /// Short wind direction code (e.g. "NE"). Free-form, not validated.
    pub wind_direction: String,
    /// Rainfall over the trailing 3-hour window, in millimetres.
    pub rainfall_mm: f64,
}

impl HourlyForecast {
    /// Builds a record from the five raw cell texts of one table column.
    ///
    /// # Errors
    /// `TableParseError::FieldParse` naming the offending field if any cell
    /// fails strict conversion to its target type. A field failure is fatal
    /// to the owning table, never a per-field skip.
    pub fn from_strings(
        hour: &str,
        temperature: &str,
        wind_speed: &str,
        wind_direction: &str,
        rainfall: &str,
    ) -> Result<Self, TableParseError> {
        let hour: u8 = hour
            .trim()
            .parse()
            .map_err(|_| TableParseError::field("hour", hour))?;
        if hour > 23 {
            return Err(TableParseError::field("hour", &hour.to_string()));
        }
        let temperature_c: f64 = temperature
            .trim()
            .parse()
            .map_err(|_| TableParseError::field("temperature", temperature))?;
        let wind_speed_kmh: u32 = wind_speed
            .trim()
            .parse()
            .map_err(|_| TableParseError::field("wind speed", wind_speed))?;
        let rainfall_mm: f64 = rainfall
            .trim()
            .parse()
            .map_err(|_| TableParseError::field("rainfall", rainfall))?;

        Ok(Self {
            hour,
            temperature_c,
            wind_speed_kmh,
            wind_direction: wind_direction.trim().to_string(),
            rainfall_mm,
        })
    }

    /// One-line summary used in alert bodies and log output,
    /// e.g. `9:00 - 25 km/h`.
    pub fn summary(&self) -> String {
        format!("{}:00 - {} km/h", self.hour, self.wind_speed_kmh)
    }
}

// ---------------------------------------------------------------------------
// Findings and aggregation
// ---------------------------------------------------------------------------

/// The strong-wind hours found for one (forecast date, location) pair.
///
/// Only constructed when `hours` is non-empty; calm location-days never
/// produce a finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub date: NaiveDate,
    /// Registry location code (e.g. "S"), not the display name.
    pub location: String,
    pub hours: Vec<HourlyForecast>,
}

/// Strong-wind hours for one location under one date of an [`AlertAggregate`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup {
    pub location: String,
    pub hours: Vec<HourlyForecast>,
}

/// All locations with strong wind on one forecast date, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub locations: Vec<LocationGroup>,
}

/// Two-level grouping of findings: date → location → strong-wind hours.
///
/// Both levels preserve first-seen insertion order, which drives the
/// ordering of the alert text — backed by `Vec`s rather than a map so the
/// output stays deterministic. Inserting the same (date, location) pair
/// twice replaces the earlier hours in place (last write wins, position
/// preserved).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertAggregate {
    dates: Vec<DateGroup>,
}

impl AlertAggregate {
    /// Folds one finding into the aggregate, preserving first-seen order
    /// for both the date and the location within that date.
    pub fn insert(&mut self, finding: Finding) {
        let date_idx = match self.dates.iter().position(|g| g.date == finding.date) {
            Some(idx) => idx,
            None => {
                self.dates.push(DateGroup {
                    date: finding.date,
                    locations: Vec::new(),
                });
                self.dates.len() - 1
            }
        };
        let date_group = &mut self.dates[date_idx];

        match date_group
            .locations
            .iter_mut()
            .find(|l| l.location == finding.location)
        {
            // Duplicate (date, location): later hours replace earlier ones.
            Some(existing) => existing.hours = finding.hours,
            None => date_group.locations.push(LocationGroup {
                location: finding.location,
                hours: finding.hours,
            }),
        }
    }

    /// Date groups in first-seen order.
    pub fn dates(&self) -> &[DateGroup] {
        &self.dates
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Failure modes of the forecast table parser. Each is fatal to the one
/// table being parsed; the runner decides whether the run continues.
#[derive(Debug, Error, PartialEq)]
pub enum TableParseError {
    /// The table has no `<caption>` carrying the forecast date.
    #[error("table has no caption to parse a forecast date from")]
    MissingCaption,
    /// The caption did not match `Forecast Date: YYYY-M-D`, or the captured
    /// text was not a valid calendar date.
    #[error("failed to parse forecast date, expected \"Forecast Date: YYYY-M-D\", got: {0}")]
    DateFormat(String),
    /// The table's dimension labels or row lengths did not match the
    /// expected windtable schema.
    #[error("unexpected table shape: {0}")]
    TableShape(String),
    /// A cell failed strict conversion to its record field type.
    #[error("failed to parse {field} value '{value}'")]
    FieldParse { field: &'static str, value: String },
}

impl TableParseError {
    fn field(field: &'static str, value: &str) -> Self {
        TableParseError::FieldParse {
            field,
            value: value.trim().to_string(),
        }
    }
}

/// Failure retrieving the forecast page for one location. Isolated per
/// location by the runner: one failed fetch never suppresses alerting for
/// the remaining locations.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for location '{location}' failed: {source}")]
    Request {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("forecast page returned status {status} for location '{location}'")]
    Status { location: String, status: u16 },
}

/// Failure delivering a notification. Terminal for the run that raised it;
/// retry policy belongs to the transport, not this service.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),
    #[error("notification endpoint returned status {0}")]
    Status(u16),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
