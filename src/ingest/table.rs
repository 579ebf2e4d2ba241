/// Forecast table parser: caption date extraction, header-schema
/// validation, and strict per-hour record construction.
///
/// The parser works on the abstract [`TableElement`] capability rather than
/// on any HTML library's element types, so the HTML layer (`ingest::hko`)
/// can be swapped without touching the parsing invariants, and tests can
/// feed hand-built tables directly.
///
/// Windtable layout is dimension-major: one `<tr>` per dimension, the first
/// cell a `<th>` label and the remaining cells one value per forecast hour:
///
/// ```text
/// caption: Forecast Date: 2024-3-5
/// Time (Hour)            | 8    | 9    | 17
/// Temperature (°C)       | 18.0 | 18.5 | 17.0
/// Wind Speed (km/h)      | 15   | 25   | 30
/// Wind Direction         | NE   | NE   | E
/// 3-Hourly Rainfall (mm) | 0.0  | 0.0  | 0.5
/// ```

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{HourlyForecast, TableParseError};

/// Caption pattern carrying the forecast date. The page does not zero-pad
/// month or day.
static FORECAST_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Forecast Date: (\d{4}-\d{1,2}-\d{1,2})")
        .expect("Invalid forecast date regex")
});

// ---------------------------------------------------------------------------
// Abstract table capability
// ---------------------------------------------------------------------------

/// Minimal view of one table: a caption and ordered rows of cell texts.
///
/// `ingest::hko` adapts HTML `<table>` elements into this; tests implement
/// it directly. Keeps the parser free of any HTML library's types.
pub trait TableElement {
    /// Caption text, if the table has one.
    fn caption(&self) -> Option<String>;
    /// All rows in document order, each row its cell texts in order.
    fn rows(&self) -> Vec<Vec<String>>;
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses one windtable forecast table into its forecast date and hourly
/// records, in table column order (semantically hour-ascending, never
/// re-sorted).
///
/// # Errors
/// - `MissingCaption` — no caption to carry the forecast date.
/// - `DateFormat` — caption does not match `Forecast Date: YYYY-M-D`, or
///   the captured text is not a valid calendar date.
/// - `TableShape` — dimension labels or row lengths do not match
///   `expected`.
/// - `FieldParse` — a value cell failed strict conversion.
pub fn parse_forecast_table(
    table: &dyn TableElement,
    expected: &[&str; 5],
) -> Result<(NaiveDate, Vec<HourlyForecast>), TableParseError> {
    let caption = table.caption().ok_or(TableParseError::MissingCaption)?;
    let caption = caption.trim().to_string();

    let date_text = FORECAST_DATE_RE
        .captures(&caption)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| TableParseError::DateFormat(caption.clone()))?;
    let date = NaiveDate::parse_from_str(date_text.as_str(), "%Y-%m-%d")
        .map_err(|_| TableParseError::DateFormat(caption.clone()))?;

    let rows = table.rows();
    let labels: Vec<&str> = rows
        .iter()
        .map(|row| row.first().map(String::as_str).unwrap_or(""))
        .collect();
    if labels != expected {
        return Err(TableParseError::TableShape(format!(
            "expected dimension labels {:?}, got {:?}",
            expected, labels
        )));
    }

    // Every dimension row must cover the same hours before zipping columns.
    let width = rows[0].len();
    for (row, label) in rows.iter().zip(expected) {
        if row.len() != width {
            return Err(TableParseError::TableShape(format!(
                "'{}' row has {} cells, expected {}",
                label,
                row.len(),
                width
            )));
        }
    }

    let mut forecasts = Vec::with_capacity(width - 1);
    for col in 1..width {
        forecasts.push(HourlyForecast::from_strings(
            &rows[0][col],
            &rows[1][col],
            &rows[2][col],
            &rows[3][col],
            &rows[4][col],
        )?);
    }

    Ok((date, forecasts))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
