/// HKO windtable page client: URL construction + HTML table extraction.
///
/// The Hong Kong Observatory publishes its marine wind forecast as an HTML
/// page with one table per forecast date (plus a leading legend table):
///   https://www.hko.gov.hk/en/sports/windtable.shtml?stn=<code>
///
/// This module owns the only dependency on an HTML library. Tables are
/// extracted eagerly into [`ExtractedTable`]s — plain captions and cell
/// texts — which implement the [`TableElement`] capability the parser in
/// `ingest::table` consumes. See `fixtures.rs` for representative payloads.

use scraper::{Html, Selector};

use crate::ingest::table::TableElement;
use crate::model::FetchError;

const DATA_URL: &str = "https://www.hko.gov.hk/en/sports/windtable.shtml";

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the windtable page URL for one location code.
///
/// The page selects the location via the `stn` query parameter; registry
/// codes are plain uppercase ASCII so no percent-encoding is needed.
pub fn build_windtable_url(location_code: &str) -> String {
    format!("{}?stn={}", DATA_URL, location_code)
}

// ---------------------------------------------------------------------------
// Table extraction
// ---------------------------------------------------------------------------

/// One `<table>` lifted out of the page: caption text plus cell texts, all
/// owned. Decouples everything downstream from the HTML library's borrowed
/// element types.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTable {
    pub caption: Option<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableElement for ExtractedTable {
    fn caption(&self) -> Option<String> {
        self.caption.clone()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }
}

/// Extracts every `<table>` from a windtable page, in document order.
///
/// Cell text is the concatenated text content of each `<td>`/`<th>`,
/// whitespace-trimmed. Tables without captions (the legend) come through
/// with `caption: None`; the parser decides what to reject.
pub fn extract_tables(html: &str) -> Vec<ExtractedTable> {
    let table_sel = Selector::parse("table").expect("Invalid CSS selector for tables");
    let caption_sel = Selector::parse("caption").expect("Invalid CSS selector for captions");
    let row_sel = Selector::parse("tr").expect("Invalid CSS selector for rows");
    let cell_sel = Selector::parse("td, th").expect("Invalid CSS selector for cells");

    let document = Html::parse_document(html);

    document
        .select(&table_sel)
        .map(|table| {
            let caption = table
                .select(&caption_sel)
                .next()
                .map(|c| c.text().collect::<String>().trim().to_string());

            let rows = table
                .select(&row_sel)
                .map(|row| {
                    row.select(&cell_sel)
                        .map(|cell| cell.text().collect::<String>().trim().to_string())
                        .collect()
                })
                .collect();

            ExtractedTable { caption, rows }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches the windtable page for one location and extracts its tables.
///
/// # Errors
/// - `FetchError::Request` — transport failure (DNS, TLS, timeout, body).
/// - `FetchError::Status` — non-2xx response from the page.
pub fn fetch_windtable(
    client: &reqwest::blocking::Client,
    location_code: &str,
) -> Result<Vec<ExtractedTable>, FetchError> {
    let url = build_windtable_url(location_code);

    let response = client.get(&url).send().map_err(|e| FetchError::Request {
        location: location_code.to_string(),
        source: e,
    })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            location: location_code.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().map_err(|e| FetchError::Request {
        location: location_code.to_string(),
        source: e,
    })?;

    Ok(extract_tables(&body))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
