/// Forecast ingestion for the strong-wind alerting service.
///
/// Submodules:
/// - `hko` — windtable page client: URL construction + HTML table extraction.
/// - `table` — forecast table parser over the abstract table capability.
/// - `fixtures` (test only) — representative windtable HTML payloads.
///
/// If the service ever grows a second forecast source, it gets its own
/// file under ingest/ rather than bloating these.

pub mod hko;
pub mod table;

#[cfg(test)]
pub(crate) mod fixtures;
