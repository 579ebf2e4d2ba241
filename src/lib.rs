/// windmon_service: Hong Kong marine strong-wind alerting service.
///
/// # Module structure
///
/// ```text
/// windmon_service
/// ├── model       — shared data types (HourlyForecast, Finding, AlertAggregate, …)
/// ├── config      — alert thresholds + expected table schema (windmon.toml)
/// ├── locations   — HKO windtable location registry (code → display name)
/// ├── ingest
/// │   ├── hko     — HKO windtable page: URL construction + HTML table extraction
/// │   ├── table   — forecast table parser: caption date, header schema, records
/// │   └── fixtures (test only) — representative windtable HTML payloads
/// ├── alert
/// │   ├── classify — strong-wind predicate over a single hourly record
/// │   └── format   — deterministic alert subject/body rendering
/// ├── analysis
/// │   └── grouping — organizes flat findings into per-date, per-location groups
/// ├── notify      — notification delivery (webhook transport)
/// └── runner      — one monitoring pass: fetch → parse → classify → alert
/// ```

/// Public modules
pub mod alert;
pub mod analysis;
pub mod config;
pub mod ingest;
pub mod locations;
pub mod model;
pub mod notify;
pub mod runner;
