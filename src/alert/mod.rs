/// Alerting for the strong-wind service.
///
/// Submodules:
/// - `classify` — the strong-wind predicate over a single hourly record.
/// - `format` — deterministic rendering of grouped findings into the
///   notification subject and body.

pub mod classify;
pub mod format;
