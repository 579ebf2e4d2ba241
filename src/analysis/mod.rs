/// Data organization for the strong-wind alerting service.
///
/// Submodules:
/// - `grouping` — organizes the run's flat findings into per-date,
///   per-location groups for the alert formatter.

pub mod grouping;
