/// Location registry for the HKO marine strong-wind alerting service.
///
/// Defines the canonical list of windtable locations monitored by this
/// service, along with their display names. This is the single source of
/// truth for location codes — all other modules should reference locations
/// from here rather than hardcoding codes. The registry is fixed at compile
/// time and read-only for the life of the process.

// ---------------------------------------------------------------------------
// Location metadata
// ---------------------------------------------------------------------------

/// Metadata for a single HKO windtable location.
pub struct Location {
    /// Code used as the `stn` query parameter on the windtable page.
    pub code: &'static str,
    /// Human-readable name used in alert text.
    pub name: &'static str,
    /// What the location is monitored for.
    pub description: &'static str,
}

/// All monitored windtable locations, in the order they are checked each
/// run. Registry order also breaks ties if fetching is ever parallelized,
/// so alert text stays deterministic.
///
/// Codes come from the HKO windtable page location selector
/// (hko.gov.hk/en/sports/windtable.shtml).
pub static LOCATION_REGISTRY: &[Location] = &[
    Location {
        code: "TMTWSC",
        name: "Tai Mei Tuk",
        description: "Plover Cove dam strip; the usual flat-water windsurfing spot.",
    },
    Location {
        code: "S",
        name: "Stanley",
        description: "Stanley Main Beach; south-side swell and stronger gusts.",
    },
    Location {
        code: "TM",
        name: "Tap Mun",
        description: "Grass Island; exposed to the north-east monsoon.",
    },
];

/// Returns the codes for all monitored locations, in registry order.
pub fn all_codes() -> Vec<&'static str> {
    LOCATION_REGISTRY.iter().map(|l| l.code).collect()
}

/// Looks up a location by code. Returns `None` if not found.
pub fn find_location(code: &str) -> Option<&'static Location> {
    LOCATION_REGISTRY.iter().find(|l| l.code == code)
}

/// Resolves a code to its display name.
///
/// # Panics
/// Panics on an unknown code. Only registry codes ever reach the alert
/// formatter; an unknown code means the registry and the iteration set have
/// drifted out of sync, which is a bug rather than a runtime condition.
pub fn display_name(code: &str) -> &'static str {
    find_location(code)
        .unwrap_or_else(|| panic!("location code '{}' missing from LOCATION_REGISTRY", code))
        .name
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
