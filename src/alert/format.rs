/// Alert rendering: turns an [`AlertAggregate`] into the notification
/// subject and body.
///
/// Pure and total over well-formed input — no clock, no randomness — so
/// formatting the same aggregate twice yields byte-identical output. Dates
/// and locations render in the aggregate's first-seen order.
///
/// Subject:
///   Strong wind forecasted: 05/03 @Stanley, Tap Mun; 06/03 @Stanley
///
/// Body, one section per date, one block per location, one line per hour:
///   2024-03-05 (Tue)
///   Stanley
///   \t9:00 - 25 km/h
///   ...

use crate::locations;
use crate::model::AlertAggregate;

/// Renders `(subject, body)` for one alert.
///
/// # Panics
/// Panics if the aggregate carries a location code that is not in the
/// registry (via [`locations::display_name`]) — the registry is closed and
/// drives the iteration set, so that can only be a bug.
pub fn generate_alert(aggregate: &AlertAggregate) -> (String, String) {
    let date_summaries: Vec<String> = aggregate
        .dates()
        .iter()
        .map(|group| {
            let names: Vec<&str> = group
                .locations
                .iter()
                .map(|l| locations::display_name(&l.location))
                .collect();
            format!("{} @{}", group.date.format("%d/%m"), names.join(", "))
        })
        .collect();
    let subject = format!("Strong wind forecasted: {}", date_summaries.join("; "));

    let mut body = String::new();
    for group in aggregate.dates() {
        body.push_str(&format!("{}\n", group.date.format("%Y-%m-%d (%a)")));
        for location in &group.locations {
            body.push_str(locations::display_name(&location.location));
            body.push('\n');
            for hour in &location.hours {
                body.push('\t');
                body.push_str(&hour.summary());
                body.push('\n');
            }
        }
    }

    (subject, body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
