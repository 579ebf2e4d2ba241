/// Finding aggregation.
///
/// `group_by_date_location` takes the flat list of findings accumulated
/// over one run (registry order, table order within a location) and folds
/// them into the two-level [`AlertAggregate`] the formatter consumes. The
/// function is total: well-formed findings cannot fail to group.
///
/// The integration-style test at the bottom exercises the
/// classify → group → format chain, since grouping is the middle step.

use crate::model::{AlertAggregate, Finding};

/// Groups findings by forecast date, then by location, preserving
/// first-seen order at both levels.
///
/// A duplicate (date, location) pair overwrites the earlier hours for that
/// location in place. In practice each location contributes at most one
/// finding per date per run, because the page carries one table per date.
pub fn group_by_date_location(findings: Vec<Finding>) -> AlertAggregate {
    let mut aggregate = AlertAggregate::default();
    for finding in findings {
        aggregate.insert(finding);
    }
    aggregate
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
