//! Period validity: real payload versus empty placeholder

use deskpulse_core::Category;
use deskpulse_store::DocumentStore;

/// Minimum serialized size for a document to count as meaningful data.
///
/// Placeholder documents are written for periods with no source data; the
/// byte floor tells real payloads from `{}`-shaped stubs without parsing.
/// Weekly and daily documents share the floor even though their typical
/// sizes differ; nothing observed so far needs separate thresholds.
pub const MIN_DOC_BYTES: u64 = 100;

/// A week is worth indexing when a primary document (pulse or ticket list)
/// exists with meaningful content.
pub fn week_has_data(store: &DocumentStore, week_key: &str) -> bool {
    [Category::WeeklyPulse, Category::WeeklyTickets]
        .iter()
        .any(|&category| store.size(category, week_key) > MIN_DOC_BYTES)
}

/// A day is worth indexing when its daily snapshot clears the same floor.
pub fn day_has_data(store: &DocumentStore, day_key: &str) -> bool {
    store.size(Category::Daily, day_key) > MIN_DOC_BYTES
}
