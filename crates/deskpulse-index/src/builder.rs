//! Full-rescan index builder
//!
//! The set of valid periods can change retroactively (an empty period can be
//! backfilled later), so every run re-derives validity from current storage
//! state instead of trusting a cached index.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use deskpulse_core::{Category, IndexDocument, PeriodId};
use deskpulse_store::DocumentStore;

use crate::validate::{day_has_data, week_has_data};

static WEEK_KEY_RE: OnceLock<Regex> = OnceLock::new();
static DAY_KEY_RE: OnceLock<Regex> = OnceLock::new();

fn week_key_re() -> &'static Regex {
    WEEK_KEY_RE.get_or_init(|| Regex::new(r"^\d{4}-W\d{2}$").unwrap())
}

fn day_key_re() -> &'static Regex {
    DAY_KEY_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Scan the store and derive a fresh index document.
///
/// Weeks come from all weekly-bearing categories, days from the daily
/// category. Keys that do not look like period identifiers are skipped
/// without logging; unrelated files are expected to coexist. Months are
/// derived from the retained weeks, never scanned.
pub fn build_index(store: &DocumentStore) -> Result<IndexDocument> {
    let mut weeks: BTreeSet<String> = BTreeSet::new();
    for category in Category::WEEKLY {
        for key in store.list_keys(category)? {
            if week_key_re().is_match(&key) {
                weeks.insert(key);
            }
        }
    }
    weeks.retain(|week| week_has_data(store, week));

    let mut days: BTreeSet<String> = BTreeSet::new();
    for key in store.list_keys(Category::Daily)? {
        if day_key_re().is_match(&key) && day_has_data(store, &key) {
            days.insert(key);
        }
    }

    let months: BTreeSet<String> = weeks
        .iter()
        .filter_map(|week| PeriodId::from_str(week).ok())
        .map(|id| id.month_key())
        .collect();

    // Identifiers are zero-padded fixed-width with the most significant
    // field first, so lexicographic descending is chronological descending.
    let weeks: Vec<String> = weeks.into_iter().rev().collect();
    let months: Vec<String> = months.into_iter().rev().collect();
    let days: Vec<String> = days.into_iter().rev().collect();

    Ok(IndexDocument {
        latest: weeks.first().cloned(),
        latest_month: months.first().cloned(),
        latest_day: days.first().cloned(),
        weeks,
        months,
        days,
    })
}

/// Rebuild and atomically publish the index; returns what was written.
pub fn publish_index(store: &DocumentStore) -> Result<IndexDocument> {
    let index = build_index(store)?;
    store.write_index(&index)?;
    tracing::debug!(
        weeks = index.weeks.len(),
        months = index.months.len(),
        days = index.days.len(),
        "index rebuilt"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskpulse_store::atomic_write;

    fn write_doc(store: &DocumentStore, category: Category, key: &str, size: usize) {
        let path = store.data_root().document_path(category, key);
        atomic_write(&path, "x".repeat(size).as_bytes()).unwrap();
    }

    fn seeded_store(temp: &tempfile::TempDir) -> DocumentStore {
        let store = DocumentStore::new(temp.path());
        write_doc(&store, Category::WeeklyPulse, "2026-W04", 500);
        write_doc(&store, Category::WeeklyPulse, "2026-W05", 500);
        write_doc(&store, Category::WeeklyQa, "2026-W05", 500);
        write_doc(&store, Category::Daily, "2026-01-26", 400);
        store
    }

    #[test]
    fn test_scan_scenario() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = seeded_store(&temp);

        let index = build_index(&store).unwrap();
        assert_eq!(index.weeks, vec!["2026-W05", "2026-W04"]);
        assert_eq!(index.latest.as_deref(), Some("2026-W05"));
        assert_eq!(index.months, vec!["2026-01"]);
        assert_eq!(index.latest_month.as_deref(), Some("2026-01"));
        assert_eq!(index.days, vec!["2026-01-26"]);
        assert_eq!(index.latest_day.as_deref(), Some("2026-01-26"));
    }

    #[test]
    fn test_empty_store() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = DocumentStore::new(temp.path());

        let index = build_index(&store).unwrap();
        assert!(index.weeks.is_empty());
        assert!(index.months.is_empty());
        assert!(index.days.is_empty());
        assert_eq!(index.latest, None);
        assert_eq!(index.latest_month, None);
        assert_eq!(index.latest_day, None);
    }

    #[test]
    fn test_invalid_weeks_filtered_out() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = DocumentStore::new(temp.path());
        write_doc(&store, Category::WeeklyPulse, "2026-W05", 500);
        // W04 exists only as a tiny placeholder and a QA document; neither
        // makes it valid.
        write_doc(&store, Category::WeeklyPulse, "2026-W04", 2);
        write_doc(&store, Category::WeeklyQa, "2026-W04", 500);

        let index = build_index(&store).unwrap();
        assert_eq!(index.weeks, vec!["2026-W05"]);
        assert_eq!(index.months, vec!["2026-01"]);
    }

    #[test]
    fn test_malformed_keys_skipped() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = DocumentStore::new(temp.path());
        write_doc(&store, Category::WeeklyPulse, "2026-W05", 500);
        write_doc(&store, Category::WeeklyPulse, "notes", 500);
        write_doc(&store, Category::WeeklyPulse, "2026-W5", 500);
        write_doc(&store, Category::Daily, "2026-01-26", 400);
        write_doc(&store, Category::Daily, "summary-latest", 400);

        let index = build_index(&store).unwrap();
        assert_eq!(index.weeks, vec!["2026-W05"]);
        assert_eq!(index.days, vec!["2026-01-26"]);
    }

    #[test]
    fn test_months_follow_week_mondays() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = DocumentStore::new(temp.path());
        // 2026-W01's Monday is 2025-12-29; the month list must say so.
        write_doc(&store, Category::WeeklyPulse, "2026-W01", 500);
        write_doc(&store, Category::WeeklyPulse, "2026-W05", 500);
        // A valid day in February must not leak into months.
        write_doc(&store, Category::Daily, "2026-02-03", 400);

        let index = build_index(&store).unwrap();
        assert_eq!(index.months, vec!["2026-01", "2025-12"]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = seeded_store(&temp);

        publish_index(&store).unwrap();
        let first = std::fs::read(store.data_root().index_path()).unwrap();
        publish_index(&store).unwrap();
        let second = std::fs::read(store.data_root().index_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_published_index_is_readable_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = seeded_store(&temp);

        let index = publish_index(&store).unwrap();
        let raw = std::fs::read_to_string(store.data_root().index_path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["latest"], "2026-W05");
        assert_eq!(parsed["weeks"].as_array().unwrap().len(), index.weeks.len());
    }

    #[test]
    fn test_week_sorting_across_years() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = DocumentStore::new(temp.path());
        write_doc(&store, Category::WeeklyPulse, "2025-W52", 500);
        write_doc(&store, Category::WeeklyPulse, "2026-W01", 500);
        write_doc(&store, Category::WeeklyPulse, "2025-W51", 500);

        let index = build_index(&store).unwrap();
        assert_eq!(index.weeks, vec!["2026-W01", "2025-W52", "2025-W51"]);
        assert_eq!(index.latest.as_deref(), Some("2026-W01"));
    }
}
