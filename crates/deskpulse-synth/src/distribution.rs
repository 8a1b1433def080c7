//! Weighted distribution generation
//!
//! Counts are randomized around configured weights, then rescaled toward a
//! target total. The realized sum may drift from the target by a small
//! rounding residual (bounded by the bucket count); callers that need an
//! exact sum reconcile it themselves, the way [`split_week`] does with its
//! remainder day.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use deskpulse_core::DailyTrendEntry;

const DAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Uniform draw within `±pct` of `base`, floored at 1.
pub fn vary<R: Rng>(rng: &mut R, base: u64, pct: f64) -> u64 {
    let lo = (base as f64 * (1.0 - pct)) as u64;
    let hi = (base as f64 * (1.0 + pct)) as u64;
    rng.gen_range(lo..=hi).max(1)
}

/// Distribute `total` across buckets proportionally to `weights`.
///
/// Each weight is first randomized within `±variance` of itself, then the
/// whole vector is rescaled by `total / Σraw` and rounded per bucket with
/// `floor` as the minimum. Output is in input order; sorting for
/// presentation is the caller's choice.
pub fn weighted_spread<R: Rng>(
    rng: &mut R,
    total: u64,
    weights: &[u64],
    variance: f64,
    floor: u64,
) -> Vec<u64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let raw: Vec<u64> = weights.iter().map(|&w| vary(rng, w, variance)).collect();
    let raw_sum: u64 = raw.iter().sum();
    let scale = total as f64 / raw_sum as f64;
    raw.iter()
        .map(|&r| ((r as f64 * scale).round() as u64).max(floor))
        .collect()
}

/// Split a weekly total across the seven weekdays, exactly.
///
/// Six days draw within variance of `total / 7`, each capped at the
/// unallocated remainder; the last day absorbs whatever is left, so the
/// seven counts always sum to `total`.
pub fn split_week<R: Rng>(rng: &mut R, monday: NaiveDate, total: u64) -> Vec<DailyTrendEntry> {
    let mut remaining = total;
    let mut trend = Vec::with_capacity(7);
    for (offset, day) in DAY_ABBR.iter().enumerate() {
        let count = if offset < 6 {
            vary(rng, total / 7, 0.4).min(remaining)
        } else {
            remaining
        };
        trend.push(DailyTrendEntry {
            date: monday + Duration::days(offset as i64),
            day: (*day).to_string(),
            count,
        });
        remaining -= count;
    }
    trend
}
