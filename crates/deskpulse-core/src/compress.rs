//! Top-N + "other" breakdown compression
//!
//! Long category lists are reduced to the N largest entries plus one
//! aggregate remainder. Counts are exact integers throughout; the total is
//! preserved bit-for-bit or the run aborts.

use serde::{Deserialize, Serialize};

/// Aggregate of the categories folded out of the visible list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherBucket {
    pub count: u64,
    pub category_count: usize,
}

/// Result of compressing a category→count mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Top-N entries, count descending; ties keep input order.
    pub visible: Vec<(String, u64)>,
    /// Remainder aggregate, absent when nothing was folded.
    pub other: Option<OtherBucket>,
}

impl Compressed {
    pub fn total(&self) -> u64 {
        self.visible.iter().map(|(_, c)| c).sum::<u64>()
            + self.other.as_ref().map_or(0, |o| o.count)
    }
}

/// Compress `counts` down to the `limit` largest entries plus an "other"
/// aggregate over the rest.
///
/// The input order is the tie-break (stable sort), so callers that build the
/// mapping in first-seen order get deterministic output.
pub fn compress(counts: &[(String, u64)], limit: usize) -> Compressed {
    let mut ranked: Vec<&(String, u64)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let cut = limit.min(ranked.len());
    let visible: Vec<(String, u64)> = ranked[..cut]
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .collect();

    let rest = &ranked[cut..];
    let other = if rest.is_empty() {
        None
    } else {
        Some(OtherBucket {
            count: rest.iter().map(|(_, c)| c).sum(),
            category_count: rest.len(),
        })
    };

    let compressed = Compressed { visible, other };
    let total_in: u64 = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(
        compressed.total(),
        total_in,
        "breakdown compression changed the total"
    );
    compressed
}

/// Display label for the folded remainder.
pub fn other_label(category_count: usize) -> String {
    format!("Other ({category_count} categories)")
}
