//! Pure analysis over fetched ticket rows

use chrono::NaiveDate;

use crate::table::TicketTable;

const COL_CREATED: &str = "created_at";
const COL_PRODUCT: &str = "product";
const COL_ISSUE_TYPE: &str = "issue_type";

/// Tallies for one period's rows.
///
/// The mappings keep first-seen order so downstream compression tie-breaks
/// stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodAnalysis {
    pub total: u64,
    pub by_product: Vec<(String, u64)>,
    pub by_issue_type: Vec<(String, u64)>,
    pub refund_count: u64,
}

/// Rows created within the inclusive `[start, end]` date range.
///
/// Rows with a missing or unparseable creation date are dropped.
pub fn filter_rows_by_date_range(
    table: &TicketTable,
    start: NaiveDate,
    end: NaiveDate,
) -> TicketTable {
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            table
                .cell(row, COL_CREATED)
                .and_then(parse_row_date)
                .is_some_and(|date| date >= start && date <= end)
        })
        .cloned()
        .collect();

    TicketTable {
        rows,
        header: table.header.clone(),
    }
}

/// Tally totals, per-product and per-type counts and refunds for the rows.
pub fn analyze_period(table: &TicketTable) -> PeriodAnalysis {
    let mut analysis = PeriodAnalysis::default();

    for row in &table.rows {
        analysis.total += 1;

        if let Some(product) = table.cell(row, COL_PRODUCT) {
            if !product.is_empty() {
                bump(&mut analysis.by_product, product);
            }
        }

        if let Some(issue_type) = table.cell(row, COL_ISSUE_TYPE) {
            if !issue_type.is_empty() {
                bump(&mut analysis.by_issue_type, issue_type);
                if issue_type.to_ascii_lowercase().contains("refund") {
                    analysis.refund_count += 1;
                }
            }
        }
    }

    analysis
}

/// Timestamps come through as `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`; the
/// date prefix is all the filter needs.
fn parse_row_date(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn bump(counts: &mut Vec<(String, u64)>, key: &str) {
    if let Some(entry) = counts.iter_mut().find(|(label, _)| label == key) {
        entry.1 += 1;
    } else {
        counts.push((key.to_string(), 1));
    }
}
