//! Live-mode daily report assembly

use chrono::NaiveDate;

use deskpulse_core::{
    compress, other_label, pct, DailyDocument, DailyKpi, ProductSlice, TypeSlice,
};

use crate::activity::collect_agent_activity;
use crate::analyze::{analyze_period, filter_rows_by_date_range};
use crate::roster::AgentRoster;
use crate::search::SearchCounter;
use crate::table::{SourceError, TicketSource};

const PRODUCT_TOP_N: usize = 10;
const TYPE_TOP_N: usize = 8;

/// Build the daily snapshot for `date` from live collaborator data.
///
/// An entirely empty fetch (not just an empty target day) produces a
/// well-formed zero-valued document instead of an error.
pub fn build_daily_report<S, C>(
    source: &S,
    counter: &C,
    roster: &AgentRoster,
    date: NaiveDate,
) -> Result<DailyDocument, SourceError>
where
    S: TicketSource + ?Sized,
    C: SearchCounter + ?Sized,
{
    let token = source.access_token()?;
    let table = source.fetch(&token)?;

    if table.rows.is_empty() {
        tracing::info!(%date, "ticket source returned no rows; emitting zero document");
        return Ok(zero_document(date));
    }

    let day_rows = filter_rows_by_date_range(&table, date, date);
    tracing::debug!(%date, rows = day_rows.rows.len(), "analyzing target day");
    let analysis = analyze_period(&day_rows);
    let total = analysis.total;

    let top_product = analysis
        .by_product
        .iter()
        .fold(None::<&(String, u64)>, |best, entry| match best {
            Some(current) if current.1 >= entry.1 => Some(current),
            _ => Some(entry),
        })
        .map(|(name, _)| display_product(name));

    let compressed = compress(&analysis.by_product, PRODUCT_TOP_N);
    let mut product_breakdown: Vec<ProductSlice> = compressed
        .visible
        .iter()
        .map(|(name, count)| ProductSlice {
            product: display_product(name),
            count: *count,
            pct: pct(*count, total),
            delta: None,
            direction: None,
            top_issues: Vec::new(),
        })
        .collect();
    if let Some(other) = &compressed.other {
        product_breakdown.push(ProductSlice {
            product: other_label(other.category_count),
            count: other.count,
            pct: pct(other.count, total),
            delta: None,
            direction: None,
            top_issues: Vec::new(),
        });
    }

    let compressed_types = compress(&analysis.by_issue_type, TYPE_TOP_N);
    let mut ticket_types: Vec<TypeSlice> = compressed_types
        .visible
        .iter()
        .map(|(name, count)| TypeSlice {
            label: display_type(name),
            count: *count,
            pct: pct(*count, total),
            delta: None,
            direction: None,
        })
        .collect();
    if let Some(other) = &compressed_types.other {
        ticket_types.push(TypeSlice {
            label: other_label(other.category_count),
            count: other.count,
            pct: pct(other.count, total),
            delta: None,
            direction: None,
        });
    }

    let agent_activity = collect_agent_activity(counter, roster, date);

    Ok(DailyDocument {
        period: period_label(date),
        start_date: date,
        end_date: date,
        kpi: DailyKpi {
            total_tickets: total,
            top_product,
            refunds: analysis.refund_count,
            product_count: analysis.by_product.len(),
        },
        product_breakdown,
        ticket_types,
        agent_activity,
    })
}

fn zero_document(date: NaiveDate) -> DailyDocument {
    DailyDocument {
        period: period_label(date),
        start_date: date,
        end_date: date,
        kpi: DailyKpi {
            total_tickets: 0,
            top_product: None,
            refunds: 0,
            product_count: 0,
        },
        product_breakdown: Vec::new(),
        ticket_types: Vec::new(),
        agent_activity: Vec::new(),
    }
}

fn period_label(date: NaiveDate) -> String {
    format!("{date} ({})", date.format("%a"))
}

/// Source product keys are lowercase snake case; the dashboard shows them
/// upper-cased with spaces.
fn display_product(raw: &str) -> String {
    raw.replace('_', " ").to_uppercase()
}

/// Issue-type keys become title-cased labels; empty keys show as Unknown.
fn display_type(raw: &str) -> String {
    if raw.is_empty() {
        return "Unknown".to_string();
    }
    raw.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{QueryError, SearchQuery};
    use crate::table::TicketTable;
    use std::collections::BTreeMap;

    struct StaticSource {
        table: TicketTable,
    }

    impl TicketSource for StaticSource {
        fn access_token(&self) -> Result<String, SourceError> {
            Ok("test-token".to_string())
        }

        fn fetch(&self, _token: &str) -> Result<TicketTable, SourceError> {
            Ok(self.table.clone())
        }
    }

    struct StaticCounter(u64);

    impl SearchCounter for StaticCounter {
        fn search_count(&self, _query: &SearchQuery) -> Result<u64, QueryError> {
            Ok(self.0)
        }
    }

    fn roster() -> AgentRoster {
        AgentRoster::new(BTreeMap::from([(
            "1001".to_string(),
            "Marcus".to_string(),
        )]))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
    }

    fn rows(pairs: &[(&str, &str, &str)]) -> TicketTable {
        let rows = pairs
            .iter()
            .map(|&(created, product, issue_type)| {
                vec![
                    created.to_string(),
                    product.to_string(),
                    issue_type.to_string(),
                ]
            })
            .collect();
        TicketTable::new(&["created_at", "product", "issue_type"], rows)
    }

    #[test]
    fn test_empty_fetch_yields_zero_document() {
        let source = StaticSource {
            table: TicketTable::default(),
        };
        let doc = build_daily_report(&source, &StaticCounter(5), &roster(), date()).unwrap();

        assert_eq!(doc.kpi.total_tickets, 0);
        assert_eq!(doc.kpi.top_product, None);
        assert!(doc.product_breakdown.is_empty());
        assert!(doc.agent_activity.is_empty());
        assert_eq!(doc.period, "2026-01-26 (Mon)");
        assert_eq!(doc.start_date, doc.end_date);
    }

    #[test]
    fn test_live_document_from_rows() {
        let source = StaticSource {
            table: rows(&[
                ("2026-01-26", "rift_2", "troubleshooting"),
                ("2026-01-26", "rift_2", "refund_request"),
                ("2026-01-26", "rift", "troubleshooting"),
                ("2026-01-27", "forge_x", "order_related"),
            ]),
        };
        let doc = build_daily_report(&source, &StaticCounter(7), &roster(), date()).unwrap();

        // The Jan 27 row is outside the target day.
        assert_eq!(doc.kpi.total_tickets, 3);
        assert_eq!(doc.kpi.top_product.as_deref(), Some("RIFT 2"));
        assert_eq!(doc.kpi.refunds, 1);
        assert_eq!(doc.kpi.product_count, 2);

        assert_eq!(doc.product_breakdown[0].product, "RIFT 2");
        assert_eq!(doc.product_breakdown[0].count, 2);
        assert_eq!(doc.product_breakdown[0].pct, 66.7);
        assert_eq!(doc.ticket_types[0].label, "Troubleshooting");

        let marcus = &doc.agent_activity[0];
        assert_eq!(marcus.assigned, 7);
        assert_eq!(marcus.avg_assigned_per_day, 1.0);
    }

    #[test]
    fn test_breakdown_totals_preserved_through_other() {
        let mut pairs = Vec::new();
        for product in [
            "p01", "p02", "p03", "p04", "p05", "p06", "p07", "p08", "p09", "p10", "p11", "p12",
        ] {
            pairs.push(("2026-01-26", product, "troubleshooting"));
            pairs.push(("2026-01-26", product, "troubleshooting"));
        }
        let source = StaticSource {
            table: rows(&pairs),
        };
        let doc = build_daily_report(&source, &StaticCounter(0), &roster(), date()).unwrap();

        assert_eq!(doc.product_breakdown.len(), PRODUCT_TOP_N + 1);
        let shown: u64 = doc.product_breakdown.iter().map(|p| p.count).sum();
        assert_eq!(shown, doc.kpi.total_tickets);
        let other = doc.product_breakdown.last().unwrap();
        assert_eq!(other.product, "Other (2 categories)");
        assert_eq!(other.count, 4);
    }

    #[test]
    fn test_empty_target_day_still_reports_agents() {
        let source = StaticSource {
            table: rows(&[("2026-01-27", "rift", "troubleshooting")]),
        };
        let doc = build_daily_report(&source, &StaticCounter(3), &roster(), date()).unwrap();

        assert_eq!(doc.kpi.total_tickets, 0);
        assert!(doc.product_breakdown.is_empty());
        // The fetch itself had rows, so this is a quiet day, not a zero
        // document: agent activity is still collected.
        assert_eq!(doc.agent_activity.len(), 1);
    }

    #[test]
    fn test_top_product_tie_prefers_first_seen() {
        let source = StaticSource {
            table: rows(&[
                ("2026-01-26", "rift", "troubleshooting"),
                ("2026-01-26", "forge_x", "troubleshooting"),
            ]),
        };
        let doc = build_daily_report(&source, &StaticCounter(0), &roster(), date()).unwrap();
        assert_eq!(doc.kpi.top_product.as_deref(), Some("RIFT"));
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(display_product("rift_2"), "RIFT 2");
        assert_eq!(display_type("refund_request"), "Refund Request");
        assert_eq!(display_type(""), "Unknown");
    }
}
