//! Synthetic daily snapshot

use rand::Rng;

use deskpulse_core::{pct, round1, AgentActivity, DailyDocument, DailyKpi, ProductSlice, TypeSlice};

use crate::distribution::{vary, weighted_spread};
use crate::reference::{AGENTS, PRODUCTS, TICKET_TYPES};

/// Build the daily snapshot for one date.
///
/// Unlike the weekly pulse, empty buckets are dropped instead of floored;
/// a slow day genuinely shows fewer products.
pub fn generate_daily<R: Rng>(rng: &mut R, date: chrono::NaiveDate) -> DailyDocument {
    let total = vary(rng, 55, 0.25);

    let weights: Vec<u64> = PRODUCTS.iter().map(|&(_, w)| w).collect();
    let counts = weighted_spread(rng, total, &weights, 0.3, 0);
    let mut products: Vec<ProductSlice> = PRODUCTS
        .iter()
        .zip(&counts)
        .filter(|(_, &count)| count > 0)
        .map(|(&(name, _), &count)| ProductSlice {
            product: name.to_string(),
            count,
            pct: pct(count, total),
            delta: None,
            direction: None,
            top_issues: Vec::new(),
        })
        .collect();
    products.sort_by(|a, b| b.count.cmp(&a.count));

    let type_weights: Vec<u64> = TICKET_TYPES.iter().map(|&(_, w)| w).collect();
    let type_counts = weighted_spread(rng, total, &type_weights, 0.3, 0);
    let mut types: Vec<TypeSlice> = TICKET_TYPES
        .iter()
        .zip(&type_counts)
        .filter(|(_, &count)| count > 0)
        .map(|(&(name, _), &count)| TypeSlice {
            label: name.to_string(),
            count,
            pct: pct(count, total),
            delta: None,
            direction: None,
        })
        .collect();
    types.sort_by(|a, b| b.count.cmp(&a.count));

    let mut agents: Vec<AgentActivity> = AGENTS
        .iter()
        .map(|&(name, base_assigned, base_replies)| {
            let assigned = vary(rng, base_assigned, 0.3);
            let replies = vary(rng, base_replies, 0.3);
            AgentActivity {
                name: name.to_string(),
                assigned,
                replies,
                avg_assigned_per_day: round1(assigned as f64 / 7.0),
                avg_replies_per_day: round1(replies as f64 / 7.0),
            }
        })
        .collect();
    agents.sort_by(|a, b| b.assigned.cmp(&a.assigned));

    let kpi = DailyKpi {
        total_tickets: total,
        top_product: products.first().map(|p| p.product.clone()),
        refunds: vary(rng, 6, 0.4),
        product_count: products.len(),
    };

    DailyDocument {
        period: format!("{} ({})", date, date.format("%a")),
        start_date: date,
        end_date: date,
        kpi,
        product_breakdown: products,
        ticket_types: types,
        agent_activity: agents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
    }

    #[test]
    fn test_daily_window_is_single_day() {
        let doc = generate_daily(&mut StdRng::seed_from_u64(42), monday());
        assert_eq!(doc.start_date, doc.end_date);
        assert_eq!(doc.period, "2026-01-26 (Mon)");
    }

    #[test]
    fn test_daily_drops_empty_buckets() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let doc = generate_daily(&mut rng, monday());
            assert!(doc.product_breakdown.iter().all(|p| p.count > 0));
            assert!(doc.ticket_types.iter().all(|t| t.count > 0));
            assert_eq!(doc.kpi.product_count, doc.product_breakdown.len());
        }
    }

    #[test]
    fn test_daily_top_product_is_largest() {
        let doc = generate_daily(&mut StdRng::seed_from_u64(42), monday());
        assert_eq!(
            doc.kpi.top_product.as_deref(),
            Some(doc.product_breakdown[0].product.as_str())
        );
    }

    #[test]
    fn test_agent_averages_divide_by_window() {
        let doc = generate_daily(&mut StdRng::seed_from_u64(42), monday());
        assert_eq!(doc.agent_activity.len(), AGENTS.len());
        for agent in &doc.agent_activity {
            assert_eq!(
                agent.avg_assigned_per_day,
                (agent.assigned as f64 / 7.0 * 10.0).round() / 10.0
            );
            assert_eq!(
                agent.avg_replies_per_day,
                (agent.replies as f64 / 7.0 * 10.0).round() / 10.0
            );
        }
    }

    #[test]
    fn test_agents_sorted_by_assigned() {
        let doc = generate_daily(&mut StdRng::seed_from_u64(42), monday());
        assert!(doc
            .agent_activity
            .windows(2)
            .all(|w| w[0].assigned >= w[1].assigned));
    }
}
