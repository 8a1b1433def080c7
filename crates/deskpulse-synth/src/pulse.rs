//! Synthetic weekly pulse and ticket-list documents

use rand::seq::SliceRandom;
use rand::Rng;

use deskpulse_core::{
    iso_week_monday, pct, round1, week_sunday, AiOpportunity, AiOps, Alert, Direction,
    ProductSlice, PulseDocument, PulseIssue, PulseKpi, TicketIssue, TicketRef, TicketsDocument,
    TopIssue, TypeSlice,
};

use crate::distribution::{split_week, vary, weighted_spread};
use crate::reference::{
    BASELINE_WEEKLY_TOTAL, ISSUE_STATUSES, PRODUCTS, TALLY_TEMPLATES, TICKET_TYPES, TRACKED_ISSUES,
};

/// Build one week's pulse document.
///
/// `prev_total` is the previous week's realized total; when present it
/// drives non-zero product deltas so consecutive weeks show motion.
pub fn generate_pulse<R: Rng>(
    rng: &mut R,
    year: i32,
    week: u32,
    prev_total: Option<u64>,
) -> PulseDocument {
    let monday = iso_week_monday(year, week);
    let sunday = week_sunday(year, week);
    let total = vary(rng, BASELINE_WEEKLY_TOTAL, 0.2);

    let weights: Vec<u64> = PRODUCTS.iter().map(|&(_, w)| w).collect();
    let counts = weighted_spread(rng, total, &weights, 0.3, 1);
    let mut products = Vec::with_capacity(PRODUCTS.len());
    for (&(name, _), &count) in PRODUCTS.iter().zip(&counts) {
        let delta = if prev_total.is_some() {
            round1(rng.gen_range(-15.0..15.0))
        } else {
            0.0
        };
        products.push(ProductSlice {
            product: name.to_string(),
            count,
            pct: pct(count, total),
            delta: Some(delta),
            direction: Some(Direction::from_delta(delta)),
            top_issues: sample_top_issues(rng, count),
        });
    }
    products.sort_by(|a, b| b.count.cmp(&a.count));

    let type_weights: Vec<u64> = TICKET_TYPES.iter().map(|&(_, w)| w).collect();
    let type_counts = weighted_spread(rng, total, &type_weights, 0.3, 1);
    let mut types = Vec::with_capacity(TICKET_TYPES.len());
    for (&(name, _), &count) in TICKET_TYPES.iter().zip(&type_counts) {
        let delta = round1(rng.gen_range(-20.0..20.0));
        types.push(TypeSlice {
            label: name.to_string(),
            count,
            pct: pct(count, total),
            delta: Some(delta),
            direction: [Direction::Up, Direction::Down, Direction::Same]
                .choose(rng)
                .copied(),
        });
    }
    types.sort_by(|a, b| b.count.cmp(&a.count));

    let daily_trend = split_week(rng, monday, total);

    let ai_resolution_rate = round1(rng.gen_range(28.0..42.0));
    let all_closed = vary(rng, 45, 0.2);
    let ai_closed = (all_closed as f64 * ai_resolution_rate / 100.0).round() as u64;
    let ai_good = rng.gen_range(1..=5);
    let ai_bad = rng.gen_range(0..=2);
    let human_good = rng.gen_range(5..=15);
    let human_bad = rng.gen_range(0..=3);
    let ai_ops = AiOps {
        ai_resolution_rate,
        ai_closed,
        all_closed,
        ai_csat: round1(ai_good as f64 / (ai_good + ai_bad).max(1) as f64 * 100.0),
        ai_good,
        ai_bad,
        human_csat: round1(human_good as f64 / (human_good + human_bad).max(1) as f64 * 100.0),
        human_good,
        human_bad,
        handoff_rate: round1(100.0 - ai_resolution_rate),
    };

    let ai_opportunities = (0..rng.gen_range(1..=3))
        .map(|_| AiOpportunity {
            tally: pick(rng, &TALLY_TEMPLATES).to_string(),
            count: vary(rng, 8, 0.4),
            ai_count: rng.gen_range(1..=3),
            ai_res_rate: round1(rng.gen_range(10.0..40.0)),
        })
        .collect();

    let mut issues: Vec<PulseIssue> = TRACKED_ISSUES
        .iter()
        .map(|&(key, summary, product)| PulseIssue {
            key: key.to_string(),
            summary: summary.to_string(),
            status: pick(rng, &ISSUE_STATUSES).to_string(),
            product: product.to_string(),
            ticket_count: vary(rng, 30, 0.5),
            dsat_count: rng.gen_range(0..=3),
        })
        .collect();
    issues.sort_by(|a, b| b.ticket_count.cmp(&a.ticket_count));

    let alerts = if rng.gen::<f64>() > 0.4 {
        vec![Alert {
            severity: pick(rng, &["high", "medium"]).to_string(),
            message: format!(
                "{} / {}: {} to {}",
                pick(rng, &PRODUCTS).0,
                pick(rng, &TALLY_TEMPLATES),
                rng.gen_range(1..=3),
                rng.gen_range(4..=8)
            ),
            kind: "tally_surge".to_string(),
        }]
    } else {
        Vec::new()
    };

    let kpi = PulseKpi {
        total_tickets: total,
        top_product: products[0].product.clone(),
        daily_avg: round1(total as f64 / 7.0),
        refunds: vary(rng, 12, 0.3),
        product_count: products.iter().filter(|p| p.count > 0).count(),
    };

    PulseDocument {
        period: format!(
            "Week of {} - {}",
            monday.format("%m/%d"),
            sunday.format("%m/%d")
        ),
        start_date: monday,
        end_date: sunday,
        alerts,
        kpi,
        daily_trend,
        product_breakdown: products,
        ticket_types: types,
        ai_ops,
        ai_opportunities,
        issues,
    }
}

/// Ticket-list document for the same week, derived from the pulse.
pub fn generate_tickets<R: Rng>(
    rng: &mut R,
    year: i32,
    week: u32,
    pulse: &PulseDocument,
) -> TicketsDocument {
    let monday = iso_week_monday(year, week);
    let sunday = week_sunday(year, week);

    let mut issues: Vec<TicketIssue> = TRACKED_ISSUES
        .choose_multiple(rng, 8)
        .map(|&(key, summary, product)| TicketIssue {
            key: key.to_string(),
            summary: summary.to_string(),
            status: pick(rng, &ISSUE_STATUSES).to_string(),
            product: product.to_string(),
            ticket_count: vary(rng, 10, 0.5),
            follow_up: rng.gen_bool(0.5),
        })
        .collect();
    issues.sort_by(|a, b| b.ticket_count.cmp(&a.ticket_count));

    TicketsDocument {
        period: pulse.period.clone(),
        report_type: "weekly".to_string(),
        start_date: monday,
        end_date: sunday,
        alerts: pulse.alerts.clone(),
        kpi: pulse.kpi.clone(),
        daily_trend: pulse.daily_trend.iter().take(1).cloned().collect(),
        product_breakdown: pulse.product_breakdown.clone(),
        ticket_types: pulse.ticket_types.clone(),
        issues,
    }
}

/// Allocate a product's ticket count across a handful of sampled tallies.
///
/// Thirds-based splitting: each tally takes roughly a third of what is left
/// until the count is exhausted or the tallies run out. Each bucket carries
/// at most 5 illustrative ticket references.
fn sample_top_issues<R: Rng>(rng: &mut R, product_count: u64) -> Vec<TopIssue> {
    let tallies: Vec<&&str> = TALLY_TEMPLATES.choose_multiple(rng, 3).collect();
    let mut top_issues = Vec::new();
    let mut remaining = product_count;
    for tally in tallies {
        if remaining == 0 {
            break;
        }
        let count = if remaining > 1 {
            vary(rng, remaining / 3, 0.5).min(remaining)
        } else {
            remaining
        };
        let tickets = (0..count.min(5))
            .map(|_| TicketRef {
                id: rng.gen_range(570_000..=580_000u64).to_string(),
            })
            .collect();
        top_issues.push(TopIssue {
            tally: (*tally).to_string(),
            count,
            tickets,
        });
        remaining -= count;
    }
    top_issues
}

fn pick<'a, R: Rng, T>(rng: &mut R, choices: &'a [T]) -> &'a T {
    choices.choose(rng).expect("reference tables are non-empty")
}
