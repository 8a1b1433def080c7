//! Synthetic weekly QA and negative-CSAT documents

use std::collections::BTreeMap;

use chrono::Duration;
use rand::seq::SliceRandom;
use rand::Rng;

use deskpulse_core::{
    iso_week_monday, round1, round2, week_label, BcrProduct, BcrStatus, BcrSummary, BcrTrendEntry,
    CsatComment, CsatNegativeDocument, CsatSample, CustomerBug, QaBug, QaDocument, RecentBugs,
    TestExecution,
};

use crate::distribution::vary;
use crate::reference::{CSAT_SAMPLES, PRODUCTS, QA_PRODUCTS, QA_PROJECTS, RATINGS_URL_BASE};

/// Rolling lookback window of the QA and CSAT documents, in days.
const LOOKBACK_DAYS: u32 = 90;

/// Bug-catch-rate target the QA programme is held to.
const BCR_TARGET: f64 = 80.0;

/// Build one week's QA document.
pub fn generate_qa<R: Rng>(rng: &mut R, year: i32, week: u32) -> QaDocument {
    let monday = iso_week_monday(year, week);

    let qa_bugs: u64 = rng.gen_range(5..=30);
    let customer_bugs: u64 = rng.gen_range(0..=8);
    let total_bugs = qa_bugs + customer_bugs;
    let overall = round1(qa_bugs as f64 / total_bugs.max(1) as f64 * 100.0);

    let bcr_by_product = QA_PRODUCTS
        .iter()
        .map(|&product| {
            let qb = rng.gen_range(1..=qa_bugs / 2 + 1);
            let cb = rng.gen_range(0..=(customer_bugs / 2).max(1));
            BcrProduct {
                product: product.to_string(),
                qa_bugs: qb,
                customer_bugs: cb,
                total: qb + cb,
                rate: round1(qb as f64 / (qb + cb).max(1) as f64 * 100.0),
            }
        })
        .collect();

    let bcr_weekly_trend = vec![BcrTrendEntry {
        week: week_label(year, week),
        qa_bugs,
        customer_bugs,
        total: total_bugs,
        week_rate: overall,
    }];

    let mut test_execution = BTreeMap::new();
    for &product in &QA_PRODUCTS {
        let total_cases = vary(rng, 400, 0.5);
        let passed = (total_cases as f64 * rng.gen_range(0.80..0.98)) as u64;
        let failed = (total_cases as f64 * rng.gen_range(0.01..0.08)) as u64;
        let blocked = rng.gen_range(0..=15);
        let skipped = total_cases.saturating_sub(passed + failed + blocked);
        test_execution.insert(
            product.to_string(),
            TestExecution {
                completed_runs: rng.gen_range(3..=8),
                total_runs: rng.gen_range(5..=10),
                total_cases,
                total_passed: passed,
                total_failed: failed,
                total_blocked: blocked,
                total_skipped: skipped,
                pass_rate: round1(passed as f64 / total_cases.max(1) as f64 * 100.0),
                avg_velocity: round1(rng.gen_range(15.0..45.0)),
                blocked_rate: round1(blocked as f64 / total_cases.max(1) as f64 * 100.0),
            },
        );
    }

    let regression_trend = QA_PRODUCTS
        .iter()
        .map(|&product| (product.to_string(), Vec::new()))
        .collect();

    let qa_list = (0..qa_bugs.min(5))
        .map(|_| {
            let project = *pick(rng, &QA_PROJECTS);
            QaBug {
                key: format!("{project}-{}", rng.gen_range(600..=800)),
                summary: format!(
                    "[{}] Test issue #{}",
                    pick(rng, &QA_PRODUCTS),
                    rng.gen_range(1..=99)
                ),
                project: project.to_string(),
            }
        })
        .collect();

    let customer_list = (0..customer_bugs.min(5))
        .map(|_| CustomerBug {
            key: format!("SUP-{}", rng.gen_range(400..=500)),
            summary: format!(
                "{} - Customer reported issue #{}",
                pick(rng, &PRODUCTS).0,
                rng.gen_range(1..=99)
            ),
            product: pick(rng, &QA_PRODUCTS).to_string(),
        })
        .collect();

    QaDocument {
        period: format!(
            "{} ~ {}",
            monday - Duration::days(i64::from(LOOKBACK_DAYS)),
            monday
        ),
        days_count: LOOKBACK_DAYS,
        report_date: monday,
        bcr: BcrSummary {
            overall,
            status: if overall >= BCR_TARGET {
                BcrStatus::OnTrack
            } else {
                BcrStatus::AtRisk
            },
            target: BCR_TARGET,
            qa_count: qa_bugs,
            customer_count: customer_bugs,
        },
        bcr_by_product,
        bcr_weekly_trend,
        test_execution,
        regression_trend,
        recent_bugs: RecentBugs {
            qa: qa_list,
            customer: customer_list,
        },
    }
}

/// Build one week's negative-CSAT document.
pub fn generate_csat<R: Rng>(rng: &mut R, year: i32, week: u32) -> CsatNegativeDocument {
    let monday = iso_week_monday(year, week);

    let total_bad_ratings = vary(rng, 40, 0.3);
    let with_comments = (total_bad_ratings as f64 * rng.gen_range(0.75..0.90)) as u64;
    let ai_negative = (with_comments as f64 * rng.gen_range(0.45..0.65)) as u64;

    let samples: Vec<CsatSample> = (0..total_bad_ratings.min(20))
        .map(|_| {
            let created = (monday + Duration::days(rng.gen_range(0..=6)))
                .and_hms_opt(rng.gen_range(0..=23), 0, 0)
                .expect("hour is in range")
                .and_utc();
            CsatSample {
                ticket_id: rng.gen_range(10_000_000_000_000..=99_999_999_999_999),
                comment: pick(rng, &CSAT_SAMPLES).to_string(),
                created_at: created,
                url: format!(
                    "{RATINGS_URL_BASE}/{}.json",
                    rng.gen_range(40_000_000_000_000u64..=49_999_999_999_999)
                ),
            }
        })
        .collect();

    let all_comments = samples
        .iter()
        .map(|sample| CsatComment {
            ticket_id: sample.ticket_id,
            comment: sample.comment.clone(),
            created_at: sample.created_at,
            is_ai_negative: rng.gen_bool(0.6),
        })
        .collect();

    CsatNegativeDocument {
        period: format!(
            "{} ~ {}",
            monday - Duration::days(i64::from(LOOKBACK_DAYS)),
            monday
        ),
        days_count: LOOKBACK_DAYS,
        total_bad_ratings,
        with_comments,
        ai_negative,
        ai_negative_rate_of_comments: round2(
            ai_negative as f64 / with_comments.max(1) as f64 * 100.0,
        ),
        ai_negative_rate_of_all: round2(
            ai_negative as f64 / total_bad_ratings.max(1) as f64 * 100.0,
        ),
        samples,
        all_comments,
    }
}

fn pick<'a, R: Rng, T>(rng: &mut R, choices: &'a [T]) -> &'a T {
    choices.choose(rng).expect("reference tables are non-empty")
}
