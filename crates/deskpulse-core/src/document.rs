//! Published document shapes, one tagged type per dashboard category
//!
//! Field names serialize in camelCase because the dashboard front end reads
//! these files directly; the JSON layout is the contract.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of dashboard categories. Each category owns one storage
/// directory and one document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Daily,
    WeeklyPulse,
    WeeklyQa,
    WeeklyCsatNegative,
    WeeklyTickets,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Daily,
        Category::WeeklyPulse,
        Category::WeeklyQa,
        Category::WeeklyCsatNegative,
        Category::WeeklyTickets,
    ];

    /// Categories whose documents are keyed by ISO week.
    pub const WEEKLY: [Category; 4] = [
        Category::WeeklyPulse,
        Category::WeeklyQa,
        Category::WeeklyCsatNegative,
        Category::WeeklyTickets,
    ];

    /// Directory name under the data root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Daily => "daily",
            Category::WeeklyPulse => "pulse",
            Category::WeeklyQa => "qa",
            Category::WeeklyCsatNegative => "dsat",
            Category::WeeklyTickets => "tickets",
        }
    }
}

/// Trend direction derived from a delta's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Same,
}

impl Direction {
    pub fn from_delta(delta: f64) -> Direction {
        if delta > 0.0 {
            Direction::Up
        } else if delta < 0.0 {
            Direction::Down
        } else {
            Direction::Same
        }
    }
}

/// Illustrative ticket reference attached to a top issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRef {
    pub id: String,
}

/// One tally bucket inside a product's top-issue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopIssue {
    pub tally: String,
    pub count: u64,
    pub tickets: Vec<TicketRef>,
}

/// Per-product share of a period's ticket volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSlice {
    pub product: String,
    pub count: u64,
    pub pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_issues: Vec<TopIssue>,
}

/// Per-ticket-type share of a period's ticket volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSlice {
    #[serde(rename = "type")]
    pub label: String,
    pub count: u64,
    pub pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// One day of a weekly ticket-volume trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrendEntry {
    pub date: NaiveDate,
    pub day: String,
    pub count: u64,
}

/// Per-agent activity over the 7-day lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentActivity {
    pub name: String,
    pub assigned: u64,
    pub replies: u64,
    pub avg_assigned_per_day: f64,
    pub avg_replies_per_day: f64,
}

/// Surge alert surfaced at the top of the weekly pulse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// KPI block of the weekly pulse and ticket-list documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseKpi {
    pub total_tickets: u64,
    pub top_product: String,
    pub daily_avg: f64,
    pub refunds: u64,
    pub product_count: usize,
}

/// KPI block of the daily snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyKpi {
    pub total_tickets: u64,
    pub top_product: Option<String>,
    pub refunds: u64,
    pub product_count: usize,
}

/// AI-operations summary inside the weekly pulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOps {
    pub ai_resolution_rate: f64,
    pub ai_closed: u64,
    pub all_closed: u64,
    pub ai_csat: f64,
    pub ai_good: u64,
    pub ai_bad: u64,
    pub human_csat: f64,
    pub human_good: u64,
    pub human_bad: u64,
    pub handoff_rate: f64,
}

/// Tally bucket where AI coverage looks expandable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOpportunity {
    pub tally: String,
    pub count: u64,
    pub ai_count: u64,
    pub ai_res_rate: f64,
}

/// Tracker issue row in the weekly pulse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseIssue {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub product: String,
    pub ticket_count: u64,
    pub dsat_count: u64,
}

/// Tracker issue row in the weekly ticket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketIssue {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub product: String,
    pub ticket_count: u64,
    pub follow_up: bool,
}

/// Weekly pulse: the primary dashboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseDocument {
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub alerts: Vec<Alert>,
    pub kpi: PulseKpi,
    pub daily_trend: Vec<DailyTrendEntry>,
    pub product_breakdown: Vec<ProductSlice>,
    pub ticket_types: Vec<TypeSlice>,
    pub ai_ops: AiOps,
    pub ai_opportunities: Vec<AiOpportunity>,
    pub issues: Vec<PulseIssue>,
}

/// Weekly ticket list: mirrors the pulse KPIs with its own issue view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsDocument {
    pub period: String,
    pub report_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub alerts: Vec<Alert>,
    pub kpi: PulseKpi,
    pub daily_trend: Vec<DailyTrendEntry>,
    pub product_breakdown: Vec<ProductSlice>,
    pub ticket_types: Vec<TypeSlice>,
    pub issues: Vec<TicketIssue>,
}

/// Bug-catch-rate status versus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcrStatus {
    OnTrack,
    AtRisk,
}

/// Bug-catch-rate summary of the weekly QA document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BcrSummary {
    pub overall: f64,
    pub status: BcrStatus,
    pub target: f64,
    pub qa_count: u64,
    pub customer_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BcrProduct {
    pub product: String,
    pub qa_bugs: u64,
    pub customer_bugs: u64,
    pub total: u64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BcrTrendEntry {
    pub week: String,
    pub qa_bugs: u64,
    pub customer_bugs: u64,
    pub total: u64,
    pub week_rate: f64,
}

/// Per-product test-run execution stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestExecution {
    pub completed_runs: u64,
    pub total_runs: u64,
    pub total_cases: u64,
    pub total_passed: u64,
    pub total_failed: u64,
    pub total_blocked: u64,
    pub total_skipped: u64,
    pub pass_rate: f64,
    pub avg_velocity: f64,
    pub blocked_rate: f64,
}

/// One point of a per-product regression trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionPoint {
    pub week: String,
    pub pass_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaBug {
    pub key: String,
    pub summary: String,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBug {
    pub key: String,
    pub summary: String,
    pub product: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentBugs {
    pub qa: Vec<QaBug>,
    pub customer: Vec<CustomerBug>,
}

/// Weekly QA document over a rolling 90-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaDocument {
    pub period: String,
    pub days_count: u32,
    pub report_date: NaiveDate,
    pub bcr: BcrSummary,
    pub bcr_by_product: Vec<BcrProduct>,
    pub bcr_weekly_trend: Vec<BcrTrendEntry>,
    pub test_execution: BTreeMap<String, TestExecution>,
    pub regression_trend: BTreeMap<String, Vec<RegressionPoint>>,
    pub recent_bugs: RecentBugs,
}

/// One sampled negative satisfaction rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsatSample {
    pub ticket_id: u64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsatComment {
    pub ticket_id: u64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub is_ai_negative: bool,
}

/// Weekly negative-CSAT document over a rolling 90-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsatNegativeDocument {
    pub period: String,
    pub days_count: u32,
    pub total_bad_ratings: u64,
    pub with_comments: u64,
    pub ai_negative: u64,
    pub ai_negative_rate_of_comments: f64,
    pub ai_negative_rate_of_all: f64,
    pub samples: Vec<CsatSample>,
    pub all_comments: Vec<CsatComment>,
}

/// Daily snapshot: yesterday's volume plus 7-day agent activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDocument {
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kpi: DailyKpi,
    pub product_breakdown: Vec<ProductSlice>,
    pub ticket_types: Vec<TypeSlice>,
    pub agent_activity: Vec<AgentActivity>,
}

/// The navigable index over periods that contain meaningful data.
///
/// Rebuilt from scratch on every index run; `months` is always derived from
/// `weeks` via the week→month mapping, never scanned independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub weeks: Vec<String>,
    pub latest: Option<String>,
    pub months: Vec<String>,
    pub latest_month: Option<String>,
    pub days: Vec<String>,
    pub latest_day: Option<String>,
}
