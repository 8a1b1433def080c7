//! Per-agent activity over the 7-day lookback window

use chrono::{Duration, NaiveDate};

use deskpulse_core::{round1, AgentActivity};

use crate::roster::AgentRoster;
use crate::search::{SearchCounter, SearchQuery};

/// Lookback window length in days, inclusive of the end date.
const WINDOW_DAYS: i64 = 7;

/// Assigned and commented counts per reporting agent for the window ending
/// on `end`.
///
/// Queries run sequentially, two per agent. A failing query degrades that
/// agent's count to zero with a warning; it never aborts the run or touches
/// other agents.
pub fn collect_agent_activity<C: SearchCounter + ?Sized>(
    counter: &C,
    roster: &AgentRoster,
    end: NaiveDate,
) -> Vec<AgentActivity> {
    let start = end - Duration::days(WINDOW_DAYS - 1);
    let window_days = (end - start).num_days() + 1;

    let mut results = Vec::new();
    for (id, name) in roster.reporting_agents() {
        let assigned = count_or_zero(counter, name, &SearchQuery::assigned(id, start, end));
        let replies = count_or_zero(counter, name, &SearchQuery::commented(id, start, end));
        results.push(AgentActivity {
            name: name.to_string(),
            assigned,
            replies,
            avg_assigned_per_day: round1(assigned as f64 / window_days as f64),
            avg_replies_per_day: round1(replies as f64 / window_days as f64),
        });
    }
    results.sort_by(|a, b| b.assigned.cmp(&a.assigned));
    results
}

fn count_or_zero<C: SearchCounter + ?Sized>(
    counter: &C,
    agent: &str,
    query: &SearchQuery,
) -> u64 {
    match counter.search_count(query) {
        Ok(count) => count,
        Err(error) => {
            tracing::warn!(agent, query = query.expr(), %error, "count query failed, using 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{QueryError, UnconfiguredSearch};
    use std::collections::BTreeMap;

    struct ScriptedCounter;

    impl SearchCounter for ScriptedCounter {
        fn search_count(&self, query: &SearchQuery) -> Result<u64, QueryError> {
            // Agent 1003's backend shard is down; everyone else counts fine.
            if query.expr().contains(":1003") {
                return Err(QueryError::Unavailable("shard offline".to_string()));
            }
            if query.expr().contains("assignee:") {
                Ok(14)
            } else {
                Ok(21)
            }
        }
    }

    fn roster() -> AgentRoster {
        AgentRoster::new(BTreeMap::from([
            ("1001".to_string(), "Marcus".to_string()),
            ("1002".to_string(), "Administrator".to_string()),
            ("1003".to_string(), "Priya".to_string()),
        ]))
    }

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 7).unwrap()
    }

    #[test]
    fn test_counts_and_inclusive_window_average() {
        let activity = collect_agent_activity(&ScriptedCounter, &roster(), end());
        // 2026-02-01 through 2026-02-07 is 7 days inclusive.
        let marcus = activity.iter().find(|a| a.name == "Marcus").unwrap();
        assert_eq!(marcus.assigned, 14);
        assert_eq!(marcus.replies, 21);
        assert_eq!(marcus.avg_assigned_per_day, 2.0);
        assert_eq!(marcus.avg_replies_per_day, 3.0);
    }

    #[test]
    fn test_failing_agent_degrades_to_zero() {
        let activity = collect_agent_activity(&ScriptedCounter, &roster(), end());
        let priya = activity.iter().find(|a| a.name == "Priya").unwrap();
        assert_eq!(priya.assigned, 0);
        assert_eq!(priya.replies, 0);
        assert_eq!(priya.avg_assigned_per_day, 0.0);
        // The healthy agent is unaffected.
        assert!(activity.iter().any(|a| a.assigned == 14));
    }

    #[test]
    fn test_reserved_agents_not_queried() {
        let activity = collect_agent_activity(&ScriptedCounter, &roster(), end());
        assert_eq!(activity.len(), 2);
        assert!(activity.iter().all(|a| a.name != "Administrator"));
    }

    #[test]
    fn test_sorted_by_assigned_descending() {
        let activity = collect_agent_activity(&ScriptedCounter, &roster(), end());
        assert!(activity.windows(2).all(|w| w[0].assigned >= w[1].assigned));
    }

    #[test]
    fn test_unconfigured_backend_zeroes_everyone() {
        let activity = collect_agent_activity(&UnconfiguredSearch, &roster(), end());
        assert_eq!(activity.len(), 2);
        assert!(activity.iter().all(|a| a.assigned == 0 && a.replies == 0));
    }
}
