//! Ticket-count search queries

use chrono::NaiveDate;

/// A count query against the ticket search backend.
///
/// Construction goes through the typed builders so agent identifiers are
/// sanitized before they reach the query string; dates arrive as
/// `NaiveDate` and format themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    expr: String,
}

impl SearchQuery {
    /// Tickets assigned to `agent_id`, created in the inclusive range.
    pub fn assigned(agent_id: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self::scoped("assignee", agent_id, start, end)
    }

    /// Tickets commented on by `agent_id`, created in the inclusive range.
    pub fn commented(agent_id: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self::scoped("commenter", agent_id, start, end)
    }

    fn scoped(field: &str, agent_id: &str, start: NaiveDate, end: NaiveDate) -> Self {
        let id = sanitize_identifier(agent_id);
        Self {
            expr: format!("type:ticket {field}:{id} created>={start} created<={end}"),
        }
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }
}

/// Strip anything that could splice extra terms into the query string.
fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("search backend unavailable: {0}")]
    Unavailable(String),
    #[error("search backend rejected {query:?}: {reason}")]
    Rejected { query: String, reason: String },
}

/// Contract implemented by ticket-count search backends.
pub trait SearchCounter {
    fn search_count(&self, query: &SearchQuery) -> Result<u64, QueryError>;
}

/// Stand-in for runs without a wired-up search backend. Every query fails,
/// which the activity collector degrades to zero counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSearch;

impl SearchCounter for UnconfiguredSearch {
    fn search_count(&self, _query: &SearchQuery) -> Result<u64, QueryError> {
        Err(QueryError::Unavailable(
            "no search backend configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn test_assigned_query_shape() {
        let query = SearchQuery::assigned("1001", day(1), day(7));
        assert_eq!(
            query.expr(),
            "type:ticket assignee:1001 created>=2026-02-01 created<=2026-02-07"
        );
    }

    #[test]
    fn test_commented_query_shape() {
        let query = SearchQuery::commented("1001", day(1), day(7));
        assert!(query.expr().starts_with("type:ticket commenter:1001 "));
    }

    #[test]
    fn test_identifier_sanitized() {
        let query = SearchQuery::assigned("10\"01 created>=1970-01-01", day(1), day(7));
        assert_eq!(
            query.expr(),
            "type:ticket assignee:1001created1970-01-01 created>=2026-02-01 created<=2026-02-07"
        );
        assert!(!query.expr().contains('"'));
    }

    #[test]
    fn test_benign_identifier_chars_kept() {
        let query = SearchQuery::assigned("agent-7_x@desk.example", day(1), day(7));
        assert!(query.expr().contains("assignee:agent-7_x@desk.example"));
    }

    #[test]
    fn test_unconfigured_search_always_fails() {
        let query = SearchQuery::assigned("1001", day(1), day(7));
        assert!(UnconfiguredSearch.search_count(&query).is_err());
    }
}
