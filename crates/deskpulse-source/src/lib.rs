//! External collaborator contracts and live-mode report assembly
//!
//! Network clients for the ticket and search backends live outside this
//! repository; this crate defines the traits they implement, the pure row
//! analysis over fetched data, and the live daily assembler.

mod activity;
mod analyze;
mod live;
mod roster;
mod search;
mod table;

pub use activity::collect_agent_activity;
pub use analyze::{analyze_period, filter_rows_by_date_range, PeriodAnalysis};
pub use live::build_daily_report;
pub use roster::{AgentRoster, RESERVED_AGENT_NAMES};
pub use search::{QueryError, SearchCounter, SearchQuery, UnconfiguredSearch};
pub use table::{SnapshotSource, SourceError, TicketSource, TicketTable};
