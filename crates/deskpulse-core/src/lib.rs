//! Period identifiers, calendar arithmetic and document shapes for the
//! support-desk dashboard dataset

mod compress;
mod document;
mod period;

pub use compress::{compress, other_label, Compressed, OtherBucket};
pub use document::{
    AgentActivity, AiOpportunity, AiOps, Alert, BcrProduct, BcrStatus, BcrSummary, BcrTrendEntry,
    Category, CsatComment, CsatNegativeDocument, CsatSample, CustomerBug, DailyDocument, DailyKpi,
    DailyTrendEntry, Direction, IndexDocument, ProductSlice, PulseDocument, PulseIssue, PulseKpi,
    QaBug, QaDocument, RecentBugs, RegressionPoint, TestExecution, TicketIssue, TicketRef,
    TicketsDocument, TopIssue, TypeSlice,
};
pub use period::{
    iso_week_monday, pct, round1, round2, week_label, week_sunday, week_to_month, ParsePeriodError,
    PeriodId,
};
