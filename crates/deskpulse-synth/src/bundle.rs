//! One week's worth of synthetic documents across every category

use rand::Rng;

use deskpulse_core::{
    iso_week_monday, CsatNegativeDocument, DailyDocument, PulseDocument, QaDocument,
    TicketsDocument,
};

use crate::daily::generate_daily;
use crate::pulse::{generate_pulse, generate_tickets};
use crate::quality::{generate_csat, generate_qa};

/// Weeks backfilled when no explicit week is requested.
pub const DEFAULT_BACKFILL_WEEKS: [(i32, u32); 7] = [
    (2025, 51),
    (2025, 52),
    (2026, 1),
    (2026, 2),
    (2026, 3),
    (2026, 4),
    (2026, 5),
];

/// All five documents generated for one ISO week.
///
/// The daily snapshot is keyed by the week's Monday.
#[derive(Debug, Clone)]
pub struct WeekBundle {
    pub pulse: PulseDocument,
    pub qa: QaDocument,
    pub csat: CsatNegativeDocument,
    pub daily: DailyDocument,
    pub tickets: TicketsDocument,
}

impl WeekBundle {
    /// The pulse total, threaded into the next week's generation.
    pub fn realized_total(&self) -> u64 {
        self.pulse.kpi.total_tickets
    }
}

/// Generate one week of fixtures. `prev_total` comes from the preceding
/// week in a backfill run (None for the first week).
pub fn generate_week<R: Rng>(
    rng: &mut R,
    year: i32,
    week: u32,
    prev_total: Option<u64>,
) -> WeekBundle {
    let pulse = generate_pulse(rng, year, week, prev_total);
    let qa = generate_qa(rng, year, week);
    let csat = generate_csat(rng, year, week);
    let daily = generate_daily(rng, iso_week_monday(year, week));
    let tickets = generate_tickets(rng, year, week, &pulse);
    WeekBundle {
        pulse,
        qa,
        csat,
        daily,
        tickets,
    }
}
