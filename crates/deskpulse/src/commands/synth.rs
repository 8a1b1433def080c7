use std::path::Path;

use anyhow::bail;
use rand::rngs::StdRng;
use rand::SeedableRng;

use deskpulse_core::{iso_week_monday, week_label, Category, PeriodId};
use deskpulse_store::DocumentStore;
use deskpulse_synth::reference::BASELINE_WEEKLY_TOTAL;
use deskpulse_synth::{generate_week, DEFAULT_BACKFILL_WEEKS};

pub fn run(week: Option<&str>, data_dir: &Path, seed: u64) -> anyhow::Result<()> {
    // A single requested week still gets a plausible previous-week total so
    // its deltas are not uniformly flat.
    let (weeks, mut prev_total) = match week {
        Some(token) => match token.parse::<PeriodId>() {
            Ok(PeriodId::Week { year, week }) => {
                (vec![(year, week)], Some(BASELINE_WEEKLY_TOTAL))
            }
            _ => bail!("invalid week token {token:?}, expected YYYY-Www"),
        },
        None => (DEFAULT_BACKFILL_WEEKS.to_vec(), None),
    };

    let store = DocumentStore::new(data_dir);
    let mut rng = StdRng::seed_from_u64(seed);
    let generated = weeks.len();

    for (year, week) in weeks {
        let label = week_label(year, week);
        let monday = iso_week_monday(year, week);
        println!("Generating {label} ({monday})...");

        let bundle = generate_week(&mut rng, year, week, prev_total);
        prev_total = Some(bundle.realized_total());

        store.write(Category::WeeklyPulse, &label, &bundle.pulse)?;
        store.write(Category::WeeklyQa, &label, &bundle.qa)?;
        store.write(Category::WeeklyCsatNegative, &label, &bundle.csat)?;
        store.write(Category::WeeklyTickets, &label, &bundle.tickets)?;
        store.write(
            Category::Daily,
            &PeriodId::Day(monday).key(),
            &bundle.daily,
        )?;
    }

    println!("Done. Generated {generated} week(s) of fixtures.");
    Ok(())
}
