use std::path::Path;

use chrono::{Duration, Local, NaiveDate};

use deskpulse_core::{Category, DailyDocument, PeriodId};
use deskpulse_source::{build_daily_report, AgentRoster, SnapshotSource, UnconfiguredSearch};
use deskpulse_store::DocumentStore;

pub fn run(
    date: Option<NaiveDate>,
    rows: &Path,
    roster_path: &Path,
    data_dir: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let target = date.unwrap_or_else(|| Local::now().date_naive() - Duration::days(1));

    let source = SnapshotSource::new(rows);
    let roster = match AgentRoster::load(roster_path) {
        Ok(roster) => roster,
        Err(error) => {
            tracing::warn!(%error, "agent roster unavailable; activity will be empty");
            AgentRoster::default()
        }
    };

    // The count-search backend is wired by deployments that have one; the
    // default build degrades agent counts to zero.
    let document = build_daily_report(&source, &UnconfiguredSearch, &roster, target)?;

    let store = DocumentStore::new(data_dir);
    let key = PeriodId::Day(target).key();
    store.write(Category::Daily, &key, &document)?;
    tracing::info!(%key, "daily snapshot written");

    if json {
        // Exactly one JSON document on stdout.
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_summary(&document);
    }
    Ok(())
}

fn print_summary(document: &DailyDocument) {
    println!("Daily snapshot {}", document.period);
    println!("  Total tickets: {}", document.kpi.total_tickets);
    println!(
        "  Top product:   {}",
        document.kpi.top_product.as_deref().unwrap_or("-")
    );
    println!("  Refunds:       {}", document.kpi.refunds);
    if !document.agent_activity.is_empty() {
        println!("  Agent activity (7d):");
        for agent in document.agent_activity.iter().take(10) {
            println!(
                "    {:<15} assigned={}  replies={}",
                agent.name, agent.assigned, agent.replies
            );
        }
    }
}
