use std::path::Path;

use deskpulse_index::publish_index;
use deskpulse_store::DocumentStore;

pub fn run(data_dir: &Path, json: bool) -> anyhow::Result<()> {
    let store = DocumentStore::new(data_dir);
    let index = publish_index(&store)?;

    if json {
        // Exactly one JSON document on stdout.
        println!("{}", serde_json::to_string_pretty(&index)?);
    } else {
        println!(
            "Updated {}: {} weeks, {} months, {} days",
            store.data_root().index_path().display(),
            index.weeks.len(),
            index.months.len(),
            index.days.len()
        );
    }
    Ok(())
}
