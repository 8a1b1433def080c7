//! Fetched ticket data and the source contract

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("ticket source unavailable: {0}")]
    Unavailable(String),
    #[error("reading snapshot {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// All fetched ticket rows plus the column-name→index mapping.
#[derive(Debug, Clone, Default)]
pub struct TicketTable {
    pub rows: Vec<Vec<String>>,
    pub header: HashMap<String, usize>,
}

impl TicketTable {
    pub fn new(columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        let header = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx))
            .collect();
        Self { rows, header }
    }

    /// Value of `column` in `row`, if the column exists and the row is wide
    /// enough.
    pub fn cell<'a>(&self, row: &'a [String], column: &str) -> Option<&'a str> {
        let idx = *self.header.get(column)?;
        row.get(idx).map(String::as_str)
    }
}

/// Contract implemented by ticket-data backends.
pub trait TicketSource {
    /// Acquire an access token for subsequent fetches.
    fn access_token(&self) -> Result<String, SourceError>;

    /// Fetch every available row; time filtering happens locally.
    fn fetch(&self, token: &str) -> Result<TicketTable, SourceError>;
}

/// File-backed source reading a locally exported snapshot.
///
/// The export format is `{"header": [...], "rows": [[...], ...]}`. A missing
/// snapshot reads as an empty table, which downstream turns into a
/// well-formed zero-valued document.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

#[derive(Deserialize)]
struct Snapshot {
    header: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TicketSource for SnapshotSource {
    fn access_token(&self) -> Result<String, SourceError> {
        // Local snapshots need no credential exchange.
        Ok("local-snapshot".to_string())
    }

    fn fetch(&self, _token: &str) -> Result<TicketTable, SourceError> {
        if !self.path.exists() {
            return Ok(TicketTable::default());
        }

        let data = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot: Snapshot =
            serde_json::from_str(&data).map_err(|source| SourceError::Decode {
                path: self.path.clone(),
                source,
            })?;

        let columns: Vec<&str> = snapshot.header.iter().map(String::as_str).collect();
        Ok(TicketTable::new(&columns, snapshot.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup() {
        let table = TicketTable::new(
            &["created_at", "product"],
            vec![vec!["2026-01-26".into(), "rift_2".into()]],
        );
        let row = &table.rows[0];
        assert_eq!(table.cell(row, "product"), Some("rift_2"));
        assert_eq!(table.cell(row, "missing"), None);
    }

    #[test]
    fn test_cell_short_row() {
        let table = TicketTable::new(
            &["created_at", "product"],
            vec![vec!["2026-01-26".into()]],
        );
        let row = &table.rows[0];
        assert_eq!(table.cell(row, "product"), None);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tickets.json");
        std::fs::write(
            &path,
            r#"{"header": ["created_at", "product"], "rows": [["2026-01-26", "rift"]]}"#,
        )
        .unwrap();

        let source = SnapshotSource::new(&path);
        let token = source.access_token().unwrap();
        let table = source.fetch(&token).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.cell(&table.rows[0], "product"), Some("rift"));
    }

    #[test]
    fn test_missing_snapshot_reads_empty() {
        let source = SnapshotSource::new("/nonexistent/tickets.json");
        let table = source.fetch("local-snapshot").unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tickets.json");
        std::fs::write(&path, "not json").unwrap();

        let source = SnapshotSource::new(&path);
        assert!(source.fetch("local-snapshot").is_err());
    }
}
