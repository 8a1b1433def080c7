//! Path resolution under the data root

use std::path::{Path, PathBuf};

use deskpulse_core::Category;

/// Resolves document and index paths below one data directory.
#[derive(Debug, Clone)]
pub struct DataRoot {
    root: PathBuf,
}

impl DataRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one category's documents.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Path of one period document, e.g. `<root>/pulse/2026-W05.json`.
    pub fn document_path(&self, category: Category, key: &str) -> PathBuf {
        self.category_dir(category).join(format!("{key}.json"))
    }

    /// Path of the published index document.
    pub fn index_path(&self) -> PathBuf {
        self.root.join("index.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_layout() {
        let root = DataRoot::new("/tmp/dash-data");
        assert_eq!(
            root.document_path(Category::WeeklyPulse, "2026-W05"),
            PathBuf::from("/tmp/dash-data/pulse/2026-W05.json")
        );
        assert_eq!(
            root.document_path(Category::Daily, "2026-01-26"),
            PathBuf::from("/tmp/dash-data/daily/2026-01-26.json")
        );
        assert_eq!(root.index_path(), PathBuf::from("/tmp/dash-data/index.json"));
    }
}
