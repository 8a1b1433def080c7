//! Agent roster: identifier → display name

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::table::SourceError;

/// Accounts excluded from activity reporting. They hold tickets for
/// administrative routing, not support work.
pub const RESERVED_AGENT_NAMES: [&str; 2] = ["Administrator", "Ops Team"];

/// Mapping of agent identifier to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentRoster {
    agents: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct RosterFile {
    #[serde(default)]
    agents: BTreeMap<String, String>,
}

impl AgentRoster {
    pub fn new(agents: BTreeMap<String, String>) -> Self {
        Self { agents }
    }

    /// Load a roster file of the form `{"agents": {"<id>": "<name>"}}`.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let data = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RosterFile = serde_json::from_str(&data).map_err(|source| {
            SourceError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self {
            agents: file.agents,
        })
    }

    /// (id, name) pairs that participate in activity reporting, reserved
    /// accounts excluded.
    pub fn reporting_agents(&self) -> impl Iterator<Item = (&str, &str)> {
        self.agents
            .iter()
            .filter(|(_, name)| !RESERVED_AGENT_NAMES.contains(&name.as_str()))
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }
}
