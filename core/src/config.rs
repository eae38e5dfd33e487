use serde::{Deserialize, Serialize};

pub const DEFAULT_DB_PATH: &str = "loan_history.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// SQLite file holding the calculation history.
    pub db_path:      String,
    /// Whether the history table starts expanded.
    pub show_history: bool,
    /// Switch the database to WAL journaling on open.
    pub wal:          bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            db_path:      DEFAULT_DB_PATH.into(),
            show_history: true,
            wal:          true,
        }
    }
}

impl DeskConfig {
    /// Load from a JSON file. Missing keys fall back to the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DeskConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }

    /// Config for unit tests: in-memory database, no WAL.
    pub fn default_test() -> Self {
        Self {
            db_path:      ":memory:".into(),
            show_history: true,
            wal:          false,
        }
    }
}
