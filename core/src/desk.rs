//! The loan desk: one user action runs compute, persist, refresh in order.
//!
//! ORDER (fixed):
//!   1. Parse and compute. A failure here persists nothing.
//!   2. Append the record to the history store.
//!   3. Re-read the history to rebuild the scatter dataset.
//!
//! The desk owns the store for the life of the process. Dropping the desk
//! closes the connection; `close()` does the same and reports errors.

use crate::{
    calculator::{self, LoanQuery},
    chart::{CompositionChart, ScatterDataset},
    config::DeskConfig,
    error::LoanResult,
    report::{HistoryRow, ResultSummary},
    store::HistoryStore,
    types::RecordId,
};
use serde::{Deserialize, Serialize};

/// Everything a front end needs after one successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id:          RecordId,
    pub query:       LoanQuery,
    pub summary:     ResultSummary,
    pub composition: CompositionChart,
    pub scatter:     ScatterDataset,
}

/// The stored history as the front end shows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryView {
    pub rows:    Vec<HistoryRow>,
    pub scatter: ScatterDataset,
}

pub struct LoanDesk {
    pub store:    HistoryStore,
    show_history: bool,
}

impl LoanDesk {
    pub fn new(store: HistoryStore, show_history: bool) -> Self {
        Self {
            store,
            show_history,
        }
    }

    /// Open and migrate the store named by `config`.
    pub fn open(config: &DeskConfig) -> LoanResult<Self> {
        let store = if config.db_path == ":memory:" {
            HistoryStore::in_memory()?
        } else {
            HistoryStore::open_with(&config.db_path, config.wal)?
        };
        store.migrate()?;
        log::info!(
            "desk: opened history at {} ({} records)",
            config.db_path,
            store.count()?
        );
        Ok(Self::new(store, config.show_history))
    }

    /// Desk over a fresh in-memory store (used in tests).
    pub fn in_memory() -> LoanResult<Self> {
        Self::open(&DeskConfig::default_test())
    }

    /// Full history for the table and the scatter plot, as loaded on startup.
    pub fn load_history(&self) -> LoanResult<HistoryView> {
        let history = self.store.list_all()?;
        Ok(HistoryView {
            rows: history.iter().map(HistoryRow::from).collect(),
            scatter: ScatterDataset::from_history(&history),
        })
    }

    /// Handle one press of the calculate button.
    pub fn calculate(
        &mut self,
        principal: &str,
        duration_days: &str,
        repayment_amount: &str,
    ) -> LoanResult<Calculation> {
        let query = match calculator::compute(principal, duration_days, repayment_amount) {
            Ok(q) => q,
            Err(e) => {
                log::warn!("desk: calculation rejected: {e}");
                return Err(e);
            }
        };

        let id = self.store.append(&query)?;
        let scatter = ScatterDataset::from_points(self.store.scatter_points()?);

        Ok(Calculation {
            id,
            summary: ResultSummary::from(&query),
            composition: CompositionChart::for_query(&query),
            scatter,
            query,
        })
    }

    pub fn history_visible(&self) -> bool {
        self.show_history
    }

    /// Collapse or expand the history table. Returns the new state.
    pub fn toggle_history(&mut self) -> bool {
        self.show_history = !self.show_history;
        log::debug!("desk: history visible={}", self.show_history);
        self.show_history
    }

    /// Close the store, reporting any error from SQLite.
    pub fn close(self) -> LoanResult<()> {
        self.store.close()
    }
}
