//! Store methods for the calculation history.

use crate::{
    calculator::LoanQuery,
    error::LoanResult,
    types::{Days, RecordId},
};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::HistoryStore;

/// A stored calculation together with its row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id:    RecordId,
    pub query: LoanQuery,
}

const SELECT_ENTRY: &str =
    "SELECT id, principal, duration_days, repayment_amount, interest, total_interest_rate
     FROM loan_history";

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get(0)?,
        query: LoanQuery::from_stored(
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ),
    })
}

impl HistoryStore {
    /// Persist one calculation. Returns the id assigned to the new row.
    pub fn append(&self, q: &LoanQuery) -> LoanResult<RecordId> {
        self.conn.execute(
            "INSERT INTO loan_history (
                principal, duration_days, repayment_amount, interest, total_interest_rate
            ) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                q.principal,
                q.duration_days,
                q.repayment_amount,
                q.interest,
                q.total_interest_rate,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::info!(
            "store: appended history id={id} principal={} days={}",
            q.principal,
            q.duration_days
        );
        Ok(id)
    }

    /// Every stored calculation, oldest first.
    pub fn list_all(&self) -> LoanResult<Vec<LoanQuery>> {
        Ok(self
            .list_entries()?
            .into_iter()
            .map(|e| e.query)
            .collect())
    }

    /// Every stored calculation with its row id, oldest first.
    pub fn list_entries(&self) -> LoanResult<Vec<HistoryEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_ENTRY} ORDER BY id ASC"))?;
        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// `(principal, duration_days, total_interest_rate)` for every row, oldest first.
    pub fn scatter_points(&self) -> LoanResult<Vec<(f64, Days, f64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT principal, duration_days, total_interest_rate
             FROM loan_history ORDER BY id ASC",
        )?;
        let points: Vec<(f64, Days, f64)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(points)
    }

    /// The most recently appended calculation, if any.
    pub fn latest(&self) -> LoanResult<Option<HistoryEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("{SELECT_ENTRY} ORDER BY id DESC LIMIT 1"),
                [],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    /// Number of stored calculations.
    pub fn count(&self) -> LoanResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM loan_history", [], |row| row.get(0))?;
        Ok(count)
    }
}
