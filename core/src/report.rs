//! Display formatting for results and history rows.

use crate::{
    calculator::LoanQuery,
    types::{AMOUNT_DECIMALS, DAILY_RATE_DECIMALS, TOTAL_RATE_DECIMALS},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result block shown after a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub interest:            String,
    pub total_interest_rate: String,
    pub daily_interest_rate: String,
}

impl From<&LoanQuery> for ResultSummary {
    fn from(q: &LoanQuery) -> Self {
        Self {
            interest: money(q.interest),
            total_interest_rate: format!("{:.*}%", TOTAL_RATE_DECIMALS, q.total_interest_rate),
            daily_interest_rate: format!("{:.*}%", DAILY_RATE_DECIMALS, q.daily_interest_rate),
        }
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interest: {}", self.interest)?;
        writeln!(f, "Total interest rate: {}", self.total_interest_rate)?;
        write!(f, "Daily interest rate: {}", self.daily_interest_rate)
    }
}

/// One line of the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub principal:        String,
    pub duration_days:    String,
    pub repayment_amount: String,
    pub interest:         String,
    pub total_rate:       String,
}

pub const HISTORY_HEADERS: [&str; 5] = ["Principal", "Days", "Repayment", "Interest", "Rate"];

impl From<&LoanQuery> for HistoryRow {
    fn from(q: &LoanQuery) -> Self {
        Self {
            principal: money(q.principal),
            duration_days: q.duration_days.to_string(),
            repayment_amount: money(q.repayment_amount),
            interest: money(q.interest),
            total_rate: format!("{:.*}%", TOTAL_RATE_DECIMALS, q.total_interest_rate),
        }
    }
}

impl HistoryRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.principal,
            &self.duration_days,
            &self.repayment_amount,
            &self.interest,
            &self.total_rate,
        ]
    }
}

/// Render rows as a fixed-width text table with a header line.
pub fn history_table(rows: &[HistoryRow]) -> String {
    let mut widths = HISTORY_HEADERS.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cells: [&str; 5]| {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = line(HISTORY_HEADERS);
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.cells()));
    }
    out
}

fn money(amount: f64) -> String {
    format!("${:.*}", AMOUNT_DECIMALS, amount)
}
