//! Interest calculator: three inputs in, one `LoanQuery` out.
//!
//! Pure and deterministic. Nothing here touches the store.

use crate::{
    error::{LoanError, LoanResult},
    types::Days,
};
use serde::{Deserialize, Serialize};

/// One completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuery {
    pub principal:           f64,
    pub duration_days:       Days,
    pub repayment_amount:    f64,
    pub interest:            f64,
    pub total_interest_rate: f64,
    pub daily_interest_rate: f64,
}

impl LoanQuery {
    /// Build a query from already-parsed values.
    ///
    /// `principal` and `duration_days` must be non-zero; both zero checks
    /// run before any division.
    pub fn new(principal: f64, duration_days: Days, repayment_amount: f64) -> LoanResult<Self> {
        if !principal.is_finite() || principal < 0.0 {
            return Err(invalid("principal", principal));
        }
        if duration_days < 0 {
            return Err(invalid("duration_days", duration_days));
        }
        if !repayment_amount.is_finite() || repayment_amount <= 0.0 {
            return Err(invalid("repayment_amount", repayment_amount));
        }
        if duration_days == 0 {
            return Err(LoanError::DivisionByZero { field: "duration_days" });
        }
        if principal == 0.0 {
            return Err(LoanError::DivisionByZero { field: "principal" });
        }

        let interest = repayment_amount - principal;
        let total_interest_rate = interest / principal * 100.0;
        let daily_interest_rate = total_interest_rate / duration_days as f64;
        // A tiny principal against a huge repayment overflows the rate.
        if !total_interest_rate.is_finite() || !daily_interest_rate.is_finite() {
            return Err(invalid("total_interest_rate", total_interest_rate));
        }

        Ok(Self {
            principal,
            duration_days,
            repayment_amount,
            interest,
            total_interest_rate,
            daily_interest_rate,
        })
    }

    /// Rebuild a query from stored columns. The daily rate is not stored,
    /// so it is derived again here.
    pub(crate) fn from_stored(
        principal: f64,
        duration_days: Days,
        repayment_amount: f64,
        interest: f64,
        total_interest_rate: f64,
    ) -> Self {
        let daily_interest_rate = if duration_days == 0 {
            0.0
        } else {
            total_interest_rate / duration_days as f64
        };
        Self {
            principal,
            duration_days,
            repayment_amount,
            interest,
            total_interest_rate,
            daily_interest_rate,
        }
    }
}

/// Parse the three raw form values and compute the result.
pub fn compute(principal: &str, duration_days: &str, repayment_amount: &str) -> LoanResult<LoanQuery> {
    let principal = parse_amount("principal", principal)?;
    let days = parse_days(duration_days)?;
    let repayment = parse_amount("repayment_amount", repayment_amount)?;
    let query = LoanQuery::new(principal, days, repayment)?;
    log::debug!(
        "calculator: principal={} days={} repayment={} interest={:.2} total_rate={:.2}",
        query.principal,
        query.duration_days,
        query.repayment_amount,
        query.interest,
        query.total_interest_rate,
    );
    Ok(query)
}

fn parse_amount(field: &'static str, raw: &str) -> LoanResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| invalid(field, raw))?;
    // "inf" and "NaN" parse as f64 but are not amounts.
    if !value.is_finite() {
        return Err(invalid(field, raw));
    }
    Ok(value)
}

fn parse_days(raw: &str) -> LoanResult<Days> {
    raw.trim()
        .parse::<Days>()
        .map_err(|_| invalid("duration_days", raw))
}

fn invalid(field: &'static str, value: impl ToString) -> LoanError {
    LoanError::InvalidInput {
        field,
        value: value.to_string(),
    }
}
