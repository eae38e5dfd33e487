//! Chart datasets.
//!
//! The core generates these; a front end just renders them.

use crate::{calculator::LoanQuery, types::Days};
use serde::{Deserialize, Serialize};

pub const PRINCIPAL_LABEL: &str = "Principal";
pub const INTEREST_LABEL: &str = "Interest";

/// One wedge of the composition pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label:    String,
    pub value:    f64,
    /// Share of the pie, 0..=100.
    pub percent:  f64,
    /// `percent` of the pie total, rounded half-to-even to whole currency units.
    pub absolute: i64,
}

impl Slice {
    /// Wedge caption, e.g. `"90.9%\n($1000)"`.
    pub fn caption(&self) -> String {
        format!("{:.1}%\n(${})", self.percent, self.absolute)
    }
}

/// Principal versus interest for one calculation, plus the term as a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionChart {
    pub principal:     Slice,
    pub interest:      Slice,
    /// Raw interest; may be negative when repayment is below principal.
    pub raw_interest:  f64,
    pub duration_days: Days,
}

impl CompositionChart {
    pub fn for_query(q: &LoanQuery) -> Self {
        // A pie cannot show a negative wedge.
        let interest = q.interest.max(0.0);
        let total = q.principal + interest;

        let slice = |label: &str, value: f64| {
            let percent = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            Slice {
                label: label.to_string(),
                value,
                percent,
                absolute: (percent / 100.0 * total).round_ties_even() as i64,
            }
        };

        Self {
            principal: slice(PRINCIPAL_LABEL, q.principal),
            interest: slice(INTEREST_LABEL, interest),
            raw_interest: q.interest,
            duration_days: q.duration_days,
        }
    }

    pub fn duration_caption(&self) -> String {
        format!("{} days", self.duration_days)
    }
}

/// One historical calculation on the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub principal:           f64,
    pub duration_days:       Days,
    /// Drives the point colour.
    pub total_interest_rate: f64,
}

/// Principal (x) against duration (y), coloured by total rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterDataset {
    pub points:   Vec<ScatterPoint>,
    /// Colour scale bounds. `None` when there are no points.
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
}

impl ScatterDataset {
    pub fn from_points(points: impl IntoIterator<Item = (f64, Days, f64)>) -> Self {
        let points: Vec<ScatterPoint> = points
            .into_iter()
            .map(|(principal, duration_days, total_interest_rate)| ScatterPoint {
                principal,
                duration_days,
                total_interest_rate,
            })
            .collect();

        let rates = points.iter().map(|p| p.total_interest_rate);
        let min_rate = rates.clone().reduce(f64::min);
        let max_rate = rates.reduce(f64::max);

        Self {
            points,
            min_rate,
            max_rate,
        }
    }

    pub fn from_history(history: &[LoanQuery]) -> Self {
        Self::from_points(
            history
                .iter()
                .map(|q| (q.principal, q.duration_days, q.total_interest_rate)),
        )
    }

    /// Nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of `rate` on the colour scale, 0.0 (lowest) to 1.0 (highest).
    pub fn color_position(&self, rate: f64) -> f64 {
        match (self.min_rate, self.max_rate) {
            (Some(lo), Some(hi)) if hi > lo => ((rate - lo) / (hi - lo)).clamp(0.0, 1.0),
            _ => 0.5,
        }
    }
}
