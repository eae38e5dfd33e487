//! Interest calculator tests.
//!
//! Tests cover: the derived formulas, parse failures, zero guards.

use loan_desk_core::{
    calculator::{compute, LoanQuery},
    error::LoanError,
};

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn thousand_over_thirty_days_repaying_eleven_hundred() {
    let q = compute("1000", "30", "1100").unwrap();

    assert!(approx(q.interest, 100.0), "interest = {}", q.interest);
    assert!(approx(q.total_interest_rate, 10.0));
    assert_eq!(format!("{:.4}", q.daily_interest_rate), "0.3333");
}

#[test]
fn derived_fields_follow_the_formulas() {
    let cases = [
        (250.0, 7, 262.5),
        (1_500.75, 365, 1_800.0),
        (80.0, 1, 79.0), // repayment below principal
        (0.5, 90, 12.25),
    ];
    for (principal, days, repayment) in cases {
        let q = LoanQuery::new(principal, days, repayment).unwrap();
        let interest = repayment - principal;
        let total = interest / principal * 100.0;
        assert!(approx(q.interest, interest), "{principal}/{days}/{repayment}");
        assert!(approx(q.total_interest_rate, total));
        assert!(approx(q.daily_interest_rate, total / days as f64));
    }
}

#[test]
fn compute_is_deterministic() {
    assert_eq!(
        compute("1234.56", "45", "1400").unwrap(),
        compute("1234.56", "45", "1400").unwrap()
    );
}

#[test]
fn zero_days_is_division_by_zero() {
    let err = compute("500", "0", "550").unwrap_err();
    assert!(
        matches!(err, LoanError::DivisionByZero { field: "duration_days" }),
        "got {err:?}"
    );
    assert_eq!(err.user_message(), "The number of days cannot be zero.");
}

#[test]
fn zero_principal_is_division_by_zero() {
    let err = compute("0", "10", "100").unwrap_err();
    assert!(matches!(err, LoanError::DivisionByZero { field: "principal" }));
    assert_eq!(err.user_message(), "The principal cannot be zero.");
}

#[test]
fn non_numeric_principal_is_invalid_input() {
    let err = compute("abc", "10", "100").unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { field: "principal", .. }));
    assert_eq!(err.user_message(), "Please enter valid numeric values.");
}

#[test]
fn fractional_days_is_invalid_input() {
    let err = compute("100", "12.5", "110").unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { field: "duration_days", .. }));
}

#[test]
fn non_numeric_duration_and_repayment_are_invalid_input() {
    let err = compute("100", "abc", "110").unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { field: "duration_days", .. }));
    let err = compute("100", "10", "abc").unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { field: "repayment_amount", .. }));
}

#[test]
fn overflowing_rate_is_invalid_input() {
    let err = compute("1e-300", "1", "1e300").unwrap_err();
    assert!(
        matches!(err, LoanError::InvalidInput { field: "total_interest_rate", .. }),
        "got {err:?}"
    );
    assert!(err.is_user_error());
}

#[test]
fn empty_fields_are_invalid_input() {
    for (p, d, r) in [("", "10", "100"), ("100", "", "110"), ("100", "10", "")] {
        let err = compute(p, d, r).unwrap_err();
        assert!(
            matches!(err, LoanError::InvalidInput { .. }),
            "({p:?}, {d:?}, {r:?}) gave {err:?}"
        );
    }
}

#[test]
fn negative_values_are_invalid_input() {
    for (p, d, r) in [("-100", "10", "110"), ("100", "-10", "110"), ("100", "10", "-5")] {
        assert!(matches!(
            compute(p, d, r),
            Err(LoanError::InvalidInput { .. })
        ));
    }
}

#[test]
fn input_errors_are_user_errors() {
    assert!(compute("x", "1", "1").unwrap_err().is_user_error());
    assert!(compute("1", "0", "1").unwrap_err().is_user_error());
}
