//! Loan desk tests.
//!
//! Tests cover: compute-persist-refresh sequencing, failed attempts
//! persisting nothing, history view on startup, chart datasets.

use loan_desk_core::{
    chart::{CompositionChart, ScatterDataset},
    config::DeskConfig,
    desk::LoanDesk,
    error::LoanError,
};

fn desk() -> LoanDesk {
    let _ = env_logger::builder().is_test(true).try_init();
    LoanDesk::in_memory().expect("in-memory desk")
}

#[test]
fn calculation_is_displayed_persisted_and_charted() {
    let mut desk = desk();
    let calc = desk.calculate("1000", "30", "1100").unwrap();

    assert_eq!(calc.summary.interest, "$100.00");
    assert_eq!(calc.summary.total_interest_rate, "10.00%");
    assert_eq!(calc.summary.daily_interest_rate, "0.3333%");
    assert_eq!(
        calc.summary.to_string(),
        "Interest: $100.00\nTotal interest rate: 10.00%\nDaily interest rate: 0.3333%"
    );

    assert_eq!(desk.store.count().unwrap(), 1);
    assert_eq!(desk.store.latest().unwrap().unwrap().id, calc.id);

    assert_eq!(calc.composition.duration_days, 30);
    assert_eq!(calc.scatter.points.len(), 1);
}

#[test]
fn failed_calculation_persists_nothing() {
    let mut desk = desk();
    desk.calculate("1000", "30", "1100").unwrap();

    let err = desk.calculate("500", "0", "550").unwrap_err();
    assert!(matches!(err, LoanError::DivisionByZero { .. }));
    let err = desk.calculate("abc", "10", "100").unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { .. }));

    assert_eq!(desk.store.count().unwrap(), 1);
}

#[test]
fn scatter_refreshes_with_every_calculation() {
    let mut desk = desk();
    desk.calculate("1000", "30", "1100").unwrap();
    desk.calculate("2000", "60", "2500").unwrap();
    let calc = desk.calculate("400", "7", "404").unwrap();

    let scatter = &calc.scatter;
    assert_eq!(scatter.points.len(), 3);
    assert!((scatter.min_rate.unwrap() - 1.0).abs() < 1e-9);
    assert!((scatter.max_rate.unwrap() - 25.0).abs() < 1e-9);
    assert_eq!(scatter.color_position(25.0), 1.0);
    assert_eq!(scatter.color_position(1.0), 0.0);
}

#[test]
fn load_history_matches_stored_rows() {
    let mut desk = desk();
    assert!(desk.load_history().unwrap().scatter.is_empty());

    desk.calculate("1000", "30", "1100").unwrap();
    desk.calculate("250", "5", "275").unwrap();

    let view = desk.load_history().unwrap();
    assert_eq!(view.rows.len(), 2);
    let first = &view.rows[0];
    assert_eq!(first.principal, "$1000.00");
    assert_eq!(first.duration_days, "30");
    assert_eq!(first.repayment_amount, "$1100.00");
    assert_eq!(first.interest, "$100.00");
    assert_eq!(first.total_rate, "10.00%");
    assert_eq!(view.scatter.points.len(), 2);
}

#[test]
fn composition_slices_split_the_total() {
    let q = loan_desk_core::calculator::compute("1000", "30", "1100").unwrap();
    let chart = CompositionChart::for_query(&q);

    assert!((chart.principal.percent + chart.interest.percent - 100.0).abs() < 1e-9);
    assert_eq!(chart.principal.absolute, 1000);
    assert_eq!(chart.interest.absolute, 100);
    assert_eq!(chart.principal.caption(), "90.9%\n($1000)");
    assert_eq!(chart.duration_caption(), "30 days");
}

#[test]
fn overflowing_rate_persists_nothing() {
    let mut desk = desk();
    desk.calculate("1000", "30", "1100").unwrap();

    let err = desk.calculate("1e-300", "1", "1e300").unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { .. }));

    assert_eq!(desk.store.count().unwrap(), 1);
    let scatter = desk.load_history().unwrap().scatter;
    assert!(scatter.max_rate.unwrap().is_finite());
}

#[test]
fn wedge_amounts_round_half_to_even() {
    // 100.5 of principal and no interest: the whole pie is exactly 100.5.
    let q = loan_desk_core::calculator::compute("100.5", "10", "100.5").unwrap();
    let chart = CompositionChart::for_query(&q);

    assert_eq!(chart.principal.percent, 100.0);
    assert_eq!(chart.principal.absolute, 100);
    assert_eq!(chart.interest.absolute, 0);
}

#[test]
fn negative_interest_draws_an_empty_wedge() {
    let q = loan_desk_core::calculator::compute("100", "10", "90").unwrap();
    let chart = CompositionChart::for_query(&q);

    assert_eq!(chart.interest.value, 0.0);
    assert_eq!(chart.principal.percent, 100.0);
    assert!((chart.raw_interest + 10.0).abs() < 1e-9);
}

#[test]
fn empty_scatter_has_no_bounds() {
    let scatter = ScatterDataset::from_points(Vec::new());
    assert!(scatter.is_empty());
    assert_eq!(scatter.min_rate, None);
    assert_eq!(scatter.color_position(3.0), 0.5);
}

#[test]
fn history_toggle_flips_visibility() {
    let mut desk = desk();
    assert!(desk.history_visible());
    assert!(!desk.toggle_history());
    assert!(desk.toggle_history());
}

#[test]
fn file_backed_desk_reloads_previous_runs() {
    let path = std::env::temp_dir().join(format!("loan-desk-session-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let config = DeskConfig {
        db_path: path.to_str().unwrap().to_string(),
        ..DeskConfig::default()
    };

    let mut first = LoanDesk::open(&config).unwrap();
    first.calculate("1000", "30", "1100").unwrap();
    first.close().unwrap();

    let second = LoanDesk::open(&config).unwrap();
    let view = second.load_history().unwrap();
    assert_eq!(view.rows.len(), 1);
    second.close().unwrap();

    let _ = std::fs::remove_file(&path);
}

#[test]
fn config_defaults_fill_missing_keys() {
    let path = std::env::temp_dir().join(format!("loan-desk-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "show_history": false }"#).unwrap();

    let config = DeskConfig::load(path.to_str().unwrap()).unwrap();
    assert!(!config.show_history);
    assert_eq!(config.db_path, loan_desk_core::config::DEFAULT_DB_PATH);
    assert!(config.wal);

    let _ = std::fs::remove_file(&path);
}
