//! Loan interest desk: calculator, history store and chart datasets.

pub mod calculator;
pub mod chart;
pub mod config;
pub mod desk;
pub mod error;
pub mod report;
pub mod store;
pub mod types;
