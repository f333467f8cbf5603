//! Performance module - return, activity, and income metrics.

mod performance_model;
mod performance_service;


pub use performance_model::PerformanceSummary;
pub use performance_service::{
    annualized_return, dividend_yield, performance_comparison, performance_report, roi,
    summarize, total_dividends, total_fees, turnover_rate,
};
