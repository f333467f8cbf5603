//! Risk module - heuristic beta, volatility/diversification scores,
//! profile alignment.

mod risk_model;
mod risk_service;

#[cfg(test)]
mod risk_service_tests;

pub use risk_model::{RiskAlignment, RiskBreakdown};
pub use risk_service::{
    assess_risk_alignment, diversification_score, overall_risk_score, portfolio_beta,
    risk_breakdown, risk_report, sharpe_ratio, volatility_score,
};
