//! Rebalancing module - drift detection against profile-derived targets.

mod rebalancing_model;
mod rebalancing_service;


pub use rebalancing_model::{RebalanceAction, RebalancePriority, RebalanceRecommendation};
pub use rebalancing_service::{
    needs_rebalancing, rebalance_recommendations, rebalancing_priority, rebalancing_report,
    target_allocation, tax_loss_harvesting_opportunities,
};
