//! Profiles module - owner risk tolerance and derived targets.

mod profiles_model;

pub use profiles_model::{RiskProfile, RiskTolerance};
