//! Allocation module - percentage breakdowns and performer rankings.

mod allocation_service;

pub use allocation_service::{
    asset_allocation, bottom_performers, sector_allocation, top_performers,
};
