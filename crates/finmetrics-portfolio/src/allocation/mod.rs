//! Allocation analytics.
//!
//! - Sector allocation of current holdings
//! - Target allocation of new money by risk profile

mod diversification;
mod sector;

pub use diversification::{make_diversification_calculator, Allocation, DiversificationCalculator};
pub use sector::{sector_allocation, sector_allocation_with_config, SectorAllocation, SectorWeight};
