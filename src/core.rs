//! Calculation and aggregation engine.
//!
//! The engine is synchronous and works on a single day's [`SettlementTable`] that is
//! already resident in memory: [`calculate_columns`] appends the derived columns,
//! then [`DailyMetrics`] and [`find_peak_hour`] read them independently.

pub mod aggregator;
pub mod calculator;
pub mod error;
pub mod peak_hour;
pub mod table;

pub use self::{
    aggregator::DailyMetrics,
    calculator::calculate_columns,
    peak_hour::{PeakHour, find_peak_hour},
    table::{SettlementRecord, SettlementTable},
};
