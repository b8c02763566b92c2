//! Month-by-month amortization schedule for minimum and goal payment paths

mod engine;
mod rows;
mod state;

pub use engine::ScheduleEngine;
pub use rows::{PathSnapshot, Schedule, ScheduleRow};
pub use state::PathState;

/// Equity fraction at which PMI is dropped (20%)
pub const PMI_EQUITY_THRESHOLD: f64 = 0.20;
