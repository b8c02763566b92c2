//! Mortgage amortization comparison engine
//!
//! Projects a month-by-month amortization schedule for two payment paths on
//! the same loan: the minimum contractual payment over the full remaining
//! term, and a higher "goal" payment targeting a shorter payoff. The schedule
//! tracks remaining balance, cumulative payments, cumulative interest, and
//! equity for both paths, detects when each path reaches the 20% equity
//! threshold at which PMI is dropped, and derives headline savings metrics.
//!
//! Typical flow: build [`LoanTerms`], derive both payments with
//! [`monthly_payment`] (or the convenience accessors on the terms), run a
//! [`ScheduleEngine`], then [`summarize`] the resulting [`Schedule`] and/or
//! export it as CSV.

pub mod export;
pub mod loan;
pub mod schedule;
pub mod summary;

pub use loan::{monthly_payment, LoanError, LoanTerms};
pub use schedule::{
    PathSnapshot, Schedule, ScheduleEngine, ScheduleRow, PMI_EQUITY_THRESHOLD,
};
pub use summary::{summarize, SchedulePath, ScheduleSummary};
