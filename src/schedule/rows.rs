//! Immutable schedule rows produced by the engine

use serde::Serialize;

use super::PMI_EQUITY_THRESHOLD;

/// One path's figures for a single month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSnapshot {
    /// Total payments made through this month
    pub cumulative_paid: f64,
    /// Remaining balance after this month's payment
    pub balance: f64,
    /// Total interest accrued through this month
    pub cumulative_interest: f64,
    /// Equity fraction after this month's payment
    pub equity: f64,
}

impl PathSnapshot {
    /// Whether this path has reached the PMI-dropping equity threshold
    ///
    /// Evaluated from equity alone; because equity is monotone along an
    /// amortizing path, the flag stays set for every later row without any
    /// carried state.
    pub fn pmi_cleared(&self) -> bool {
        self.equity >= PMI_EQUITY_THRESHOLD
    }
}

/// One simulated month across both payment paths
///
/// The minimum path is populated for every row. The goal path becomes `None`
/// starting the month after its balance first went negative and stays absent
/// for the rest of the schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
    /// 1-indexed payment number
    pub payment_number: u32,
    pub minimum: PathSnapshot,
    pub goal: Option<PathSnapshot>,
}

/// Complete result of one simulation run
///
/// Rows are ordered by payment number and never mutated after construction;
/// summaries and exports are read-only scans over this sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row where the goal path's balance has reached zero or below
    ///
    /// This is the overshoot row: the goal snapshot is still present there,
    /// typically with a slightly negative balance. `None` when the goal
    /// payment never amortizes the loan within the horizon.
    pub fn goal_payoff_row(&self) -> Option<&ScheduleRow> {
        self.rows
            .iter()
            .find(|row| matches!(row.goal, Some(goal) if goal.balance <= 0.0))
    }

    /// Last row of the schedule (month `term_months`)
    pub fn final_row(&self) -> Option<&ScheduleRow> {
        self.rows.last()
    }
}
