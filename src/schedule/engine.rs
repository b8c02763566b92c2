//! Simulation engine producing the two-path schedule

use log::{debug, warn};

use super::rows::{Schedule, ScheduleRow};
use super::state::PathState;
use crate::loan::LoanTerms;

/// Runs one simulate pass over the full minimum-path term
///
/// The engine is built once per computation request and holds no state
/// across runs; `run` rebuilds both paths from the terms every time.
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    terms: LoanTerms,
    min_payment: f64,
    goal_payment: f64,
}

impl ScheduleEngine {
    pub fn new(terms: LoanTerms, min_payment: f64, goal_payment: f64) -> Self {
        Self {
            terms,
            min_payment,
            goal_payment,
        }
    }

    /// Simulate month by month for `term_months` rows
    ///
    /// The minimum path is advanced every month. The goal path is advanced
    /// only while its balance from the previous month was still >= 0, so the
    /// month its balance first crosses below zero is computed and recorded
    /// as-is (the final payment is not clamped to the remaining balance);
    /// its snapshots are absent from the following month onward.
    pub fn run(&self) -> Schedule {
        let monthly_rate = self.terms.monthly_rate();
        let total_value = self.terms.total_value();

        if self.goal_payment <= self.terms.loan_amount * monthly_rate {
            warn!(
                "goal payment {:.2} does not cover first-month interest {:.2}; \
                 goal path will never amortize",
                self.goal_payment,
                self.terms.loan_amount * monthly_rate
            );
        }

        let mut minimum = PathState::new(&self.terms);
        let mut goal = PathState::new(&self.terms);
        let mut goal_active = true;
        let mut rows = Vec::with_capacity(self.terms.term_months as usize);

        for payment_number in 1..=self.terms.term_months {
            minimum.advance(self.min_payment, monthly_rate);
            let minimum_snapshot = minimum.snapshot(total_value);

            let goal_snapshot = if goal_active && goal.balance >= 0.0 {
                goal.advance(self.goal_payment, monthly_rate);
                Some(goal.snapshot(total_value))
            } else {
                if goal_active {
                    goal_active = false;
                    debug!(
                        "goal path finished; no goal figures from payment {} onward",
                        payment_number
                    );
                }
                None
            };

            rows.push(ScheduleRow {
                payment_number,
                minimum: minimum_snapshot,
                goal: goal_snapshot,
            });
        }

        Schedule { rows }
    }
}
