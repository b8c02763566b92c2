//! Headline metrics derived from a completed schedule
//!
//! All extractors are independent read-only scans over the row sequence.
//! "Never happened" outcomes (PMI never dropped, loan never repaid within
//! the horizon) are `None`, never a placeholder number.

use serde::Serialize;

use crate::schedule::{PathSnapshot, Schedule};

/// Which payment path a scan applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePath {
    Minimum,
    Goal,
}

/// The four headline metrics for one schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    /// Payment number at which the minimum path reaches 20% equity
    pub minimum_pmi_drop: Option<u32>,
    /// Payment number at which the goal path reaches 20% equity
    pub goal_pmi_drop: Option<u32>,
    /// How many payments earlier the goal path drops PMI
    pub months_saved_on_pmi: Option<i32>,
    /// Extra cumulative payments made on the goal path by its payoff month
    pub extra_principal_paid: Option<f64>,
    /// Total minimum-path interest minus goal-path interest at payoff
    pub interest_saved: Option<f64>,
}

fn path_snapshot(row_goal: Option<PathSnapshot>, minimum: PathSnapshot, path: SchedulePath) -> Option<PathSnapshot> {
    match path {
        SchedulePath::Minimum => Some(minimum),
        SchedulePath::Goal => row_goal,
    }
}

/// Payment number of the first row where the given path has reached the PMI
/// equity threshold
///
/// Absent goal months are skipped, so a finished goal path cannot satisfy
/// the scan after its payoff.
pub fn first_pmi_drop(schedule: &Schedule, path: SchedulePath) -> Option<u32> {
    schedule.rows.iter().find_map(|row| {
        path_snapshot(row.goal, row.minimum, path)
            .filter(PathSnapshot::pmi_cleared)
            .map(|_| row.payment_number)
    })
}

/// Payments saved on PMI: minimum-path drop month minus goal-path drop month
///
/// `None` if either path never reaches the threshold within the horizon.
pub fn months_saved_on_pmi(schedule: &Schedule) -> Option<i32> {
    let minimum = first_pmi_drop(schedule, SchedulePath::Minimum)?;
    let goal = first_pmi_drop(schedule, SchedulePath::Goal)?;
    Some(minimum as i32 - goal as i32)
}

/// Extra cumulative payments on the goal path at its payoff month
///
/// Measured at the first row where the goal balance is <= 0: goal cumulative
/// payments minus minimum cumulative payments. Non-negative whenever the
/// goal payment is at least the minimum payment. `None` if the goal path
/// never finishes.
pub fn extra_principal_paid(schedule: &Schedule) -> Option<f64> {
    let payoff = schedule.goal_payoff_row()?;
    let goal = payoff.goal?;
    Some(goal.cumulative_paid - payoff.minimum.cumulative_paid)
}

/// Interest saved by the goal path over the life of the loan
///
/// Minimum-path cumulative interest at the final scheduled month minus
/// goal-path cumulative interest at its payoff month. `None` if the goal
/// path never finishes within the horizon.
pub fn interest_saved(schedule: &Schedule) -> Option<f64> {
    let payoff_goal = schedule.goal_payoff_row()?.goal?;
    let final_row = schedule.final_row()?;
    Some(final_row.minimum.cumulative_interest - payoff_goal.cumulative_interest)
}

/// Run all four scans and bundle the results
pub fn summarize(schedule: &Schedule) -> ScheduleSummary {
    ScheduleSummary {
        minimum_pmi_drop: first_pmi_drop(schedule, SchedulePath::Minimum),
        goal_pmi_drop: first_pmi_drop(schedule, SchedulePath::Goal),
        months_saved_on_pmi: months_saved_on_pmi(schedule),
        extra_principal_paid: extra_principal_paid(schedule),
        interest_saved: interest_saved(schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanTerms;
    use crate::schedule::ScheduleEngine;
    use approx::assert_relative_eq;

    /// 1000 loan at zero rate: min path retires 100/month over 10 months,
    /// goal path 250/month over 4, every figure exact
    fn zero_rate_schedule() -> Schedule {
        let terms = LoanTerms {
            loan_amount: 1_000.0,
            down_payment: 0.0,
            annual_rate: 0.0,
            term_months: 10,
            goal_term_months: 4,
        };
        ScheduleEngine::new(terms, 100.0, 250.0).run()
    }

    #[test]
    fn test_first_pmi_drop_per_path() {
        let schedule = zero_rate_schedule();
        // Minimum path equity: 0.1 per month, crosses 0.2 at payment 2;
        // goal path: 0.25 at payment 1
        assert_eq!(first_pmi_drop(&schedule, SchedulePath::Minimum), Some(2));
        assert_eq!(first_pmi_drop(&schedule, SchedulePath::Goal), Some(1));
        assert_eq!(months_saved_on_pmi(&schedule), Some(1));
    }

    #[test]
    fn test_extra_principal_at_payoff() {
        let schedule = zero_rate_schedule();
        // Payoff at payment 4: goal has paid 1000, minimum 400
        assert_eq!(extra_principal_paid(&schedule), Some(600.0));
    }

    #[test]
    fn test_interest_saved_zero_rate() {
        let schedule = zero_rate_schedule();
        assert_eq!(interest_saved(&schedule), Some(0.0));
    }

    #[test]
    fn test_interest_saved_positive_rate() {
        let terms = LoanTerms {
            loan_amount: 200_000.0,
            down_payment: 0.0,
            annual_rate: 0.06,
            term_months: 360,
            goal_term_months: 180,
        };
        let min_payment = terms.minimum_payment();
        let goal_payment = terms.goal_payment();
        let schedule = ScheduleEngine::new(terms, min_payment, goal_payment).run();

        let saved = interest_saved(&schedule).unwrap();
        assert!(saved > 0.0);

        // Identity: saving equals the gap between total interest on the two
        // paths measured at their own endpoints
        let total_min = schedule.final_row().unwrap().minimum.cumulative_interest;
        let goal_at_payoff = schedule
            .goal_payoff_row()
            .unwrap()
            .goal
            .unwrap()
            .cumulative_interest;
        assert_relative_eq!(saved, total_min - goal_at_payoff);
    }

    #[test]
    fn test_sentinels_when_goal_never_finishes() {
        let terms = LoanTerms {
            loan_amount: 1_000.0,
            down_payment: 0.0,
            annual_rate: 0.12,
            term_months: 12,
            goal_term_months: 6,
        };
        let min_payment = terms.minimum_payment();
        // Exactly the monthly interest: principal never moves
        let schedule = ScheduleEngine::new(terms, min_payment, 10.0).run();

        assert_eq!(first_pmi_drop(&schedule, SchedulePath::Goal), None);
        assert_eq!(months_saved_on_pmi(&schedule), None);
        assert_eq!(extra_principal_paid(&schedule), None);
        assert_eq!(interest_saved(&schedule), None);

        let summary = summarize(&schedule);
        assert!(summary.minimum_pmi_drop.is_some());
        assert!(summary.goal_pmi_drop.is_none());
        assert!(summary.interest_saved.is_none());
    }

    #[test]
    fn test_equal_payments_save_nothing() {
        let terms = LoanTerms {
            loan_amount: 300_000.0,
            down_payment: 0.0,
            annual_rate: 0.06,
            term_months: 360,
            goal_term_months: 360,
        };
        let payment = terms.minimum_payment();
        let schedule = ScheduleEngine::new(terms.clone(), payment, payment).run();
        let summary = summarize(&schedule);

        assert_eq!(summary.months_saved_on_pmi, Some(0));
        assert!(summary.extra_principal_paid.unwrap_or(0.0).abs() < 1e-6);
        assert!(summary.interest_saved.unwrap_or(0.0).abs() < 1e-6);
    }
}
