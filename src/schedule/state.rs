//! Running state for a single payment path

use super::rows::PathSnapshot;
use crate::loan::LoanTerms;

/// Mutable per-path accumulator advanced one month at a time
///
/// `cumulative_principal` starts at the down payment so that equity measures
/// total principal held against the property, not just principal repaid on
/// the loan.
#[derive(Debug, Clone)]
pub struct PathState {
    /// Remaining loan balance
    pub balance: f64,
    /// Principal held: down payment plus principal repaid so far
    pub cumulative_principal: f64,
    /// Total payments made so far
    pub cumulative_paid: f64,
    /// Total interest accrued so far
    pub cumulative_interest: f64,
}

impl PathState {
    /// Initial state at payment number 0
    pub fn new(terms: &LoanTerms) -> Self {
        Self {
            balance: terms.loan_amount,
            cumulative_principal: terms.down_payment,
            cumulative_paid: 0.0,
            cumulative_interest: 0.0,
        }
    }

    /// Apply one monthly payment: accrue interest, retire the remainder as
    /// principal
    ///
    /// A payment below the month's interest accrual produces negative
    /// principal and a growing balance; the state does not guard against it.
    pub fn advance(&mut self, payment: f64, monthly_rate: f64) {
        let interest = self.balance * monthly_rate;
        let principal = payment - interest;
        self.cumulative_principal += principal;
        self.balance -= principal;
        self.cumulative_paid += payment;
        self.cumulative_interest += interest;
    }

    /// Equity fraction against the fixed total property value
    pub fn equity(&self, total_value: f64) -> f64 {
        self.cumulative_principal / total_value
    }

    /// Freeze the current state into an immutable row snapshot
    pub fn snapshot(&self, total_value: f64) -> PathSnapshot {
        PathSnapshot {
            cumulative_paid: self.cumulative_paid,
            balance: self.balance,
            cumulative_interest: self.cumulative_interest,
            equity: self.equity(total_value),
        }
    }
}
