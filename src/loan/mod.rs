//! Loan terms and the closed-form monthly payment calculation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when loan terms fail boundary validation
///
/// The schedule engine itself assumes validated input; callers should run
/// [`LoanTerms::validate`] before handing terms to the core.
#[derive(Debug, Error, PartialEq)]
pub enum LoanError {
    #[error("loan amount must be positive, got {0}")]
    NonPositiveLoanAmount(f64),

    #[error("down payment must be non-negative, got {0}")]
    NegativeDownPayment(f64),

    #[error("annual interest rate must be non-negative, got {0}")]
    NegativeRate(f64),

    #[error("term must be at least one month")]
    NonPositiveTerm,
}

/// Terms of a single mortgage comparison request
///
/// `down_payment` is the principal already held outside the loan; together
/// with `loan_amount` it fixes the total property value used as the equity
/// denominator for both payment paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Outstanding loan amount in currency units
    pub loan_amount: f64,

    /// Principal held outside the loan (down payment), in currency units
    #[serde(default)]
    pub down_payment: f64,

    /// Annual interest rate as a fraction (0.065 = 6.5%)
    pub annual_rate: f64,

    /// Remaining payments on the minimum-payment path
    pub term_months: u32,

    /// Target number of payments for the goal path
    ///
    /// Intended to be at most `term_months`; the model tolerates larger
    /// values, which simply produce a goal payment below the minimum.
    pub goal_term_months: u32,
}

impl LoanTerms {
    /// Check the terms for values the model cannot meaningfully simulate
    pub fn validate(&self) -> Result<(), LoanError> {
        if self.loan_amount <= 0.0 {
            return Err(LoanError::NonPositiveLoanAmount(self.loan_amount));
        }
        if self.down_payment < 0.0 {
            return Err(LoanError::NegativeDownPayment(self.down_payment));
        }
        if self.annual_rate < 0.0 {
            return Err(LoanError::NegativeRate(self.annual_rate));
        }
        if self.term_months == 0 || self.goal_term_months == 0 {
            return Err(LoanError::NonPositiveTerm);
        }
        Ok(())
    }

    /// Monthly interest rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Total property value: the fixed equity denominator for both paths
    pub fn total_value(&self) -> f64 {
        self.down_payment + self.loan_amount
    }

    /// Monthly payment required to amortize over the full remaining term
    pub fn minimum_payment(&self) -> f64 {
        monthly_payment(self.loan_amount, self.annual_rate, self.term_months)
    }

    /// Monthly payment required to amortize over the goal term
    pub fn goal_payment(&self) -> f64 {
        monthly_payment(self.loan_amount, self.annual_rate, self.goal_term_months)
    }
}

/// Required monthly payment for a fully amortizing loan
///
/// Uses `L * (r * (1 + r)^n) / ((1 + r)^n - 1)` with `r` the monthly rate
/// and `n` the number of payments. A zero rate makes both numerator and
/// denominator vanish, so it is special-cased to straight-line principal
/// (`loan_amount / term_months`) rather than returning NaN.
///
/// `term_months` must be positive.
pub fn monthly_payment(loan_amount: f64, annual_rate: f64, term_months: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return loan_amount / term_months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}
