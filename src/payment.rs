use crate::loan::{monthly_rate, LoanParameters};
use log::debug;

/// Fixed monthly payment that fully amortizes `principal` over `term_months`.
///
/// A zero rate falls back to straight-line repayment. `term_months` must be
/// at least 1; zero yields a non-finite result.
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    let pmt_rate = monthly_rate(annual_rate_percent);

    let pmt_amount = if pmt_rate == 0. {
        principal / term_months as f64
    } else {
        // discount form of the annuity factor; stays finite for very long terms
        let discount = (1. + pmt_rate).powf(-(term_months as f64));
        (principal * pmt_rate) / (1. - discount)
    };
    debug!(
        "payment for ${} at {}% over {} months: {}",
        principal, annual_rate_percent, term_months, pmt_amount
    );
    pmt_amount
}

/// Payment after a lump-sum curtailment, re-amortized at the same rate and term.
///
/// An `extra_payment` larger than `principal` produces a negative payment.
pub fn compute_recast_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    extra_payment: Option<f64>,
) -> f64 {
    let new_principal = principal - extra_payment.unwrap_or(0.);
    compute_monthly_payment(new_principal, annual_rate_percent, term_months)
}

impl LoanParameters {
    pub fn monthly_payment(&self) -> f64 {
        compute_monthly_payment(self.principal, self.annual_rate_percent, self.term_months)
    }

    pub fn recast_payment(&self) -> f64 {
        compute_recast_payment(
            self.principal,
            self.annual_rate_percent,
            self.term_months,
            self.extra_payment,
        )
    }
}
