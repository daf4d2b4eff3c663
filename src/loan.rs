use std::fmt;

/// Balance left over after the final period below which a loan counts as
/// paid off. Half a cent.
pub const AMORTIZATION_TOLERANCE: f64 = 0.005;

/// Longest term accepted at the boundary: 100 years.
pub const MAX_TERM_MONTHS: u32 = 1200;

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanParameters {
    pub principal: f64,
    pub annual_rate_percent: f64, // nominal annual rate as a percentage (i.e., 4.5, 7.0)
    pub term_months: u32,
    pub extra_payment: Option<f64>, // one-time curtailment, only used by recast
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
            extra_payment: None,
        }
    }

    pub fn with_extra_payment(mut self, extra_payment: f64) -> Self {
        self.extra_payment = Some(extra_payment);
        self
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }
}

impl fmt::Display for LoanParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal ${:.2}, rate {}%, term {} months",
            self.principal, self.annual_rate_percent, self.term_months
        )?;
        if let Some(extra) = self.extra_payment {
            write!(f, ", extra payment ${:.2}", extra)?;
        }
        Ok(())
    }
}

pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100. / 12.
}

/// Rounds half away from zero to `dec` decimal places.
pub fn round(amt: f64, dec: u32) -> f64 {
    if amt == 0. {
        0.
    } else {
        let scale = 10_f64.powi(dec as i32);
        (amt * scale).round() / scale
    }
}
