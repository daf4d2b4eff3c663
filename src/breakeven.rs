use log::warn;
use std::fmt;

/// Months of payment savings needed to recoup `refinance_costs`, rounded up.
///
/// Unguarded: when `new_payment` is not below `current_payment` the result is
/// negative or infinite (NaN for zero costs and zero savings). Use
/// [`interpret_break_even`] before showing it to anyone.
pub fn compute_break_even_months(refinance_costs: f64, current_payment: f64, new_payment: f64) -> f64 {
    let monthly_savings = current_payment - new_payment;
    (refinance_costs / monthly_savings).ceil()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakEven {
    Immediate,
    Months(u32),
    Never,
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Immediate => write!(f, "breaks even immediately"),
            BreakEven::Months(1) => write!(f, "breaks even in 1 month"),
            BreakEven::Months(months) => write!(f, "breaks even in {} months", months),
            BreakEven::Never => write!(f, "never breaks even"),
        }
    }
}

/// Maps a raw break-even figure onto what a borrower should be told.
///
/// No monthly savings means never, whatever `months` came out as (zero costs
/// against a higher payment give `-0`). Otherwise anything negative or
/// non-finite is never as well.
pub fn interpret_break_even(months: f64, monthly_savings: f64) -> BreakEven {
    let saves = monthly_savings > 0.;
    if !saves || !months.is_finite() || months < 0. || months > u32::MAX as f64 {
        warn!(
            "refinance never breaks even (raw result {}, monthly savings {})",
            months, monthly_savings
        );
        BreakEven::Never
    } else if months == 0. {
        BreakEven::Immediate
    } else {
        BreakEven::Months(months as u32)
    }
}
