use crate::amortizer::Amortizer;
use log::warn;

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterestSummary {
    pub total_interest: f64,
    pub months_paid: u32,
    pub did_not_fully_amortize: bool,
}

/// Replays the payment schedule and totals the interest accrued up to and
/// including the payoff month, or through `term_months` if the payment never
/// retires the balance.
pub fn accumulate_interest(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    payment: f64,
) -> InterestSummary {
    let mut amortizer = Amortizer::new(principal, annual_rate_percent, term_months, payment);
    let mut total_interest = 0.;
    let mut months_paid = 0;

    for period in amortizer.by_ref() {
        total_interest += period.interest;
        months_paid = period.month;
    }

    let did_not_fully_amortize = amortizer.fell_short();
    if did_not_fully_amortize {
        warn!(
            "payment {} leaves {} owed on ${} after {} months",
            payment,
            amortizer.balance(),
            principal,
            term_months
        );
    }

    InterestSummary {
        total_interest,
        months_paid,
        did_not_fully_amortize,
    }
}

pub fn compute_total_interest(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    payment: f64,
) -> f64 {
    accumulate_interest(principal, annual_rate_percent, term_months, payment).total_interest
}
