//! Month-by-month simulation shared by the interest total and the schedule.
//!
//! Each step accrues interest on the opening balance, applies the fixed
//! payment, and stops after `term_months` periods or after the first period
//! whose closing balance is zero or below, whichever comes first. There is no
//! final-payment close-out: an overshooting last payment simply drives the
//! raw balance negative.

use crate::loan::{monthly_rate, AMORTIZATION_TOLERANCE};
use log::trace;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Period {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub end_balance: f64, // unclamped
}

#[derive(Clone, Debug)]
pub struct Amortizer {
    balance: f64,
    pmt_rate: f64,
    payment: f64,
    term_months: u32,
    month: u32,
    paid_off: bool,
}

impl Amortizer {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32, payment: f64) -> Self {
        Self {
            balance: principal,
            pmt_rate: monthly_rate(annual_rate_percent),
            payment,
            term_months,
            month: 0,
            paid_off: false,
        }
    }

    /// Raw balance after the periods consumed so far.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// True once the simulation has ended with more than
    /// `AMORTIZATION_TOLERANCE` still owed.
    pub fn fell_short(&self) -> bool {
        self.is_finished() && !self.paid_off && self.balance > AMORTIZATION_TOLERANCE
    }

    fn is_finished(&self) -> bool {
        self.paid_off || self.month >= self.term_months
    }
}

impl Iterator for Amortizer {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        if self.is_finished() {
            return None;
        }

        self.month += 1;
        let interest = self.balance * self.pmt_rate;
        let principal = self.payment - interest;
        self.balance -= principal;
        self.paid_off = self.balance <= 0.;

        trace!(
            "month {}, interest {}, principal {}, end bal {}",
            self.month,
            interest,
            principal,
            self.balance
        );

        Some(Period {
            month: self.month,
            interest,
            principal,
            end_balance: self.balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.is_finished() {
            0
        } else {
            (self.term_months - self.month) as usize
        };
        (remaining.min(1), Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::{Amortizer, Period};
    use crate::payment::compute_monthly_payment;
    use approx::assert_abs_diff_eq;
    use test_log::test;

    #[test]
    fn test_first_period_split() {
        let payment = compute_monthly_payment(200000., 4.5, 360);
        let first = Amortizer::new(200000., 4.5, 360, payment).next().unwrap();

        assert_eq!(first.month, 1);
        assert_eq!(first.interest, 750.);
        assert_abs_diff_eq!(first.principal, 263.3706, epsilon = 1e-4);
        assert_abs_diff_eq!(first.end_balance, 199736.6294, epsilon = 1e-4);
    }

    #[test]
    fn test_stops_at_payoff() {
        let mut amortizer = Amortizer::new(100000., 6., 360, 1000.);
        let periods: Vec<Period> = amortizer.by_ref().collect();

        assert_eq!(periods.len(), 139);
        assert!(periods[138].end_balance < 0.);
        assert!(periods[137].end_balance > 0.);
        assert!(!amortizer.fell_short());
        assert_eq!(amortizer.next(), None);
    }

    #[test]
    fn test_stops_at_term_when_underpaying() {
        let mut amortizer = Amortizer::new(100000., 6., 360, 400.);
        assert_eq!(amortizer.by_ref().count(), 360);
        assert!(amortizer.balance() > 100000.);
        assert!(amortizer.fell_short());
    }

    #[test]
    fn test_size_hint_bounded_by_term() {
        let mut amortizer = Amortizer::new(12000., 0., 12, 1000.);
        assert_eq!(amortizer.size_hint(), (1, Some(12)));
        amortizer.next();
        assert_eq!(amortizer.size_hint(), (1, Some(11)));
        assert_eq!(amortizer.by_ref().count(), 11);
        assert_eq!(amortizer.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_zero_term_yields_nothing() {
        let mut amortizer = Amortizer::new(1000., 5., 0, 100.);
        assert_eq!(amortizer.next(), None);
        // nothing was simulated, so the whole principal is still owed
        assert!(amortizer.fell_short());
    }
}
