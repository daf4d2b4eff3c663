use crate::loan::monthly_rate;

/// Growth given up by spending `amount` now instead of investing it at
/// `annual_return_percent`, compounded monthly, for `months`.
pub fn opportunity_cost(amount: f64, annual_return_percent: f64, months: u32) -> f64 {
    let growth_rate = monthly_rate(annual_return_percent);
    if growth_rate == 0. {
        return 0.;
    }
    amount * ((1. + growth_rate).powf(months as f64) - 1.)
}

#[cfg(test)]
mod tests {
    use super::opportunity_cost;
    use approx::assert_relative_eq;
    use test_log::test;

    #[test]
    fn test_opportunity_cost() {
        // 12% a year is 1% a month
        assert_relative_eq!(opportunity_cost(1000., 12., 1), 10., max_relative = 1e-12);
        assert_relative_eq!(opportunity_cost(1000., 12., 2), 20.1, max_relative = 1e-12);
        assert_relative_eq!(
            opportunity_cost(10000., 6., 360),
            10000. * (1.005_f64.powi(360) - 1.),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_long_horizon_keeps_growing() {
        let century = opportunity_cost(1000., 6., 1200);
        assert!(century > 0.);
        assert!(opportunity_cost(1000., 6., 2_147_483_648) > century);
    }

    #[test]
    fn test_no_return_or_no_time() {
        assert_eq!(opportunity_cost(10000., 0., 360), 0.);
        assert_eq!(opportunity_cost(10000., 5., 0), 0.);
        assert_eq!(opportunity_cost(0., 5., 360), 0.);
    }
}
