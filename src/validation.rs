//! Boundary checks for numbers arriving from a form or request body.
//!
//! The calculators trust their inputs; everything that could make them
//! produce degenerate output is rejected here instead, and every problem is
//! reported in one pass.

use crate::closing_costs::ClosingCosts;
use crate::comparison::ComparisonInputs;
use crate::error::{ValidationError, ValidationErrors};
use crate::loan::{LoanParameters, MAX_TERM_MONTHS};
use std::collections::BTreeMap;

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawLoanInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_months: f64,
    pub extra_payment: Option<f64>,
}

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawComparisonInput {
    pub current: RawLoanInput,
    pub refinance_rate_percent: f64,
    pub refinance_term_months: f64,
    pub closing_cost_fees: Option<BTreeMap<String, f64>>,
    pub flat_closing_costs: Option<f64>,
}

pub fn validate_loan(raw: &RawLoanInput) -> Result<LoanParameters, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let loan = check_loan(raw, &mut errors);
    match loan {
        Some(loan) if errors.is_empty() => Ok(loan),
        _ => Err(errors),
    }
}

pub fn validate_comparison(raw: &RawComparisonInput) -> Result<ComparisonInputs, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let current = check_loan(&raw.current, &mut errors);
    let refinance_rate = check_rate(raw.refinance_rate_percent, "refinance_rate_percent", &mut errors);
    let refinance_term = check_term(raw.refinance_term_months, "refinance_term_months", &mut errors);

    if let Some(fees) = &raw.closing_cost_fees {
        for (name, &amount) in fees {
            check_non_negative(amount, &format!("closing_cost_fees.{}", name), &mut errors);
        }
    }
    if let Some(flat) = raw.flat_closing_costs {
        check_non_negative(flat, "flat_closing_costs", &mut errors);
    }

    match (current, refinance_rate, refinance_term) {
        (Some(current), Some(refinance_rate_percent), Some(refinance_term_months)) if errors.is_empty() => {
            Ok(ComparisonInputs {
                current,
                refinance_rate_percent,
                refinance_term_months,
                closing_costs: raw.closing_cost_fees.clone().map(ClosingCosts::DetailedBreakdown),
                flat_closing_costs: raw.flat_closing_costs,
            })
        }
        _ => Err(errors),
    }
}

fn check_loan(raw: &RawLoanInput, errors: &mut ValidationErrors) -> Option<LoanParameters> {
    let principal = check_finite(raw.principal, "principal", errors).and_then(|p| {
        if p > 0. {
            Some(p)
        } else {
            errors.push(ValidationError::NonPositivePrincipal(p));
            None
        }
    });
    let rate = check_rate(raw.annual_rate_percent, "annual_rate_percent", errors);
    let term = check_term(raw.term_months, "term_months", errors);

    let extra_payment = match raw.extra_payment {
        Some(extra) => match check_non_negative(extra, "extra_payment", errors) {
            Some(extra) => {
                if let Some(p) = principal.filter(|&p| extra > p) {
                    errors.push(ValidationError::ExtraPaymentExceedsPrincipal {
                        extra_payment: extra,
                        principal: p,
                    });
                }
                Some(extra)
            }
            None => None,
        },
        None => None,
    };

    Some(LoanParameters {
        principal: principal?,
        annual_rate_percent: rate?,
        term_months: term?,
        extra_payment,
    })
}

fn check_finite(value: f64, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        errors.push(ValidationError::NotFinite {
            field: field.to_string(),
            value,
        });
        None
    }
}

fn check_rate(value: f64, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    let rate = check_finite(value, field, errors)?;
    if (0. ..100.).contains(&rate) {
        Some(rate)
    } else {
        errors.push(ValidationError::RateOutOfRange {
            field: field.to_string(),
            value: rate,
        });
        None
    }
}

fn check_term(value: f64, field: &str, errors: &mut ValidationErrors) -> Option<u32> {
    let term = check_finite(value, field, errors)?;
    if term >= 1. && term.fract() == 0. && term <= MAX_TERM_MONTHS as f64 {
        Some(term as u32)
    } else {
        errors.push(ValidationError::InvalidTerm {
            field: field.to_string(),
            value: term,
            max: MAX_TERM_MONTHS,
        });
        None
    }
}

fn check_non_negative(value: f64, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    let value = check_finite(value, field, errors)?;
    if value < 0. {
        errors.push(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_comparison, validate_loan, RawComparisonInput, RawLoanInput};
    use crate::closing_costs::ClosingCosts;
    use crate::error::ValidationError;
    use crate::loan::LoanParameters;
    use std::collections::BTreeMap;
    use test_log::test;

    fn raw_loan() -> RawLoanInput {
        RawLoanInput {
            principal: 200000.,
            annual_rate_percent: 4.5,
            term_months: 360.,
            extra_payment: Some(10000.),
        }
    }

    #[test]
    fn test_valid_loan() {
        assert_eq!(
            validate_loan(&raw_loan()),
            Ok(LoanParameters::new(200000., 4.5, 360).with_extra_payment(10000.))
        );

        let zero_rate = RawLoanInput {
            annual_rate_percent: 0.,
            extra_payment: None,
            ..raw_loan()
        };
        assert_eq!(validate_loan(&zero_rate), Ok(LoanParameters::new(200000., 0., 360)));
    }

    #[test]
    fn test_collects_every_error() {
        let raw = RawLoanInput {
            principal: -5.,
            annual_rate_percent: 100.,
            term_months: 12.5,
            extra_payment: Some(-1.),
        };
        let errors = validate_loan(&raw).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.0[0], ValidationError::NonPositivePrincipal(-5.));
        assert_eq!(
            errors.0[1],
            ValidationError::RateOutOfRange {
                field: "annual_rate_percent".to_string(),
                value: 100.
            }
        );
        assert_eq!(
            errors.0[2],
            ValidationError::InvalidTerm {
                field: "term_months".to_string(),
                value: 12.5,
                max: 1200
            }
        );
        assert_eq!(
            errors.0[3],
            ValidationError::Negative {
                field: "extra_payment".to_string(),
                value: -1.
            }
        );
        assert!(errors.to_string().starts_with("4 invalid input(s); principal must be"));
    }

    #[test]
    fn test_rejects_non_finite_and_zero_term() {
        let raw = RawLoanInput {
            principal: f64::NAN,
            term_months: 0.,
            ..raw_loan()
        };
        let errors = validate_loan(&raw).unwrap_err();

        assert!(matches!(
            &errors.0[0],
            ValidationError::NotFinite { field, .. } if field == "principal"
        ));
        assert_eq!(
            errors.0[1],
            ValidationError::InvalidTerm {
                field: "term_months".to_string(),
                value: 0.,
                max: 1200
            }
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_term_upper_bound() {
        let longest = RawLoanInput {
            term_months: 1200.,
            ..raw_loan()
        };
        assert_eq!(validate_loan(&longest).map(|loan| loan.term_months), Ok(1200));

        for term_months in [1201., 2_147_483_648., 4_000_000_000.] {
            let raw = RawLoanInput {
                term_months,
                ..raw_loan()
            };
            assert_eq!(
                validate_loan(&raw).unwrap_err().0,
                vec![ValidationError::InvalidTerm {
                    field: "term_months".to_string(),
                    value: term_months,
                    max: 1200
                }]
            );
        }
        assert!(validate_loan(&RawLoanInput {
            term_months: 1201.,
            ..raw_loan()
        })
        .unwrap_err()
        .to_string()
        .contains("term_months must be a whole number of months from 1 to 1200"));
    }

    #[test]
    fn test_extra_payment_above_principal() {
        let raw = RawLoanInput {
            extra_payment: Some(250000.),
            ..raw_loan()
        };
        assert_eq!(
            validate_loan(&raw).unwrap_err().0,
            vec![ValidationError::ExtraPaymentExceedsPrincipal {
                extra_payment: 250000.,
                principal: 200000.
            }]
        );
    }

    #[test]
    fn test_valid_comparison() {
        let fees: BTreeMap<String, f64> = [("appraisal".to_string(), 500.)].into_iter().collect();
        let raw = RawComparisonInput {
            current: raw_loan(),
            refinance_rate_percent: 3.,
            refinance_term_months: 360.,
            closing_cost_fees: Some(fees.clone()),
            flat_closing_costs: None,
        };
        let inputs = validate_comparison(&raw).unwrap();

        assert_eq!(inputs.refinance_term_months, 360);
        assert_eq!(inputs.closing_costs, Some(ClosingCosts::DetailedBreakdown(fees)));
    }

    #[test]
    fn test_comparison_rejects_bad_fees_and_refinance_terms() {
        let fees: BTreeMap<String, f64> = [("title".to_string(), -20.)].into_iter().collect();
        let raw = RawComparisonInput {
            current: raw_loan(),
            refinance_rate_percent: -1.,
            refinance_term_months: 360.,
            closing_cost_fees: Some(fees),
            flat_closing_costs: Some(f64::INFINITY),
        };
        let errors = validate_comparison(&raw).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.0[0],
            ValidationError::RateOutOfRange {
                field: "refinance_rate_percent".to_string(),
                value: -1.
            }
        );
        assert_eq!(
            errors.0[1],
            ValidationError::Negative {
                field: "closing_cost_fees.title".to_string(),
                value: -20.
            }
        );
        assert_eq!(
            errors.0[0].to_string(),
            "refinance_rate_percent must be in [0, 100) percent, got -1"
        );
        assert_eq!(
            errors.0[1].to_string(),
            "closing_cost_fees.title cannot be negative, got -20"
        );
        assert!(matches!(
            &errors.0[2],
            ValidationError::NotFinite { field, .. } if field == "flat_closing_costs"
        ));
    }
}
