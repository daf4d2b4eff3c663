//! Current loan vs. refinance vs. recast, side by side.
//!
//! All three outcomes start from the current balance. The refinance keeps
//! that balance at a new rate and term and pays closing costs out of pocket;
//! the recast keeps the current rate and remaining term after a lump-sum
//! curtailment (`current.extra_payment`). Interest savings are measured
//! against continuing the current loan, and cash spent up front is charged
//! with the growth it could have earned over the current loan's remaining
//! term.

use crate::breakeven::{compute_break_even_months, interpret_break_even, BreakEven};
use crate::closing_costs::{resolve_closing_costs, ClosingCosts, ResolvedClosingCosts};
use crate::config::AnalysisConfig;
use crate::interest::compute_total_interest;
use crate::loan::{round, LoanParameters};
use crate::opportunity::opportunity_cost;
use crate::payment::{compute_monthly_payment, compute_recast_payment};
use crate::schedule::{generate_amortization_schedule, AmortizationSchedule};
use log::{info, warn};
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonInputs {
    pub current: LoanParameters,
    pub refinance_rate_percent: f64,
    pub refinance_term_months: u32,
    pub closing_costs: Option<ClosingCosts>,
    /// Used when `closing_costs` is absent or resolves to nothing.
    pub flat_closing_costs: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Current,
    Refinance,
    Recast,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Current => "current loan",
            Variant::Refinance => "refinance",
            Variant::Recast => "recast",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanOutcome {
    pub variant: Variant,
    pub loan: LoanParameters, // principal after any curtailment
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub schedule: AmortizationSchedule,
}

impl LoanOutcome {
    fn new(variant: Variant, loan: LoanParameters, monthly_payment: f64) -> Self {
        let schedule = generate_amortization_schedule(
            loan.principal,
            loan.annual_rate_percent,
            loan.term_months,
            monthly_payment,
        );
        let total_interest = compute_total_interest(
            loan.principal,
            loan.annual_rate_percent,
            loan.term_months,
            monthly_payment,
        );
        Self {
            variant,
            loan,
            monthly_payment,
            total_interest,
            total_paid: schedule.total_paid(),
            schedule,
        }
    }

    pub fn did_not_fully_amortize(&self) -> bool {
        self.schedule.did_not_fully_amortize
    }

    pub fn months_to_payoff(&self) -> usize {
        self.schedule.len()
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativeAnalysis {
    pub monthly_savings: f64,
    pub interest_saved: f64,
    pub upfront_cost: f64,
    pub opportunity_cost: f64,
    /// `interest_saved - upfront_cost - opportunity_cost`.
    pub net_benefit: f64,
}

impl AlternativeAnalysis {
    fn new(current: &LoanOutcome, alternative: &LoanOutcome, upfront_cost: f64, forgone_growth: f64) -> Self {
        let interest_saved = current.total_interest - alternative.total_interest;
        Self {
            monthly_savings: current.monthly_payment - alternative.monthly_payment,
            interest_saved,
            upfront_cost,
            opportunity_cost: forgone_growth,
            net_benefit: interest_saved - upfront_cost - forgone_growth,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub current: LoanOutcome,
    pub refinance: LoanOutcome,
    pub recast: LoanOutcome,
    pub closing_costs: ResolvedClosingCosts,
    pub break_even_months: f64, // raw, see `break_even`
    pub break_even: BreakEven,
    pub refinance_analysis: AlternativeAnalysis,
    pub recast_analysis: AlternativeAnalysis,
}

impl Comparison {
    pub fn outcomes(&self) -> [&LoanOutcome; 3] {
        [&self.current, &self.refinance, &self.recast]
    }

    /// The alternative with the larger positive net benefit, or `Current`
    /// when neither beats staying put.
    pub fn best_option(&self) -> Variant {
        let refinance = self.refinance_analysis.net_benefit;
        let recast = self.recast_analysis.net_benefit;
        if refinance <= 0. && recast <= 0. {
            Variant::Current
        } else if refinance >= recast {
            Variant::Refinance
        } else {
            Variant::Recast
        }
    }
}

pub fn compare_options(inputs: &ComparisonInputs, config: &AnalysisConfig) -> Comparison {
    let current_loan = LoanParameters {
        extra_payment: None,
        ..inputs.current
    };
    let current = LoanOutcome::new(Variant::Current, current_loan, current_loan.monthly_payment());

    let refinance_loan = LoanParameters::new(
        inputs.current.principal,
        inputs.refinance_rate_percent,
        inputs.refinance_term_months,
    );
    let refinance_payment = compute_monthly_payment(
        refinance_loan.principal,
        refinance_loan.annual_rate_percent,
        refinance_loan.term_months,
    );
    let refinance = LoanOutcome::new(Variant::Refinance, refinance_loan, refinance_payment);

    let lump_sum = inputs.current.extra_payment.unwrap_or(0.);
    let recast_payment = compute_recast_payment(
        inputs.current.principal,
        inputs.current.annual_rate_percent,
        inputs.current.term_months,
        inputs.current.extra_payment,
    );
    let recast_loan = LoanParameters {
        principal: inputs.current.principal - lump_sum,
        ..current_loan
    };
    let recast = LoanOutcome::new(Variant::Recast, recast_loan, recast_payment);

    let closing_costs = resolve_closing_costs(
        inputs.closing_costs.as_ref(),
        inputs.flat_closing_costs,
        inputs.current.principal,
        config.default_closing_cost_percent,
    );
    let break_even_months =
        compute_break_even_months(closing_costs.amount, current.monthly_payment, refinance.monthly_payment);
    let break_even = interpret_break_even(
        break_even_months,
        current.monthly_payment - refinance.monthly_payment,
    );

    let horizon = inputs.current.term_months;
    let refinance_analysis = AlternativeAnalysis::new(
        &current,
        &refinance,
        closing_costs.amount,
        opportunity_cost(closing_costs.amount, config.opportunity_return_percent, horizon),
    );
    let recast_analysis = AlternativeAnalysis::new(
        &current,
        &recast,
        lump_sum,
        opportunity_cost(lump_sum, config.opportunity_return_percent, horizon),
    );

    for outcome in [&current, &refinance, &recast] {
        if outcome.did_not_fully_amortize() {
            warn!("{} payment does not retire the balance within its term", outcome.variant);
        }
    }

    let dec = config.display_dec_places;
    info!(
        "payments: current {}, refinance {}, recast {}; refinance {}",
        round(current.monthly_payment, dec),
        round(refinance.monthly_payment, dec),
        round(recast.monthly_payment, dec),
        break_even
    );

    Comparison {
        current,
        refinance,
        recast,
        closing_costs,
        break_even_months,
        break_even,
        refinance_analysis,
        recast_analysis,
    }
}
