//! Amortization engine for comparing a mortgage against refinancing it or
//! recasting it after a lump-sum payment.
//!
//! The calculators are plain functions over `f64` that trust their inputs;
//! `validation` is the place to reject bad numbers before calling them.

pub mod amortizer;
pub mod breakeven;
pub mod closing_costs;
pub mod comparison;
pub mod config;
pub mod error;
pub mod interest;
pub mod loan;
pub mod opportunity;
pub mod payment;
pub mod schedule;
pub mod validation;

pub use breakeven::{compute_break_even_months, interpret_break_even, BreakEven};
pub use closing_costs::{resolve_closing_costs, ClosingCosts, CostSource, ResolvedClosingCosts};
pub use comparison::{compare_options, Comparison, ComparisonInputs, LoanOutcome, Variant};
pub use config::AnalysisConfig;
pub use error::{DateError, ValidationError, ValidationErrors};
pub use interest::{accumulate_interest, compute_total_interest, InterestSummary};
pub use loan::LoanParameters;
pub use payment::{compute_monthly_payment, compute_recast_payment};
pub use schedule::{generate_amortization_schedule, AmortizationSchedule, DatedEntry, ScheduleEntry};
pub use validation::{validate_comparison, validate_loan, RawComparisonInput, RawLoanInput};
