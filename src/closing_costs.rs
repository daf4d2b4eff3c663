use log::debug;
use std::collections::BTreeMap;

/// How a borrower described the cost of refinancing.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosingCosts {
    FlatEstimate(f64),
    DetailedBreakdown(BTreeMap<String, f64>),
}

impl ClosingCosts {
    pub fn total(&self) -> f64 {
        match self {
            ClosingCosts::FlatEstimate(amount) => *amount,
            ClosingCosts::DetailedBreakdown(fees) => fees.values().sum(),
        }
    }

    pub fn source(&self) -> CostSource {
        match self {
            ClosingCosts::FlatEstimate(_) => CostSource::Flat,
            ClosingCosts::DetailedBreakdown(_) => CostSource::Detailed,
        }
    }

    /// The figure this choice stands for, if it names a positive amount.
    pub fn resolve(&self) -> Option<ResolvedClosingCosts> {
        let amount = self.total();
        (amount > 0.).then_some(ResolvedClosingCosts {
            amount,
            source: self.source(),
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostSource {
    Detailed,
    Flat,
    DefaultPercent,
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedClosingCosts {
    pub amount: f64,
    pub source: CostSource,
}

/// Picks the closing-cost figure to use.
///
/// `costs` is what the borrower chose to enter; its variant decides the
/// source. If it resolves to nothing positive, a positive `flat_fallback`
/// is used, then `default_percent` of `principal`.
pub fn resolve_closing_costs(
    costs: Option<&ClosingCosts>,
    flat_fallback: Option<f64>,
    principal: f64,
    default_percent: f64,
) -> ResolvedClosingCosts {
    let resolved = costs
        .and_then(ClosingCosts::resolve)
        .or_else(|| flat_fallback.and_then(|amount| ClosingCosts::FlatEstimate(amount).resolve()))
        .unwrap_or(ResolvedClosingCosts {
            amount: principal * default_percent / 100.,
            source: CostSource::DefaultPercent,
        });
    debug!("closing costs {} from {:?}", resolved.amount, resolved.source);
    resolved
}
