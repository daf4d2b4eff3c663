/// Assumptions applied across a comparison that the borrower does not enter
/// per loan.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Closing costs as a percentage of principal when none were given.
    pub default_closing_cost_percent: f64,
    /// Annual return cash could have earned if not spent on the loan.
    pub opportunity_return_percent: f64,
    pub display_dec_places: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_closing_cost_percent: 3.,
            opportunity_return_percent: 5.,
            display_dec_places: 2,
        }
    }
}

impl AnalysisConfig {
    pub fn with_default_closing_cost_percent(mut self, percent: f64) -> Self {
        self.default_closing_cost_percent = percent;
        self
    }

    pub fn with_opportunity_return_percent(mut self, percent: f64) -> Self {
        self.opportunity_return_percent = percent;
        self
    }

    pub fn with_display_dec_places(mut self, dec_places: u32) -> Self {
        self.display_dec_places = dec_places;
        self
    }
}
