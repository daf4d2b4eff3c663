use crate::amortizer::Amortizer;
use crate::error::DateError;
use crate::loan::round;
use chrono::{Months, NaiveDate};
use log::warn;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    pub month: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64, // floored at 0
}

impl ScheduleEntry {
    pub fn new(
        month: u32,
        payment: f64,
        principal_portion: f64,
        interest_portion: f64,
        remaining_balance: f64,
    ) -> Self {
        Self {
            month,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance,
        }
    }

    /// Copy with every money figure rounded to `dec_places`.
    pub fn rounded(&self, dec_places: u32) -> Self {
        Self {
            month: self.month,
            payment: round(self.payment, dec_places),
            principal_portion: round(self.principal_portion, dec_places),
            interest_portion: round(self.interest_portion, dec_places),
            remaining_balance: round(self.remaining_balance, dec_places),
        }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, payment ${:.2}, principal paid ${:.2}, interest paid ${:.2}, ending balance ${:.2}",
            self.month,
            self.payment,
            self.principal_portion,
            self.interest_portion,
            self.remaining_balance
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatedEntry {
    pub due_date: NaiveDate,
    pub entry: ScheduleEntry,
}

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationSchedule {
    pub entries: Vec<ScheduleEntry>,
    /// Set when the payment left more than half a cent owed at the end of
    /// the term.
    pub did_not_fully_amortize: bool,
}

impl AmortizationSchedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }

    pub fn total_interest(&self) -> f64 {
        self.entries.iter().map(|e| e.interest_portion).sum()
    }

    pub fn total_principal(&self) -> f64 {
        self.entries.iter().map(|e| e.principal_portion).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.entries.iter().map(|e| e.payment).sum()
    }

    /// The first `months` entries, or the whole schedule if it is shorter.
    pub fn truncated(&self, months: usize) -> &[ScheduleEntry] {
        &self.entries[..months.min(self.entries.len())]
    }

    /// Pairs each entry with its due date, one calendar month apart starting
    /// at `first_pmt_date`. Day-of-month is clamped to the end of shorter
    /// months, always counted from the first date so a 31st stays a 31st.
    pub fn dated(&self, first_pmt_date: NaiveDate) -> Result<Vec<DatedEntry>, DateError> {
        self.entries
            .iter()
            .map(|entry| {
                let offset = entry.month.saturating_sub(1);
                first_pmt_date
                    .checked_add_months(Months::new(offset))
                    .map(|due_date| DatedEntry {
                        due_date,
                        entry: *entry,
                    })
                    .ok_or(DateError::OutOfRange {
                        start: first_pmt_date,
                        month: entry.month,
                    })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for AmortizationSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Month-by-month ledger for a fixed `payment`. Ends after the first month
/// that retires the balance, or at `term_months`.
pub fn generate_amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    payment: f64,
) -> AmortizationSchedule {
    let mut amortizer = Amortizer::new(principal, annual_rate_percent, term_months, payment);
    let mut entries = Vec::new();

    for period in amortizer.by_ref() {
        entries.push(ScheduleEntry::new(
            period.month,
            payment,
            period.principal,
            period.interest,
            period.end_balance.max(0.),
        ));
    }

    let did_not_fully_amortize = amortizer.fell_short();
    if did_not_fully_amortize {
        warn!(
            "schedule for ${} at {}% ends at month {} with {} still owed",
            principal,
            annual_rate_percent,
            term_months,
            amortizer.balance()
        );
    }

    AmortizationSchedule {
        entries,
        did_not_fully_amortize,
    }
}
