use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::EntryKind;

/// How a submitted intent expands into entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recurrence {
    /// One entry on the base date.
    Single,
    /// `count` entries one month apart, the amount split evenly across them.
    Installment { count: u32 },
    /// A fixed number of monthly entries, each for the full amount.
    FixedMonthly,
}

/// A user-submitted transaction before expansion. `amount` is an unsigned
/// magnitude; the sign is applied from `kind` during expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryIntent {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub recurrence: Recurrence,
}

impl EntryIntent {
    pub fn single(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        kind: EntryKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            kind,
            date,
            recurrence: Recurrence::Single,
        }
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }
}
