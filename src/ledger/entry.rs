use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// Direction of a ledger entry. Redundant with the amount sign on purpose:
/// display and filtering never have to inspect the number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Applies this kind's sign to an unsigned magnitude.
    pub fn signed(&self, magnitude: f64) -> f64 {
        match self {
            EntryKind::Income => magnitude.abs(),
            EntryKind::Expense => -magnitude.abs(),
        }
    }

    /// True when `amount` carries a sign this kind permits. Zero is a
    /// degenerate but legal amount for either kind.
    pub fn matches_sign(&self, amount: f64) -> bool {
        match self {
            EntryKind::Income => amount >= 0.0,
            EntryKind::Expense => amount <= 0.0,
        }
    }
}

/// Payment state, mutable independently of every other field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryStatus {
    Pending,
    Paid,
}

impl EntryStatus {
    pub fn toggled(&self) -> EntryStatus {
        match self {
            EntryStatus::Pending => EntryStatus::Paid,
            EntryStatus::Paid => EntryStatus::Pending,
        }
    }
}

/// One posted ledger record. Entries are only ever created through the
/// validating constructors, so an `Entry` in memory always has an amount
/// whose sign agrees with its kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub series_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub status: EntryStatus,
}

impl Entry {
    /// Builds a new entry with a fresh id. `amount` is already signed;
    /// construction fails when the sign disagrees with `kind`.
    pub fn new(
        series_id: Uuid,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        status: EntryStatus,
    ) -> Result<Self, LedgerError> {
        Self::from_parts(
            Uuid::new_v4(),
            series_id,
            date,
            description,
            category,
            amount,
            kind,
            status,
        )
    }

    /// Rebuilds an entry with a known id, e.g. when loading from storage.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Uuid,
        series_id: Uuid,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        status: EntryStatus,
    ) -> Result<Self, LedgerError> {
        if !kind.matches_sign(amount) {
            return Err(LedgerError::InvalidRecord(format!(
                "amount {} contradicts kind {:?}",
                amount, kind
            )));
        }
        Ok(Self {
            id,
            series_id,
            date,
            description: description.into(),
            category: category.into(),
            amount,
            kind,
            status,
        })
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, EntryKind::Income)
    }
}
