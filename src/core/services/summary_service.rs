//! Per-month filtering and totals.

use chrono::Datelike;
use serde::Serialize;

use crate::ledger::{Entry, Ledger};

/// Everything a month view needs: the ordered entries plus the three totals.
/// `expense_total` is already negative, so `net` is a plain sum.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub entries: Vec<Entry>,
    pub income_total: f64,
    pub expense_total: f64,
    pub net: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Filters the ledger to one calendar month and sums it. Entries come
    /// back newest first (stable order), the way the month view lists them.
    /// A month with no entries yields zero totals and an empty list.
    pub fn month(ledger: &Ledger, year: i32, month: u32) -> MonthSummary {
        let mut entries: Vec<Entry> = ledger
            .entries
            .iter()
            .filter(|entry| entry.date.year() == year && entry.date.month() == month)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        let income_total: f64 = entries
            .iter()
            .map(|entry| entry.amount)
            .filter(|amount| *amount > 0.0)
            .sum();
        let expense_total: f64 = entries
            .iter()
            .map(|entry| entry.amount)
            .filter(|amount| *amount < 0.0)
            .sum();

        MonthSummary {
            year,
            month,
            entries,
            income_total,
            expense_total,
            net: income_total + expense_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Entry, EntryKind, EntryStatus};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn entry(date: NaiveDate, amount: f64) -> Entry {
        let kind = if amount >= 0.0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        Entry::new(
            Uuid::new_v4(),
            date,
            "Lançamento",
            "Outros",
            amount,
            kind,
            EntryStatus::Pending,
        )
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn totals_sum_by_sign() {
        let ledger = Ledger::from_entries(vec![
            entry(date(2024, 4, 5), 1000.0),
            entry(date(2024, 4, 10), -300.0),
            entry(date(2024, 4, 20), -200.0),
        ]);
        let summary = SummaryService::month(&ledger, 2024, 4);

        assert_eq!(summary.entries.len(), 3);
        assert_eq!(summary.income_total, 1000.0);
        assert_eq!(summary.expense_total, -500.0);
        assert_eq!(summary.net, 500.0);
    }

    #[test]
    fn filter_requires_year_and_month_to_match() {
        let ledger = Ledger::from_entries(vec![
            entry(date(2024, 4, 5), 100.0),
            entry(date(2023, 4, 5), 100.0),
            entry(date(2024, 5, 5), 100.0),
        ]);
        let summary = SummaryService::month(&ledger, 2024, 4);
        assert_eq!(summary.entries.len(), 1);
        assert_eq!(summary.income_total, 100.0);
    }

    #[test]
    fn entries_are_sorted_newest_first() {
        let ledger = Ledger::from_entries(vec![
            entry(date(2024, 4, 5), 10.0),
            entry(date(2024, 4, 25), 20.0),
            entry(date(2024, 4, 15), 30.0),
        ]);
        let summary = SummaryService::month(&ledger, 2024, 4);
        let days: Vec<u32> = summary.entries.iter().map(|e| e.date.day()).collect();
        assert_eq!(days, vec![25, 15, 5]);
    }

    #[test]
    fn same_day_entries_keep_insertion_order() {
        let first = entry(date(2024, 4, 5), 10.0);
        let second = entry(date(2024, 4, 5), 20.0);
        let ids = (first.id, second.id);
        let ledger = Ledger::from_entries(vec![first, second]);
        let summary = SummaryService::month(&ledger, 2024, 4);
        assert_eq!(summary.entries[0].id, ids.0);
        assert_eq!(summary.entries[1].id, ids.1);
    }

    #[test]
    fn empty_month_yields_zero_totals() {
        let ledger = Ledger::from_entries(vec![entry(date(2024, 4, 5), 100.0)]);
        let summary = SummaryService::month(&ledger, 2024, 7);
        assert!(summary.entries.is_empty());
        assert_eq!(summary.income_total, 0.0);
        assert_eq!(summary.expense_total, 0.0);
        assert_eq!(summary.net, 0.0);
    }
}
