//! Expansion of transaction intents into entry series, and scoped erasure.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::calendar::add_months;
use crate::ledger::{Entry, EntryIntent, EntryStatus, EraseScope, Ledger, Recurrence};

/// Turns one intent into one or many dated entries sharing a series id, and
/// removes series subsets on request.
pub struct SeriesService;

impl SeriesService {
    /// Expands `intent` into entries appended to `ledger` and returns the
    /// created set for inspection. Every entry shares one fresh series id;
    /// entry `i` lands `i` calendar months after the base date, the day
    /// clamped to the target month's length.
    ///
    /// Installment amounts are the plain even division `amount / count`.
    /// The division can lose a fractional unit over the whole series
    /// (100 / 3 stores 33.33.. three times); no remainder is reassigned,
    /// matching the long-standing behavior users reconcile against.
    pub fn expand(
        ledger: &mut Ledger,
        intent: &EntryIntent,
        fixed_monthly_count: u32,
    ) -> ServiceResult<Vec<Entry>> {
        if intent.description.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Description must not be empty".into(),
            ));
        }

        let count = match intent.recurrence {
            Recurrence::Single => 1,
            Recurrence::Installment { count } => {
                if count < 2 {
                    return Err(ServiceError::Invalid(
                        "Installment series need at least 2 installments".into(),
                    ));
                }
                count
            }
            Recurrence::FixedMonthly => fixed_monthly_count.max(1),
        };

        let magnitude = match intent.recurrence {
            Recurrence::Installment { .. } => intent.amount / count as f64,
            _ => intent.amount,
        };
        let amount = intent.kind.signed(magnitude);

        let series_id = Uuid::new_v4();
        let mut created = Vec::with_capacity(count as usize);
        for i in 0..count {
            let description = match intent.recurrence {
                Recurrence::Installment { .. } => {
                    format!("{} ({}/{})", intent.description, i + 1, count)
                }
                _ => intent.description.clone(),
            };
            let entry = Entry::new(
                series_id,
                add_months(intent.date, i as i32),
                description,
                intent.category.clone(),
                amount,
                intent.kind,
                EntryStatus::Pending,
            )?;
            created.push(entry);
        }

        tracing::info!(
            series = %series_id,
            entries = created.len(),
            "expanded intent into entry series"
        );
        ledger.extend(created.clone());
        Ok(created)
    }

    /// Removes the scope-selected subset of the target's series. Unknown
    /// targets remove nothing, so a repeated erase is a benign no-op.
    pub fn erase(ledger: &mut Ledger, target_id: Uuid, scope: EraseScope) -> ServiceResult<usize> {
        let removed = ledger.erase_scoped(target_id, scope);
        if removed > 0 {
            tracing::info!(target = %target_id, ?scope, removed, "erased series subset");
        } else {
            tracing::debug!(target = %target_id, ?scope, "erase target not found");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn installment_intent(amount: f64, count: u32) -> EntryIntent {
        EntryIntent::single("Notebook", amount, "Outros", EntryKind::Expense, date(2024, 1, 15))
            .with_recurrence(Recurrence::Installment { count })
    }

    #[test]
    fn single_intent_creates_one_pending_entry() {
        let mut ledger = Ledger::new();
        let intent =
            EntryIntent::single("Salário", 3500.0, "Salário", EntryKind::Income, date(2024, 3, 5));
        let created = SeriesService::expand(&mut ledger, &intent, 12).unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].amount, 3500.0);
        assert_eq!(created[0].description, "Salário");
        assert_eq!(created[0].status, EntryStatus::Pending);
        assert_eq!(ledger.entry_count(), 1);
    }

    #[test]
    fn empty_description_is_rejected_and_ledger_untouched() {
        let mut ledger = Ledger::new();
        let intent =
            EntryIntent::single("   ", 10.0, "Outros", EntryKind::Expense, date(2024, 3, 5));
        let err = SeriesService::expand(&mut ledger, &intent, 12)
            .expect_err("blank description must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert_eq!(ledger.entry_count(), 0);
    }

    #[test]
    fn zero_amount_is_accepted() {
        let mut ledger = Ledger::new();
        let intent =
            EntryIntent::single("Brinde", 0.0, "Extra", EntryKind::Income, date(2024, 3, 5));
        let created = SeriesService::expand(&mut ledger, &intent, 12).unwrap();
        assert_eq!(created[0].amount, 0.0);
    }

    #[test]
    fn installment_count_below_two_is_rejected() {
        let mut ledger = Ledger::new();
        let err = SeriesService::expand(&mut ledger, &installment_intent(100.0, 1), 12)
            .expect_err("single installment must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn installments_share_series_and_carry_ordinal_suffixes() {
        let mut ledger = Ledger::new();
        let created = SeriesService::expand(&mut ledger, &installment_intent(600.0, 6), 12).unwrap();

        assert_eq!(created.len(), 6);
        let series_id = created[0].series_id;
        assert!(created.iter().all(|entry| entry.series_id == series_id));
        assert_eq!(created[1].description, "Notebook (2/6)");
        assert_eq!(created[5].description, "Notebook (6/6)");
        for (i, entry) in created.iter().enumerate() {
            assert_eq!(entry.date, date(2024, 1 + i as u32, 15));
            assert_eq!(entry.amount, -100.0);
        }
    }

    #[test]
    fn installment_amounts_sum_to_the_intent_amount() {
        // Even division leaves the rounding gap uncorrected; the sum only
        // matches up to float precision (100/3 stored three times).
        let mut ledger = Ledger::new();
        let created = SeriesService::expand(&mut ledger, &installment_intent(100.0, 3), 12).unwrap();
        let total: f64 = created.iter().map(|entry| entry.amount).sum();
        assert!((total - (-100.0)).abs() < 1e-6, "sum was {total}");
    }

    #[test]
    fn distinct_expansions_get_distinct_series_ids() {
        let mut ledger = Ledger::new();
        let a = SeriesService::expand(&mut ledger, &installment_intent(100.0, 2), 12).unwrap();
        let b = SeriesService::expand(&mut ledger, &installment_intent(100.0, 2), 12).unwrap();
        assert_ne!(a[0].series_id, b[0].series_id);
    }

    #[test]
    fn fixed_monthly_repeats_full_amount_without_suffix() {
        let mut ledger = Ledger::new();
        let intent =
            EntryIntent::single("Aluguel", 1200.0, "Moradia", EntryKind::Expense, date(2024, 1, 10))
                .with_recurrence(Recurrence::FixedMonthly);
        let created = SeriesService::expand(&mut ledger, &intent, 12).unwrap();

        assert_eq!(created.len(), 12);
        assert!(created.iter().all(|entry| entry.amount == -1200.0));
        assert!(created.iter().all(|entry| entry.description == "Aluguel"));
        assert_eq!(created[11].date, date(2024, 12, 10));
    }

    #[test]
    fn month_end_dates_clamp_to_short_months() {
        let mut ledger = Ledger::new();
        let intent =
            EntryIntent::single("Seguro", 300.0, "Carro", EntryKind::Expense, date(2024, 1, 31))
                .with_recurrence(Recurrence::Installment { count: 3 });
        let created = SeriesService::expand(&mut ledger, &intent, 12).unwrap();

        assert_eq!(created[0].date, date(2024, 1, 31));
        assert_eq!(created[1].date, date(2024, 2, 29));
        assert_eq!(created[2].date, date(2024, 3, 31));
    }

    #[test]
    fn scoped_erase_matrix_on_a_six_entry_series() {
        let expand = |ledger: &mut Ledger| {
            SeriesService::expand(ledger, &installment_intent(600.0, 6), 12).unwrap()
        };

        // ThisAndFuture anchored at the third installment keeps months 1-2.
        let mut ledger = Ledger::new();
        let created = expand(&mut ledger);
        let removed =
            SeriesService::erase(&mut ledger, created[2].id, EraseScope::ThisAndFuture).unwrap();
        assert_eq!(removed, 4);
        assert_eq!(ledger.entry_count(), 2);
        assert!(ledger.entries.iter().all(|entry| entry.date < created[2].date));

        // WholeSeries removes all six regardless of the anchor's position.
        let mut ledger = Ledger::new();
        let created = expand(&mut ledger);
        let removed =
            SeriesService::erase(&mut ledger, created[4].id, EraseScope::WholeSeries).unwrap();
        assert_eq!(removed, 6);
        assert_eq!(ledger.entry_count(), 0);

        // Single removes exactly the anchor.
        let mut ledger = Ledger::new();
        let created = expand(&mut ledger);
        let removed = SeriesService::erase(&mut ledger, created[2].id, EraseScope::Single).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(ledger.entry_count(), 5);
        assert!(ledger.entry(created[2].id).is_none());
    }

    #[test]
    fn erase_is_idempotent() {
        let mut ledger = Ledger::new();
        let created = SeriesService::expand(&mut ledger, &installment_intent(600.0, 6), 12).unwrap();

        let first = SeriesService::erase(&mut ledger, created[0].id, EraseScope::Single).unwrap();
        let second = SeriesService::erase(&mut ledger, created[0].id, EraseScope::Single).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(ledger.entry_count(), 5);
    }

    #[test]
    fn erase_only_touches_the_target_series() {
        let mut ledger = Ledger::new();
        let victim = SeriesService::expand(&mut ledger, &installment_intent(600.0, 6), 12).unwrap();
        SeriesService::expand(&mut ledger, &installment_intent(300.0, 3), 12).unwrap();

        SeriesService::erase(&mut ledger, victim[0].id, EraseScope::WholeSeries).unwrap();
        assert_eq!(ledger.entry_count(), 3);
    }
}
