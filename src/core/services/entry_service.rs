//! Single-entry mutations: payment status and field edits.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::LedgerError;
use crate::ledger::{Entry, EntryStatus, Ledger};

pub struct EntryService;

impl EntryService {
    /// Flips the entry's status between Pending and Paid, returning the new
    /// value. An unknown id is a silent no-op; toggles always originate from
    /// a view of an existing entry.
    pub fn toggle_status(ledger: &mut Ledger, id: Uuid) -> Option<EntryStatus> {
        let entry = ledger.entry_mut(id)?;
        entry.status = entry.status.toggled();
        tracing::debug!(entry = %id, status = ?entry.status, "toggled payment status");
        Some(entry.status)
    }

    /// Edits one entry via the provided mutator. `id` and `series_id` stay
    /// as they were no matter what the mutator did, and the amount sign must
    /// still agree with the kind afterwards. The mutator runs against a
    /// draft; a rejected edit leaves the ledger exactly as it was.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Entry),
    {
        let entry = ledger
            .entry_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Entry not found".into()))?;
        let mut draft = entry.clone();
        mutator(&mut draft);
        draft.id = entry.id;
        draft.series_id = entry.series_id;
        if !draft.kind.matches_sign(draft.amount) {
            return Err(ServiceError::Ledger(LedgerError::InvalidRecord(format!(
                "amount {} contradicts kind {:?}",
                draft.amount, draft.kind
            ))));
        }
        *entry = draft;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Entry, EntryKind};
    use chrono::NaiveDate;

    fn ledger_with_entry() -> (Ledger, Uuid) {
        let entry = Entry::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "Academia",
            "Saúde",
            -90.0,
            EntryKind::Expense,
            EntryStatus::Pending,
        )
        .unwrap();
        let id = entry.id;
        (Ledger::from_entries(vec![entry]), id)
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        let (mut ledger, id) = ledger_with_entry();
        assert_eq!(EntryService::toggle_status(&mut ledger, id), Some(EntryStatus::Paid));
        assert_eq!(
            EntryService::toggle_status(&mut ledger, id),
            Some(EntryStatus::Pending)
        );
    }

    #[test]
    fn toggle_unknown_id_is_silent() {
        let (mut ledger, _) = ledger_with_entry();
        assert_eq!(EntryService::toggle_status(&mut ledger, Uuid::new_v4()), None);
        assert_eq!(ledger.entries[0].status, EntryStatus::Pending);
    }

    #[test]
    fn update_preserves_identity_fields() {
        let (mut ledger, id) = ledger_with_entry();
        let original_series = ledger.entries[0].series_id;
        EntryService::update(&mut ledger, id, |entry| {
            entry.description = "Academia anual".into();
            entry.series_id = Uuid::new_v4();
            entry.id = Uuid::new_v4();
        })
        .unwrap();

        let entry = ledger.entry(id).expect("entry keeps its id");
        assert_eq!(entry.description, "Academia anual");
        assert_eq!(entry.series_id, original_series);
    }

    #[test]
    fn update_rejects_sign_mismatch() {
        let (mut ledger, id) = ledger_with_entry();
        let err = EntryService::update(&mut ledger, id, |entry| {
            entry.amount = 90.0;
        })
        .expect_err("positive expense must fail");
        assert!(matches!(
            err,
            ServiceError::Ledger(LedgerError::InvalidRecord(_))
        ));
    }

    #[test]
    fn rejected_update_leaves_the_entry_unchanged() {
        let (mut ledger, id) = ledger_with_entry();
        let before = ledger.entry(id).cloned().unwrap();

        EntryService::update(&mut ledger, id, |entry| {
            entry.amount = 90.0;
            entry.description = "Academia estornada".into();
        })
        .expect_err("positive expense must fail");

        let after = ledger.entry(id).unwrap();
        assert_eq!(*after, before, "a rejected edit must not alter the ledger");
        assert!(after.kind.matches_sign(after.amount));
    }

    #[test]
    fn update_fails_for_missing_entry() {
        let (mut ledger, _) = ledger_with_entry();
        let err = EntryService::update(&mut ledger, Uuid::new_v4(), |_| {})
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("not found")));
    }
}
