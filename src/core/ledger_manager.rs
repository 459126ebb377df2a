//! Facade that coordinates ledger state, services, and persistence.
//!
//! Mutations follow the mutate-then-persist cycle: the in-memory set is the
//! source of truth and every successful mutation is immediately followed by
//! a whole-set save. Storage failures propagate to the caller unmodified.

use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{
    EntryService, MonthSummary, SeriesService, ServiceResult, SummaryService,
};
use crate::errors::LedgerError;
use crate::ledger::{Entry, EntryIntent, EntryStatus, EraseScope, Ledger};
use crate::storage::StorageBackend;

pub struct LedgerManager {
    ledger: Ledger,
    config: Config,
    storage: Box<dyn StorageBackend>,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn StorageBackend>, config: Config) -> Self {
        Self {
            ledger: Ledger::new(),
            config,
            storage,
        }
    }

    /// Replaces the in-memory set with the stored one. Called once at
    /// startup, before any mutation.
    pub fn load(&mut self) -> Result<(), LedgerError> {
        self.ledger = Ledger::from_entries(self.storage.load()?);
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Expands the intent, appends the resulting series, and persists.
    pub fn add_intent(&mut self, intent: &EntryIntent) -> ServiceResult<Vec<Entry>> {
        let created =
            SeriesService::expand(&mut self.ledger, intent, self.config.fixed_monthly_count)?;
        self.persist()?;
        Ok(created)
    }

    /// Erases the scoped subset of the target's series and persists the
    /// resulting set, even when the target was already gone and nothing
    /// changed. A missing target removes nothing but still reports success.
    pub fn erase(&mut self, target_id: Uuid, scope: EraseScope) -> ServiceResult<usize> {
        let removed = SeriesService::erase(&mut self.ledger, target_id, scope)?;
        self.persist()?;
        Ok(removed)
    }

    /// Flips the entry's payment status and persists. Unknown ids are a
    /// silent no-op with nothing written.
    pub fn toggle_status(&mut self, id: Uuid) -> ServiceResult<Option<EntryStatus>> {
        match EntryService::toggle_status(&mut self.ledger, id) {
            Some(status) => {
                self.persist()?;
                Ok(Some(status))
            }
            None => Ok(None),
        }
    }

    /// Edits one entry's user-visible fields and persists.
    pub fn update_entry<F>(&mut self, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Entry),
    {
        EntryService::update(&mut self.ledger, id, mutator)?;
        self.persist()?;
        Ok(())
    }

    pub fn month_summary(&self, year: i32, month: u32) -> MonthSummary {
        SummaryService::month(&self.ledger, year, month)
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.storage.save(&self.ledger.entries)
    }
}
