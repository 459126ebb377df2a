use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::Entry;

/// Which subset of a series a deletion request targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EraseScope {
    /// Only the targeted entry.
    Single,
    /// Every entry of the target's series dated on or after the target.
    ThisAndFuture,
    /// Every entry of the target's series.
    WholeSeries,
}

/// The in-memory entry set, the sole source of truth between persists.
/// Always passed explicitly into service calls; nothing in the crate holds
/// ledger state as a global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entry_mut(&mut self, id: Uuid) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn extend(&mut self, entries: Vec<Entry>) {
        self.entries.extend(entries);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Removes the subset of the target's series selected by `scope` and
    /// returns how many entries were dropped. A missing target removes
    /// nothing, so repeated calls are no-ops.
    pub fn erase_scoped(&mut self, target_id: Uuid, scope: EraseScope) -> usize {
        let Some(target) = self.entry(target_id).cloned() else {
            return 0;
        };
        let before = self.entries.len();
        match scope {
            EraseScope::Single => {
                self.entries.retain(|entry| entry.id != target.id);
            }
            EraseScope::ThisAndFuture => {
                self.entries.retain(|entry| {
                    entry.series_id != target.series_id || entry.date < target.date
                });
            }
            EraseScope::WholeSeries => {
                self.entries.retain(|entry| entry.series_id != target.series_id);
            }
        }
        before - self.entries.len()
    }
}
