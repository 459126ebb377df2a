//! Ledger domain models, calendar helpers, and the in-memory entry set.

pub mod calendar;
pub mod entry;
pub mod intent;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{Entry, EntryKind, EntryStatus};
pub use intent::{EntryIntent, Recurrence};
pub use ledger::{EraseScope, Ledger};
