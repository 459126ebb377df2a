pub mod csv_backend;

use crate::{errors::LedgerError, ledger::Entry};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends for the entry set. Loads happen
/// once at startup; every mutation is followed by a whole-set save.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Vec<Entry>>;
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

pub use csv_backend::CsvStorage;
