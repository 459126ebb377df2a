//! Flat CSV record store, one row per entry.
//!
//! The column layout and the enum vocabulary (`Receita`/`Despesa`,
//! `Pendente`/`Pago`) are a compatibility contract with existing data
//! files and must not change.

use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Entry, EntryKind, EntryStatus};

use super::{Result, StorageBackend};

const HEADERS: [&str; 8] = [
    "ID",
    "SeriesID",
    "Data",
    "Descrição",
    "Categoria",
    "Valor",
    "Tipo",
    "Status",
];
const DATE_FORMAT: &str = "%Y-%m-%d";
const KIND_INCOME: &str = "Receita";
const KIND_EXPENSE: &str = "Despesa";
const STATUS_PENDING: &str = "Pendente";
const STATUS_PAID: &str = "Pago";

/// Whole-file CSV persistence. Saves stage to `<path>.tmp` and rename, so a
/// failed write never corrupts the existing file.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Where saves stage their data before the rename onto `path`.
    pub fn staging_path(&self) -> PathBuf {
        tmp_path(&self.path)
    }
}

impl StorageBackend for CsvStorage {
    /// Reads the full entry set. A missing file is an empty ledger, not an
    /// error; a malformed row is.
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(&self.path)?;
        let mut entries = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            entries.push(parse_record(&record).map_err(|err| {
                LedgerError::InvalidRecord(format!("row {}: {}", row + 2, err))
            })?);
        }
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "loaded ledger");
        Ok(entries)
    }

    /// Writes the full entry set, header row included even when empty.
    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = tmp_path(&self.path);
        {
            let mut writer = WriterBuilder::new().has_headers(false).from_path(&tmp)?;
            writer.write_record(HEADERS)?;
            for entry in entries {
                writer.write_record([
                    entry.id.to_string(),
                    entry.series_id.to_string(),
                    entry.date.format(DATE_FORMAT).to_string(),
                    entry.description.clone(),
                    entry.category.clone(),
                    entry.amount.to_string(),
                    kind_label(entry.kind).to_string(),
                    status_label(entry.status).to_string(),
                ])?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "saved ledger");
        Ok(())
    }
}

fn tmp_path(path: &PathBuf) -> PathBuf {
    let mut tmp = path.clone();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => KIND_INCOME,
        EntryKind::Expense => KIND_EXPENSE,
    }
}

fn status_label(status: EntryStatus) -> &'static str {
    match status {
        EntryStatus::Pending => STATUS_PENDING,
        EntryStatus::Paid => STATUS_PAID,
    }
}

fn parse_kind(text: &str) -> std::result::Result<EntryKind, String> {
    match text {
        KIND_INCOME => Ok(EntryKind::Income),
        KIND_EXPENSE => Ok(EntryKind::Expense),
        other => Err(format!("unknown Tipo `{}`", other)),
    }
}

fn parse_status(text: &str) -> std::result::Result<EntryStatus, String> {
    match text {
        STATUS_PENDING => Ok(EntryStatus::Pending),
        STATUS_PAID => Ok(EntryStatus::Paid),
        other => Err(format!("unknown Status `{}`", other)),
    }
}

fn parse_record(record: &csv::StringRecord) -> std::result::Result<Entry, String> {
    if record.len() != HEADERS.len() {
        return Err(format!("expected {} columns, got {}", HEADERS.len(), record.len()));
    }
    let id = Uuid::parse_str(&record[0]).map_err(|err| format!("bad ID: {}", err))?;
    let series_id =
        Uuid::parse_str(&record[1]).map_err(|err| format!("bad SeriesID: {}", err))?;
    let date = NaiveDate::parse_from_str(&record[2], DATE_FORMAT)
        .map_err(|err| format!("bad Data: {}", err))?;
    let amount: f64 = record[5]
        .parse()
        .map_err(|err| format!("bad Valor: {}", err))?;
    let kind = parse_kind(&record[6])?;
    let status = parse_status(&record[7])?;

    Entry::from_parts(id, series_id, date, &record[3], &record[4], amount, kind, status)
        .map_err(|err| err.to_string())
}
