//! User configuration: the extensible category set, the fixed-monthly
//! repetition count, and the data file location.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".money_balance";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "dados.csv";
const DEFAULT_FIXED_MONTHLY_COUNT: u32 = 12;

/// Returns the application data directory, defaulting to `~/.money_balance`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("MONEY_BALANCE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub categories: Vec<String>,
    pub fixed_monthly_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: [
                "Alimentação",
                "Carro",
                "Educação",
                "Extra",
                "Investimentos",
                "Lazer",
                "Moradia",
                "Outros",
                "Salário",
                "Saúde",
                "Serviços",
                "Transporte",
                "Vestuário",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            fixed_monthly_count: DEFAULT_FIXED_MONTHLY_COUNT,
            data_file: None,
        }
    }
}

impl Config {
    /// Resolves the CSV data file, falling back to `dados.csv` in the app
    /// data directory.
    pub fn data_file_path(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| app_data_dir().join(DATA_FILE))
    }

    /// Adds a category, keeping the set sorted and free of duplicates.
    /// Returns false when the name is blank or already present.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|existing| existing == name) {
            return false;
        }
        self.categories.push(name.to_string());
        self.categories.sort();
        true
    }
}

/// Loads and saves the JSON config file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::at(app_data_dir().join(CONFIG_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
