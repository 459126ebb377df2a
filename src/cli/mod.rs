//! Interactive shell: month navigation, the new-transaction form, payment
//! toggling, and scoped deletion. Everything here is a thin layer over
//! `LedgerManager`; failures print a message and return to the menu.

pub mod forms;
pub mod output;

use chrono::{Datelike, Local, NaiveDate};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::ConfigManager;
use crate::core::services::ServiceError;
use crate::core::LedgerManager;
use crate::errors::LedgerError;
use crate::ledger::{calendar::add_months, EraseScope};
use crate::storage::CsvStorage;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type CliResult<T> = Result<T, CliError>;

const MENU_ITEMS: [&str; 7] = [
    "◀ Mês anterior",
    "▶ Próximo mês",
    "➕ Nova transação",
    "✅ Alternar status",
    "🗑️ Excluir lançamento",
    "📂 Nova categoria",
    "Sair",
];

pub fn run() -> CliResult<()> {
    let config_manager = ConfigManager::new();
    let config = config_manager.load()?;
    let storage = CsvStorage::new(config.data_file_path());
    let mut manager = LedgerManager::new(Box::new(storage), config);
    manager.load()?;

    let theme = ColorfulTheme::default();
    let mut nav_date = Local::now().date_naive();

    loop {
        let summary = manager.month_summary(nav_date.year(), nav_date.month());
        output::render_month(&summary);

        let choice = Select::with_theme(&theme)
            .with_prompt("Money Balance")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => {
                nav_date = add_months(nav_date, -1);
                Ok(())
            }
            1 => {
                nav_date = add_months(nav_date, 1);
                Ok(())
            }
            2 => add_transaction(&mut manager, nav_date),
            3 => toggle_status(&mut manager, nav_date, &theme),
            4 => delete_entry(&mut manager, nav_date, &theme),
            5 => add_category(&mut manager, &config_manager, &theme),
            _ => break,
        };
        if let Err(err) = result {
            println!("{}", format!("Erro: {err}").red());
        }
    }
    Ok(())
}

fn add_transaction(manager: &mut LedgerManager, nav_date: NaiveDate) -> CliResult<()> {
    let intent = forms::intent_form(manager.config(), nav_date)?;
    let created = manager.add_intent(&intent)?;
    println!(
        "{}",
        format!("Salvo com sucesso! ({} lançamento(s))", created.len()).green()
    );
    Ok(())
}

/// Lets the user pick one of the month's entries; `None` when the month is
/// empty or the user backs out.
fn pick_entry(
    manager: &LedgerManager,
    nav_date: NaiveDate,
    theme: &ColorfulTheme,
    prompt: &str,
) -> CliResult<Option<uuid::Uuid>> {
    let summary = manager.month_summary(nav_date.year(), nav_date.month());
    if summary.entries.is_empty() {
        println!("{}", "Nenhum lançamento neste mês.".dimmed());
        return Ok(None);
    }
    let mut items: Vec<String> = summary.entries.iter().map(output::entry_line).collect();
    items.push("Cancelar".to_string());
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(summary.entries.get(index).map(|entry| entry.id))
}

fn toggle_status(
    manager: &mut LedgerManager,
    nav_date: NaiveDate,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    if let Some(id) = pick_entry(manager, nav_date, theme, "Alternar status de qual lançamento?")? {
        manager.toggle_status(id)?;
    }
    Ok(())
}

fn delete_entry(
    manager: &mut LedgerManager,
    nav_date: NaiveDate,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    let Some(id) = pick_entry(manager, nav_date, theme, "Apagar qual lançamento?")? else {
        return Ok(());
    };
    let scope_index = Select::with_theme(theme)
        .with_prompt("Apagar o quê?")
        .items(&["Só Este", "Este e Futuros", "Série Toda", "Cancelar"])
        .default(0)
        .interact()?;
    let scope = match scope_index {
        0 => EraseScope::Single,
        1 => EraseScope::ThisAndFuture,
        2 => EraseScope::WholeSeries,
        _ => return Ok(()),
    };
    let removed = manager.erase(id, scope)?;
    println!("{}", format!("{removed} lançamento(s) removido(s).").green());
    Ok(())
}

fn add_category(
    manager: &mut LedgerManager,
    config_manager: &ConfigManager,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Nome da categoria")
        .interact_text()?;
    if manager.config_mut().add_category(&name) {
        config_manager.save(manager.config())?;
        println!("{}", "Categoria adicionada.".green());
    } else {
        println!("{}", "Categoria vazia ou já existente.".yellow());
    }
    Ok(())
}
