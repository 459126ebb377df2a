//! Interactive prompts for the new-transaction form.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::Config;
use crate::ledger::{EntryIntent, EntryKind, Recurrence};

use super::CliResult;

/// Collects a transaction intent from the user, mirroring the classic form:
/// type, value, date, category, description, frequency, installment count.
pub fn intent_form(config: &Config, default_date: NaiveDate) -> CliResult<EntryIntent> {
    let theme = ColorfulTheme::default();

    let kind_index = Select::with_theme(&theme)
        .with_prompt("Tipo")
        .items(&["Despesa", "Receita"])
        .default(0)
        .interact()?;
    let kind = if kind_index == 1 {
        EntryKind::Income
    } else {
        EntryKind::Expense
    };

    let amount: f64 = Input::with_theme(&theme)
        .with_prompt("Valor")
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("Informe o valor sem sinal; o tipo define a direção")
            }
        })
        .interact_text()?;

    let date: NaiveDate = Input::with_theme(&theme)
        .with_prompt("Data (AAAA-MM-DD)")
        .default(default_date)
        .interact_text()?;

    let category_index = Select::with_theme(&theme)
        .with_prompt("Categoria")
        .items(&config.categories)
        .default(0)
        .interact()?;
    let category = config.categories[category_index].clone();

    let description: String = Input::with_theme(&theme)
        .with_prompt("Descrição")
        .allow_empty(true)
        .interact_text()?;

    let frequency = Select::with_theme(&theme)
        .with_prompt("Frequência")
        .items(&["Único", "Parcelado", "Fixo Mensal"])
        .default(0)
        .interact()?;
    let recurrence = match frequency {
        1 => {
            let count: u32 = Input::with_theme(&theme)
                .with_prompt("Nº Parcelas")
                .default(2)
                .validate_with(|value: &u32| {
                    if *value >= 2 {
                        Ok(())
                    } else {
                        Err("Uma compra parcelada tem pelo menos 2 parcelas")
                    }
                })
                .interact_text()?;
            Recurrence::Installment { count }
        }
        2 => Recurrence::FixedMonthly,
        _ => Recurrence::Single,
    };

    Ok(EntryIntent {
        description,
        amount,
        category,
        kind,
        date,
        recurrence,
    })
}
