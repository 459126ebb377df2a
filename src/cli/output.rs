//! Month view rendering for the terminal.

use colored::Colorize;

use crate::core::services::MonthSummary;
use crate::ledger::{Entry, EntryStatus};

const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

pub fn month_title(year: i32, month: u32) -> String {
    let label = MONTH_LABELS
        .get(month as usize - 1)
        .copied()
        .unwrap_or("???");
    format!("{} / {}", label, year)
}

pub fn format_amount(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

fn colored_amount(amount: f64) -> colored::ColoredString {
    if amount >= 0.0 {
        format_amount(amount).green()
    } else {
        format_amount(amount).red()
    }
}

/// One selectable line for an entry, as shown in pick lists and the month
/// view: direction icon, description, category, day and value.
pub fn entry_line(entry: &Entry) -> String {
    let icon = if entry.is_income() { "🟢" } else { "🔴" };
    let status = match entry.status {
        EntryStatus::Paid => "✅ Pago",
        EntryStatus::Pending => "⏳ Pendente",
    };
    format!(
        "{} {}  {} • {}  {}  {}",
        icon,
        entry.description.bold(),
        entry.category,
        entry.date.format("%d/%m"),
        colored_amount(entry.amount),
        status.dimmed()
    )
}

pub fn render_month(summary: &MonthSummary) {
    println!();
    println!("⚖️💰  {}", month_title(summary.year, summary.month).bold());
    println!(
        "Receitas: {}   Despesas: {}   Saldo: {}",
        format_amount(summary.income_total).green(),
        format_amount(summary.expense_total).red(),
        colored_amount(summary.net)
    );
    if summary.entries.is_empty() {
        println!("{}", "Nenhum lançamento neste mês.".dimmed());
        return;
    }
    for entry in &summary.entries {
        println!("  {}", entry_line(entry));
    }
}
