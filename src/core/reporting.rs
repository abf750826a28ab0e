// src/core/reporting.rs

use crate::core::models::ExpenseRecord;
use std::io::{self, Write};

pub const LIST_HEADER: &str = "ID\tDate\t\tAmount\tDescription";

pub fn write_expense_added<W: Write>(output: &mut W, record: &ExpenseRecord) -> io::Result<()> {
    writeln!(output, "Expense added: {}", record.id())
}

/// Tab-separated table of every record, header first.
pub fn write_expense_list<W: Write>(output: &mut W, records: &[ExpenseRecord]) -> io::Result<()> {
    writeln!(output, "{}", LIST_HEADER)?;
    for record in records {
        writeln!(output, "{}", format_expense_row(record))?;
    }
    Ok(())
}

pub fn format_expense_row(record: &ExpenseRecord) -> String {
    format!(
        "{}\t{}\t${:.2}\t{}",
        record.id(),
        record.date().format("%Y-%m-%d"),
        record.amount(),
        record.description()
    )
}

pub fn write_summary<W: Write>(output: &mut W, total: f64) -> io::Result<()> {
    writeln!(output, "Summary: {:.2}", total)
}

pub fn write_month_summary<W: Write>(output: &mut W, entries: &[(String, f64)]) -> io::Result<()> {
    for (month, amount) in entries {
        writeln!(output, "{}\t{:.2}", month, amount)?;
    }
    Ok(())
}

pub fn write_expense_deleted<W: Write>(output: &mut W, id: u64) -> io::Result<()> {
    writeln!(output, "Expense deleted: {}", id)
}

pub fn write_expense_updated<W: Write>(output: &mut W, id: u64) -> io::Result<()> {
    writeln!(output, "Expense updated: {}", id)
}
