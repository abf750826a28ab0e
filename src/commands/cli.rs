// src/commands/cli.rs
use chrono::NaiveDate;
use clap::Parser;
use std::io::Write;

use crate::core::error::{TrackerError, TrackerResult};
use crate::core::expense_tracker::ExpenseTracker;
use crate::core::models::{parse_amount, ExpenseField};
use super::common::Command;

pub const GENERAL_USAGE: &str = "expense_tracker <command> [args...]

Commands:
  add <description> <amount>
  list
  summary
  month-summary --month <YYYY-MM>
  delete <id>
  update <id> (--d|--a) <value>";

pub const ADD_USAGE: &str = "add <description> <amount>";
pub const LIST_USAGE: &str = "list";
pub const SUMMARY_USAGE: &str = "summary";
pub const MONTH_SUMMARY_USAGE: &str = "month-summary --month <YYYY-MM> (for example: month-summary --month 2024-08)";
pub const DELETE_USAGE: &str = "delete <id>";
pub const UPDATE_USAGE: &str = "update <id> --d <description> | update <id> --a <amount>";

#[derive(Parser, Debug)]
#[command(name = "month-summary", about = "Print the expenses recorded in one month")]
struct MonthSummaryArgs {
    /// Month to summarize, formatted YYYY-MM
    #[arg(long)]
    month: String,
}

/// Normalizes a `YYYY-MM` key, rejecting anything that is not a real month.
pub fn parse_month_key(raw: &str) -> TrackerResult<String> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(|date| date.format("%Y-%m").to_string())
        .map_err(|_| TrackerError::InvalidMonth(raw.to_string()))
}

fn parse_id(raw: &str) -> TrackerResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TrackerError::InvalidId(raw.to_string())),
    }
}

/// Turns argv (program name first) into a validated command.
pub fn parse_cli_args(args: &[String]) -> TrackerResult<Command> {
    if args.len() < 2 {
        return Err(TrackerError::usage(GENERAL_USAGE));
    }

    let command = &args[1];
    let args = &args[2..];

    match command.as_str() {
        "add" => {
            if args.len() != 2 {
                return Err(TrackerError::usage(ADD_USAGE));
            }
            let description = args[0].clone();
            let amount = parse_amount(&args[1])?;
            Ok(Command::Add { description, amount })
        },
        "list" => {
            if !args.is_empty() {
                return Err(TrackerError::usage(LIST_USAGE));
            }
            Ok(Command::List)
        },
        "summary" => {
            if !args.is_empty() {
                return Err(TrackerError::usage(SUMMARY_USAGE));
            }
            Ok(Command::Summary)
        },
        "month-summary" => {
            let mut cmd_args = vec!["month-summary".to_string()];
            cmd_args.extend_from_slice(args);

            let month_args = MonthSummaryArgs::try_parse_from(cmd_args)
                .map_err(|_| TrackerError::usage(MONTH_SUMMARY_USAGE))?;
            let month = parse_month_key(&month_args.month)?;
            Ok(Command::MonthSummary { month })
        },
        "delete" => {
            if args.len() != 1 {
                return Err(TrackerError::usage(DELETE_USAGE));
            }
            Ok(Command::Delete { id: parse_id(&args[0])? })
        },
        "update" => {
            if args.len() != 3 {
                return Err(TrackerError::usage(UPDATE_USAGE));
            }
            let id = parse_id(&args[0])?;
            let field: ExpenseField = args[1].parse()?;
            if field == ExpenseField::Amount {
                parse_amount(&args[2])?;
            }
            Ok(Command::Update { id, field, value: args[2].clone() })
        },
        _ => Err(TrackerError::UnknownCommand(command.clone())),
    }
}

pub fn execute_command<W: Write>(
    tracker: &mut ExpenseTracker,
    command: Command,
    output: &mut W
) -> TrackerResult<()> {
    tracker.execute_command(command, output)
}
