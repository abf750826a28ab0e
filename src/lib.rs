use crate::app_config::AppConfig;
use crate::commands::common::Command;
use crate::core::error::TrackerResult;
use crate::core::expense_tracker::ExpenseTracker;
use dotenvy::dotenv;
use std::io::Write;

pub mod core;
pub mod commands;
pub mod app_config;

pub fn initialize_environment() {
    // .env is optional
    dotenv().ok();
    pretty_env_logger::init();
}

pub fn initialize_system() -> TrackerResult<ExpenseTracker> {
    let config = AppConfig::new()?;
    ExpenseTracker::load(config)
}

fn execute<W: Write>(mut tracker: ExpenseTracker, command: Command, output: &mut W) -> TrackerResult<()> {
    commands::cli::execute_command(&mut tracker, command, output)
}

/// Load, execute, and (for mutating commands) save, against the data file in `config`.
pub fn run_command<W: Write>(command: Command, config: AppConfig, output: &mut W) -> TrackerResult<()> {
    execute(ExpenseTracker::load(config)?, command, output)
}

/// Full invocation: argv is validated before the data file is touched.
pub fn run<W: Write>(args: &[String], output: &mut W) -> TrackerResult<()> {
    let command = commands::cli::parse_cli_args(args)?;
    execute(initialize_system()?, command, output)
}
