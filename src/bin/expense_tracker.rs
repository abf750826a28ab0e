// src/bin/expense_tracker.rs

use expense_tracker::{initialize_environment, run};
use expense_tracker::commands::cli::GENERAL_USAGE;
use expense_tracker::core::error::TrackerError;
use log::error;
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    initialize_environment();

    let args: Vec<String> = env::args().collect();
    let mut stdout = io::stdout();

    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ TrackerError::Usage(_)) => {
            println!("{}", e);
            ExitCode::FAILURE
        },
        Err(e @ TrackerError::UnknownCommand(_)) => {
            eprintln!("Error: {}", e);
            println!("Usage: {}", GENERAL_USAGE);
            ExitCode::FAILURE
        },
        Err(e) => {
            error!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
