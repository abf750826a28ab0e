// src/core/expense_tracker.rs

use crate::app_config::AppConfig;
use crate::commands::common::Command;
use crate::core::error::TrackerResult;
use crate::core::file_system::FileSystem;
use crate::core::models::{ExpenseField, ExpenseRecord};
use crate::core::reporting;
use crate::core::state::ExpenseStore;

use std::io::Write;
use log::{debug, info};

/// Owns the store for one invocation and runs commands against it.
pub struct ExpenseTracker {
    state: ExpenseStore,
    config: AppConfig,
}

impl ExpenseTracker {
    pub fn new(config: AppConfig, state: Option<ExpenseStore>) -> Self {
        let state = state.unwrap_or_else(ExpenseStore::new);
        Self {
            state,
            config,
        }
    }

    /// Builds a tracker from the data file named in `config`.
    pub fn load(config: AppConfig) -> TrackerResult<Self> {
        let state = FileSystem::load_state(&config.data_file)?;
        Ok(Self::new(config, Some(state)))
    }

    pub fn state(&self) -> &ExpenseStore {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn save_state(&self) -> TrackerResult<()> {
        FileSystem::save_state(&self.state, &self.config.data_file)
    }

    pub fn add_expense(&mut self, description: String, amount: f64) -> TrackerResult<ExpenseRecord> {
        let record = self.state.add(description, amount)?;
        info!("Added expense {} ({:.2})", record.id(), record.amount());
        Ok(record)
    }

    pub fn list_expenses(&self) -> &[ExpenseRecord] {
        self.state.records()
    }

    pub fn total_sum(&self) -> f64 {
        self.state.total_sum()
    }

    pub fn month_summary(&self, month: &str) -> Vec<(String, f64)> {
        self.state.month_summary(month)
    }

    pub fn delete_expense(&mut self, id: u64) -> TrackerResult<ExpenseRecord> {
        let record = self.state.delete(id)?;
        info!("Deleted expense {}", id);
        Ok(record)
    }

    pub fn update_expense(&mut self, id: u64, field: ExpenseField, value: &str) -> TrackerResult<()> {
        self.state.update(id, field, value)?;
        info!("Updated {:?} of expense {}", field, id);
        Ok(())
    }

    /// Runs one command, writing its console output to `output`. Mutating
    /// commands are persisted only when they succeed.
    pub fn execute_command<W: Write>(&mut self, command: Command, output: &mut W) -> TrackerResult<()> {
        debug!("Executing command: {:?}", command);
        let mutating = command.is_mutating();

        match command {
            Command::Add { description, amount } => {
                let record = self.add_expense(description, amount)?;
                reporting::write_expense_added(output, &record)?;
            },
            Command::List => {
                reporting::write_expense_list(output, self.list_expenses())?;
            },
            Command::Summary => {
                reporting::write_summary(output, self.total_sum())?;
            },
            Command::MonthSummary { month } => {
                let entries = self.month_summary(&month);
                reporting::write_month_summary(output, &entries)?;
            },
            Command::Delete { id } => {
                self.delete_expense(id)?;
                reporting::write_expense_deleted(output, id)?;
            },
            Command::Update { id, field, value } => {
                self.update_expense(id, field, &value)?;
                reporting::write_expense_updated(output, id)?;
            },
        }

        if mutating {
            self.save_state()?;
            debug!("Saved state to {}", self.config.data_file);
        }
        Ok(())
    }
}
