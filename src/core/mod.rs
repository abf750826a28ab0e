// src/core/mod.rs

pub mod error;
pub mod expense_tracker;
pub mod file_system;
pub mod models;
pub mod reporting;
pub mod state;
