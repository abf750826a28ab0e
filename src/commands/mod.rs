// src/commands/mod.rs

pub mod cli;
pub mod common;
