// src/core/models/mod.rs

pub mod expense;

pub use expense::*;
