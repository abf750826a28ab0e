use chrono::{DateTime, Local};
use serde::{Serialize, Deserialize};
use std::str::FromStr;

use crate::core::error::{TrackerError, TrackerResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: u64,
    pub date: DateTime<Local>,
    pub amount: f64,
    pub description: String,
}

/// Field of an expense that `update` may change. `date` and `id` are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseField {
    Description,
    Amount,
}

impl ExpenseRecord {
    pub fn new(id: u64, description: String, amount: f64, date: DateTime<Local>) -> TrackerResult<Self> {
        let amount = validate_amount(amount)?;
        Ok(Self {
            id,
            date,
            amount,
            description,
        })
    }

    // Getter methods
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn date(&self) -> DateTime<Local> {
        self.date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Year-month key (`YYYY-MM`) of the record date.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn set_amount(&mut self, amount: f64) -> TrackerResult<()> {
        self.amount = validate_amount(amount)?;
        Ok(())
    }
}

pub fn validate_amount(amount: f64) -> TrackerResult<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(TrackerError::InvalidAmount(amount.to_string()));
    }
    // -0.0 is stored as 0.0
    Ok(amount.abs())
}

pub fn parse_amount(raw: &str) -> TrackerResult<f64> {
    let amount = raw.trim().parse::<f64>()
        .map_err(|_| TrackerError::InvalidAmount(raw.to_string()))?;
    validate_amount(amount).map_err(|_| TrackerError::InvalidAmount(raw.to_string()))
}

impl FromStr for ExpenseField {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--d" => Ok(ExpenseField::Description),
            "--a" => Ok(ExpenseField::Amount),
            other => Err(TrackerError::InvalidField(other.to_string())),
        }
    }
}
