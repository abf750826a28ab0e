// src/core/state.rs

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::{TrackerError, TrackerResult};
use crate::core::models::{parse_amount, ExpenseField, ExpenseRecord};

/// In-memory expense store: records in insertion order plus the id counter.
///
/// Ids are stable. Deleting a record never renumbers the others and never
/// hands its id out again, so `next_id` only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStore {
    #[serde(default, alias = "expanse_tracker", deserialize_with = "null_as_empty")]
    records: Vec<ExpenseRecord>,
    #[serde(default = "first_id")]
    next_id: u64,
}

fn first_id() -> u64 {
    1
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ExpenseRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ExpenseRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: first_id(),
        }
    }

    // Getters
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn add(&mut self, description: String, amount: f64) -> TrackerResult<ExpenseRecord> {
        self.add_at(description, amount, Local::now())
    }

    pub fn add_at(&mut self, description: String, amount: f64, date: DateTime<Local>) -> TrackerResult<ExpenseRecord> {
        let record = ExpenseRecord::new(self.next_id, description, amount, date)?;
        self.next_id = self.next_id.checked_add(1).ok_or(TrackerError::IdOverflow(self.next_id))?;
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn total_sum(&self) -> f64 {
        // +0.0 start, so an empty store prints 0.00
        self.records.iter().fold(0.0, |sum, record| sum + record.amount())
    }

    /// One `(YYYY-MM, amount)` entry per record dated in `month`, in insertion order.
    pub fn month_summary(&self, month: &str) -> Vec<(String, f64)> {
        self.records.iter()
            .map(|record| (record.month_key(), record.amount()))
            .filter(|(key, _)| key == month)
            .collect()
    }

    pub fn delete(&mut self, id: u64) -> TrackerResult<ExpenseRecord> {
        let index = self.records.iter()
            .position(|record| record.id() == id)
            .ok_or(TrackerError::NotFound(id))?;
        Ok(self.records.remove(index))
    }

    /// Replaces one field of the record with `id`. The new value is parsed
    /// before the store is touched, so a failed update leaves it unchanged.
    pub fn update(&mut self, id: u64, field: ExpenseField, value: &str) -> TrackerResult<&ExpenseRecord> {
        let amount = match field {
            ExpenseField::Amount => Some(parse_amount(value)?),
            ExpenseField::Description => None,
        };

        let record = self.records.iter_mut()
            .find(|record| record.id() == id)
            .ok_or(TrackerError::NotFound(id))?;

        match amount {
            Some(amount) => record.set_amount(amount)?,
            None => record.set_description(value.to_string()),
        }
        Ok(&*record)
    }

    /// Raises `next_id` above every stored id. Returns true when a repair was needed.
    pub fn normalize_next_id(&mut self) -> TrackerResult<bool> {
        let max_id = self.records.iter().map(ExpenseRecord::id).max().unwrap_or(0);
        let floor = max_id.checked_add(1).ok_or(TrackerError::IdOverflow(max_id))?;
        if self.next_id < floor {
            self.next_id = floor;
            return Ok(true);
        }
        Ok(false)
    }
}
