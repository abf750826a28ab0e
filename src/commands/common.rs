use serde::{Deserialize, Serialize};

use crate::core::models::ExpenseField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Command {
    Add {
        description: String,
        amount: f64,
    },
    List,
    Summary,
    MonthSummary {
        month: String,
    },
    Delete {
        id: u64,
    },
    Update {
        id: u64,
        field: ExpenseField,
        value: String,
    },
}

impl Command {
    /// Commands that change the store and must be saved afterwards.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Delete { .. } | Command::Update { .. })
    }
}
