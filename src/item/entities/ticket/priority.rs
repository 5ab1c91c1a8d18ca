use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityError {
    #[error("Priority {0} is out of range. Valid values: 0 (High), 1 (Medium), 2 (Low)")]
    OutOfRange(u8),
}

/// Ticket urgency, stored and transmitted as a small integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    High,
    Medium,
    Low,
}

impl Priority {
    /// Every level, most urgent first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Integer code used on the wire and in the `priority` column.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = PriorityError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Priority::High),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::Low),
            other => Err(PriorityError::OutOfRange(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.code()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;
