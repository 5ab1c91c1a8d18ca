use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::entities::TodoItem;

/// Which todos a view shows. Local to the view, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ShowFilter {
    #[must_use]
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ShowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(completed: bool) -> TodoItem {
        TodoItem {
            id: 1,
            text: None,
            completed,
            completed_date: None,
        }
    }

    #[test]
    fn test_matches() {
        assert!(ShowFilter::All.matches(&todo(true)));
        assert!(ShowFilter::All.matches(&todo(false)));
        assert!(ShowFilter::Active.matches(&todo(false)));
        assert!(!ShowFilter::Active.matches(&todo(true)));
        assert!(ShowFilter::Completed.matches(&todo(true)));
        assert!(!ShowFilter::Completed.matches(&todo(false)));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ShowFilter::Active).unwrap(), "\"active\"");
        let parsed: ShowFilter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ShowFilter::Completed);
        assert_eq!(ShowFilter::default().to_string(), "all");
    }
}
