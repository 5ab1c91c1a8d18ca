//! Item identifiers as they arrive from the outside world.

use std::fmt;

/// Identifier of a stored record.
///
/// Ids reach the store as strings (URL path segments). The raw text is kept for
/// error messages; `value` holds the parsed integer, or `None` when the text is not
/// a valid id, in which case every lookup misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId {
    raw: String,
    value: Option<u64>,
}

impl ItemId {
    /// Parse a path segment into an id. Never fails; unparsable input yields an id
    /// that matches no record.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        Self {
            raw: s.to_string(),
            value: trimmed.parse::<u64>().ok(),
        }
    }

    /// The numeric id, if the input parsed.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        self.value
    }

    /// Whether this id refers to the record `id`.
    #[must_use]
    pub fn matches(&self, id: u64) -> bool {
        self.value == Some(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self {
            raw: id.to_string(),
            value: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        let id = ItemId::parse("17");
        assert_eq!(id.value(), Some(17));
        assert!(id.matches(17));
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(ItemId::parse(" 3 ").value(), Some(3));
    }

    #[test]
    fn test_parse_garbage_matches_nothing() {
        let id = ItemId::parse("abc");
        assert_eq!(id.value(), None);
        assert!(!id.matches(0));
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_parse_negative_matches_nothing() {
        assert_eq!(ItemId::parse("-1").value(), None);
    }

    #[test]
    fn test_from_u64() {
        let id = ItemId::from(9);
        assert!(id.matches(9));
        assert_eq!(id.to_string(), "9");
    }
}
