use super::*;

#[test]
fn test_not_found_display() {
    let err = ItemError::not_found("42");
    assert_eq!(err.to_string(), "Item not found: 42");
    assert!(err.is_not_found());
}

#[test]
fn test_persistence_display() {
    let err = ItemError::persistence("disk on fire");
    assert_eq!(err.to_string(), "Persistence failure: disk on fire");
    assert!(!err.is_not_found());
}

#[test]
fn test_no_rows_maps_to_not_found() {
    let err: ItemError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(err.is_not_found());
}

#[test]
fn test_sqlite_failure_maps_to_persistence() {
    let err: ItemError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, ItemError::Persistence(_)));
}
