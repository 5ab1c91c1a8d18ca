use super::*;

#[test]
fn test_default_is_high() {
    assert_eq!(Priority::default(), Priority::High);
    assert_eq!(Priority::default().code(), 0);
}

#[test]
fn test_codes_roundtrip_through_try_from() {
    for priority in Priority::ALL {
        assert_eq!(Priority::try_from(priority.code()), Ok(priority));
    }
}

#[test]
fn test_out_of_range_code() {
    assert_eq!(Priority::try_from(3), Err(PriorityError::OutOfRange(3)));
}

#[test]
fn test_names() {
    assert_eq!(Priority::High.name(), "High");
    assert_eq!(Priority::Medium.name(), "Medium");
    assert_eq!(Priority::Low.to_string(), "Low");
}

#[test]
fn test_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "2");
    let parsed: Priority = serde_json::from_str("1").unwrap();
    assert_eq!(parsed, Priority::Medium);
}

#[test]
fn test_rejects_unknown_integer() {
    assert!(serde_json::from_str::<Priority>("7").is_err());
}
