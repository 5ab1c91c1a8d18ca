use super::*;

#[test]
fn test_from_create_defaults() {
    let item = TodoItem::from_create(1, CreateTodo::new("buy milk"));
    assert_eq!(item.id, 1);
    assert_eq!(item.text.as_deref(), Some("buy milk"));
    assert!(!item.completed);
    assert!(item.completed_date.is_none());
}

#[test]
fn test_from_create_completed_is_stamped() {
    let item = TodoItem::from_create(
        2,
        CreateTodo {
            text: None,
            completed: true,
        },
    );
    assert!(item.completed);
    assert!(item.completed_date.is_some());
}

#[test]
fn test_serialized_shape() {
    let item = TodoItem::from_create(1, CreateTodo::new("buy milk"));
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 1, "text": "buy milk", "completed": false})
    );
}

#[test]
fn test_missing_text_is_null() {
    let fields: CreateTodo = serde_json::from_str("{}").unwrap();
    let item = TodoItem::from_create(1, fields);
    let json = serde_json::to_value(&item).unwrap();
    assert!(json["text"].is_null());
}

#[test]
fn test_apply_update_only_supplied_fields() {
    let mut item = TodoItem::from_create(1, CreateTodo::new("walk dog"));
    item.apply_update(&UpdateTodo {
        completed: Some(true),
        ..UpdateTodo::default()
    });
    assert_eq!(item.text.as_deref(), Some("walk dog"));
    assert!(item.completed);
    assert!(item.completed_date.is_some());

    item.apply_update(&UpdateTodo {
        text: Some("walk cat".to_string()),
        ..UpdateTodo::default()
    });
    assert_eq!(item.text.as_deref(), Some("walk cat"));
    assert!(item.completed);
}

#[test]
fn test_reopen_clears_completed_date() {
    let mut item = TodoItem::from_create(1, CreateTodo::new("x"));
    item.set_completed(true);
    assert!(item.completed_date.is_some());
    item.set_completed(false);
    assert!(item.completed_date.is_none());
}

#[test]
fn test_update_body_uses_camel_case() {
    let fields: UpdateTodo =
        serde_json::from_str(r#"{"text":"a","completed":true,"orderChange":true,"orderTarget":3}"#)
            .unwrap();
    assert_eq!(TodoItem::reposition_target(&fields), Some(3));
}

#[test]
fn test_reposition_requires_order_change() {
    let fields = UpdateTodo {
        order_target: Some(3),
        ..UpdateTodo::default()
    };
    assert_eq!(TodoItem::reposition_target(&fields), None);
    assert_eq!(TodoItem::reposition_target(&UpdateTodo::move_before(3)), Some(3));
}
