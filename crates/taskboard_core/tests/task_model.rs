use taskboard_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(id, "  Buy milk ", 1_700_000_000_000).unwrap();
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["done"], true);
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_defaults_done_to_false() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "call mom",
        "created_at": 5
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert!(!task.done);
}

#[test]
fn deserialize_rejects_blank_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "   ",
        "done": false,
        "created_at": 5
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("title must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_nil_id() {
    let value = serde_json::json!({
        "id": Uuid::nil().to_string(),
        "title": "ok",
        "done": false,
        "created_at": 5
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(err.to_string().contains("nil"), "unexpected error: {err}");
}

#[test]
fn validate_catches_mutated_title() {
    let mut task = Task::new("fine", 0).unwrap();
    task.title = " ".to_string();
    assert_eq!(task.validate().unwrap_err(), TaskValidationError::EmptyTitle);
}
