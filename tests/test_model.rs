//! Tests for the domain model helpers.

use collabspace::core::model::avatar_data_uri;
use collabspace::{ProjectStatus, Task};

#[test]
fn test_task_create_rejects_blank_fields() {
    assert!(Task::create("", "Amina").is_none());
    assert!(Task::create("   ", "Amina").is_none());
    assert!(Task::create("Ship the landing page", "").is_none());
    assert!(Task::create("Ship the landing page", "   ").is_none());
}

#[test]
fn test_task_create_starts_open() {
    let task = Task::create("Ship the landing page", "Amina").expect("valid entry");
    assert!(!task.done);
    assert_eq!(task.text, "Ship the landing page");
    assert_eq!(task.assigned_to, "Amina");
    assert!(task.id > 0);
}

#[test]
fn test_status_labels() {
    assert_eq!(ProjectStatus::InProgress.to_string(), "In Progress");
    assert_eq!(ProjectStatus::Active.to_string(), "Active");
    assert_eq!(ProjectStatus::Planning.to_string(), "Planning");
    assert_eq!(ProjectStatus::Pending.to_string(), "Pending");
    assert_eq!(ProjectStatus::Completed.to_string(), "Completed");
}

#[test]
fn test_avatar_data_uri() {
    let uri = avatar_data_uri("me.png", &[0x89, 0x50, 0x4e, 0x47]);
    assert!(uri.starts_with("data:image/png;base64,"));
    assert_eq!(uri, "data:image/png;base64,iVBORw==");

    let unknown = avatar_data_uri("mystery.bin", b"abc");
    assert!(unknown.starts_with("data:application/octet-stream;base64,"));
}
