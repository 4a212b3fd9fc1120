//! Tests for the resource registry

use super::*;
use crate::error::Error;
use crate::types::{JsonObject, Method};
use serde_json::json;
use test_case::test_case;

fn fields(pairs: &[(&str, serde_json::Value)]) -> JsonObject {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test_case(ResourceKind::Account, "accounts", "account_id")]
#[test_case(ResourceKind::Client, "clients", "client_id")]
#[test_case(ResourceKind::Department, "departments", "department_id")]
#[test_case(ResourceKind::Holiday, "holidays", "holiday_id")]
#[test_case(ResourceKind::Milestone, "milestones", "milestone_id")]
#[test_case(ResourceKind::Person, "people", "people_id")]
#[test_case(ResourceKind::Phase, "phases", "phase_id")]
#[test_case(ResourceKind::Project, "projects", "project_id")]
#[test_case(ResourceKind::Task, "tasks", "task_id")]
#[test_case(ResourceKind::Timeoff, "timeoffs", "timeoff_id")]
#[test_case(ResourceKind::TimeoffType, "timeoff-types", "timeoff_type_id")]
fn test_paths_and_id_fields(kind: ResourceKind, path: &str, id_field: &str) {
    assert_eq!(kind.path(), path);
    assert_eq!(kind.id_field(), id_field);
    assert_eq!(kind.item_path(5), format!("{path}/5"));
}

#[test]
fn test_get_is_universal() {
    for kind in ResourceKind::ALL {
        assert!(kind.ensure_supported(Method::GET).is_ok());
    }
}

#[test]
fn test_accounts_are_read_only() {
    for verb in [Method::POST, Method::PATCH, Method::DELETE] {
        let err = ResourceKind::Account.ensure_supported(verb).unwrap_err();
        match err {
            Error::UnsupportedOperation { resource, verb: v } => {
                assert_eq!(resource, "account");
                assert_eq!(v, verb.to_string());
            }
            other => panic!("expected UnsupportedOperation, got {other:?}"),
        }
    }
}

#[test]
fn test_timeoff_type_delete_unsupported() {
    assert!(ResourceKind::TimeoffType
        .ensure_supported(Method::POST)
        .is_ok());
    assert!(ResourceKind::TimeoffType
        .ensure_supported(Method::PATCH)
        .is_ok());
    assert!(matches!(
        ResourceKind::TimeoffType
            .ensure_supported(Method::DELETE)
            .unwrap_err(),
        Error::UnsupportedOperation { .. }
    ));
}

#[test]
fn test_validate_create_project_requires_name() {
    let err = validate_create(ResourceKind::Project, &JsonObject::new()).unwrap_err();
    match err {
        Error::MissingRequiredField { field, resource } => {
            assert_eq!(field, "name");
            assert_eq!(resource, "project");
        }
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }

    let ok = fields(&[("name", json!("Demo"))]);
    assert!(validate_create(ResourceKind::Project, &ok).is_ok());
}

#[test]
fn test_validate_create_task_names_missing_field() {
    let partial = fields(&[
        ("project_id", json!(1)),
        ("start_date", json!("2021-01-01")),
        ("end_date", json!("2021-01-08")),
        ("hours", json!(8)),
    ]);

    let err = validate_create(ResourceKind::Task, &partial).unwrap_err();
    match err {
        Error::MissingRequiredField { field, .. } => assert_eq!(field, "people_id"),
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

#[test]
fn test_validate_create_timeoff_hours_conditional() {
    let base = [
        ("timeoff_type_id", json!(1)),
        ("start_date", json!("2021-06-01")),
        ("end_date", json!("2021-06-02")),
        ("people_ids", json!([17])),
    ];

    // No hours, no full_day flag
    let err = validate_create(ResourceKind::Timeoff, &fields(&base)).unwrap_err();
    match err {
        Error::MissingRequiredField { field, resource } => {
            assert_eq!(field, "hours");
            assert_eq!(resource, "timeoff");
        }
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }

    // full_day=1 lifts the hours requirement
    let mut full_day = fields(&base);
    full_day.insert("full_day".to_string(), json!(1));
    assert!(validate_create(ResourceKind::Timeoff, &full_day).is_ok());

    // full_day=0 does not
    let mut not_full_day = fields(&base);
    not_full_day.insert("full_day".to_string(), json!(0));
    assert!(matches!(
        validate_create(ResourceKind::Timeoff, &not_full_day).unwrap_err(),
        Error::MissingRequiredField { .. }
    ));

    // Explicit hours always satisfy it
    let mut with_hours = fields(&base);
    with_hours.insert("hours".to_string(), json!(4));
    assert!(validate_create(ResourceKind::Timeoff, &with_hours).is_ok());
}

#[test]
fn test_validate_create_accounts_have_no_required_fields() {
    // Accounts are read-only; the field check itself is vacuous
    assert!(validate_create(ResourceKind::Account, &JsonObject::new()).is_ok());
}

#[test]
fn test_display_uses_singular_name() {
    assert_eq!(ResourceKind::Person.to_string(), "person");
    assert_eq!(ResourceKind::TimeoffType.to_string(), "timeoff type");
}
