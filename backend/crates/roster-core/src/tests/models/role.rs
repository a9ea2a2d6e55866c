use crate::{RoleId, RoleMap, SyncError};

use googletest::prelude::*;

#[test]
fn given_mixed_case_names_when_looked_up_then_match_case_insensitively() {
    let roles: RoleMap = [("Admin", RoleId::from("1")), ("Gamma", RoleId::from("4"))]
        .into_iter()
        .collect();

    assert_eq!(roles.get("admin"), Some(&RoleId::from("1")));
    assert_eq!(roles.get(" GAMMA "), Some(&RoleId::from("4")));
    assert!(roles.get("alpha").is_none());
    assert_that!(roles.len(), eq(2));
}

#[test]
fn given_unknown_role_when_resolved_then_unmapped_role_error() {
    let roles = RoleMap::new();

    let result = roles.resolve("viewer", "bob");

    assert!(matches!(
        result,
        Err(SyncError::UnmappedRole { ref role, ref username, .. }) if role == "viewer" && username == "bob"
    ));
}

#[test]
fn given_numeric_id_when_serialized_then_json_number() {
    let json = serde_json::to_value(RoleId::from("7")).unwrap();
    assert_that!(json, eq(&serde_json::json!(7)));
}

#[test]
fn given_opaque_id_when_serialized_then_json_string() {
    let json = serde_json::to_value(RoleId::from("a1b2")).unwrap();
    assert_that!(json, eq(&serde_json::json!("a1b2")));
}

#[test]
fn given_zero_padded_id_when_serialized_then_json_string_unchanged() {
    let json = serde_json::to_value(RoleId::from("007")).unwrap();
    assert_that!(json, eq(&serde_json::json!("007")));

    let json = serde_json::to_value(RoleId::from("+7")).unwrap();
    assert_that!(json, eq(&serde_json::json!("+7")));
}
