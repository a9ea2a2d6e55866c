use crate::{
    CreateUserPayload, DatabaseAccount, DeleteUserPayload, EditUserPayload, RoleId, RoleMap,
    RosterAccount, SyncError,
};

use googletest::prelude::*;
use serde_json::json;

fn viewer_roles() -> RoleMap {
    [("viewer", RoleId::from("7"))].into_iter().collect()
}

fn carol() -> RosterAccount {
    RosterAccount {
        user_id: String::from("3"),
        username: String::from("carol"),
        email: String::from("carol@example.com"),
        first_name: String::from("Carol"),
        last_name: String::from("Jones"),
        is_active: false,
        role: vec![String::from("Gamma"), String::from("Legacy")],
        role_id: vec![Some(RoleId::from("4")), None],
    }
}

#[test]
fn given_db_account_when_create_payload_built_then_role_id_is_sent() {
    let account = DatabaseAccount::new("Bob", "BOB@example.com", "Bob", "Smith", "Pw", "Viewer");

    let payload = CreateUserPayload::from_account(&account, &viewer_roles()).unwrap();

    assert_that!(
        serde_json::to_value(&payload).unwrap(),
        eq(&json!({
            "first_name": "Bob",
            "last_name": "Smith",
            "username": "bob",
            "email": "bob@example.com",
            "active": "y",
            "conf_password": "Pw",
            "password": "Pw",
            "roles": 7
        }))
    );
}

#[test]
fn given_unmapped_role_when_create_payload_built_then_error() {
    let account = DatabaseAccount::new("bob", "bob@example.com", "Bob", "Smith", "pw", "editor");

    let result = CreateUserPayload::from_account(&account, &viewer_roles());

    assert!(matches!(result, Err(SyncError::UnmappedRole { .. })));
}

#[test]
fn given_create_payload_when_debug_formatted_then_passwords_hidden() {
    let account = DatabaseAccount::new("bob", "bob@example.com", "Bob", "Smith", "hunter2", "viewer");
    let payload = CreateUserPayload::from_account(&account, &viewer_roles()).unwrap();

    assert_that!(format!("{:?}", payload), not(contains_substring("hunter2")));
}

#[test]
fn given_roster_account_when_activated_then_active_flag_present() {
    let payload = EditUserPayload::from_roster(&carol()).activated();

    assert_that!(
        serde_json::to_value(&payload).unwrap(),
        eq(&json!({
            "first_name": "Carol",
            "last_name": "Jones",
            "username": "carol",
            "email": "carol@example.com",
            "roles": [4, null],
            "active": "y"
        }))
    );
}

#[test]
fn given_activated_payload_when_deactivated_then_active_key_absent() {
    let payload = EditUserPayload::from_roster(&carol()).activated().deactivated();

    let value = serde_json::to_value(&payload).unwrap();

    assert!(value.get("active").is_none());
    assert_eq!(value["username"], json!("carol"));
}

#[test]
fn given_delete_payload_when_serialized_then_empty_marker() {
    let value = serde_json::to_value(DeleteUserPayload::default()).unwrap();
    assert_that!(value, eq(&json!({ "delete": "" })));
}
