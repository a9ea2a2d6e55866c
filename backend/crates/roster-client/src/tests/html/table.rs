use crate::tests::{ROLES_LIST_HTML, USERS_LIST_HTML};
use crate::{ClientError, parse_table};

use googletest::prelude::*;

const USER_COLUMNS: [&str; 6] = [
    "first_name",
    "last_name",
    "username",
    "email",
    "is_active",
    "role",
];

#[test]
fn given_users_page_when_parsed_then_rows_named_and_ids_aligned() {
    let records = parse_table(USERS_LIST_HTML, 1, &USER_COLUMNS, "user_id").unwrap();

    assert_that!(records, len(eq(3)));
    assert_that!(records[0]["username"].as_str(), eq("admin"));
    assert_that!(records[0]["user_id"].as_str(), eq("1"));
    assert_that!(records[1]["first_name"].as_str(), eq("Carol"));
    assert_that!(records[1]["username"].as_str(), eq("Carol"));
    assert_that!(records[1]["is_active"].as_str(), eq("False"));
    assert_that!(records[1]["role"].as_str(), eq("[Gamma, Legacy]"));
    assert_that!(records[1]["user_id"].as_str(), eq("3"));
    assert_that!(records[2]["user_id"].as_str(), eq("9"));
}

#[test]
fn given_roles_page_when_parsed_with_two_skipped_columns_then_names_and_ids() {
    let records = parse_table(ROLES_LIST_HTML, 2, &["name"], "role_id").unwrap();

    assert_that!(records, len(eq(3)));
    assert_that!(records[2]["name"].as_str(), eq("Viewer"));
    assert_that!(records[2]["role_id"].as_str(), eq("7"));
    assert_that!(records[2].len(), eq(2));
}

#[test]
fn given_page_without_list_table_when_parsed_then_parse_error() {
    let html = r#"<table class="table"><tbody><tr><td>x</td></tr></tbody></table>"#;

    let result = parse_table(html, 0, &["name"], "id");

    assert!(matches!(result, Err(ClientError::Parse { .. })));
}

#[test]
fn given_empty_list_table_when_parsed_then_no_records() {
    let html = r#"
        <table class="table table-hover">
          <thead><tr><th></th><th>Name</th></tr></thead>
          <tbody></tbody>
        </table>
    "#;

    let records = parse_table(html, 1, &["name"], "role_id").unwrap();

    assert_that!(records, is_empty());
}

#[test]
fn given_row_without_action_link_when_parsed_then_parse_error() {
    let html = r#"
        <table class="table table-hover">
          <tr>
            <td><a href="/roles/show/1" class="btn btn-sm btn-default">s</a></td>
            <td>Admin</td>
          </tr>
          <tr>
            <td><a href="/roles/edit/2" class="btn btn-sm btn-default">e</a></td>
            <td>Gamma</td>
          </tr>
        </table>
    "#;

    let result = parse_table(html, 1, &["name"], "role_id");

    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("1 action links for 2 table rows"));
}

#[test]
fn given_rows_without_tbody_when_parsed_then_rows_still_found() {
    let html = r#"
        <table class="table table-hover">
          <tr><th></th><th>Name</th></tr>
          <tr>
            <td><a href="/roles/show/5" class="btn btn-sm btn-default">s</a></td>
            <td>  Public
            </td>
          </tr>
        </table>
    "#;

    let records = parse_table(html, 1, &["name"], "role_id").unwrap();

    assert_that!(records, len(eq(1)));
    assert_that!(records[0]["name"].as_str(), eq("Public"));
    assert_that!(records[0]["role_id"].as_str(), eq("5"));
}

#[test]
fn given_column_count_mismatch_when_parsed_then_parse_error() {
    let result = parse_table(USERS_LIST_HTML, 1, &["first_name", "last_name"], "user_id");

    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("expected 3"));
}

#[test]
fn given_row_with_delete_button_when_parsed_then_only_plain_action_link_counts() {
    let html = r#"
        <table class="table table-hover">
          <tbody>
            <tr>
              <td>
                <a href="/users/show/3" class="btn btn-sm btn-default">s</a>
                <a href="/users/edit/3" class="btn btn-sm btn-default">e</a>
                <a href="javascript:void(0)" class="btn btn-sm btn-default confirm">d</a>
              </td>
              <td>carol</td>
            </tr>
          </tbody>
        </table>
    "#;

    let records = parse_table(html, 1, &["username"], "user_id").unwrap();

    assert_that!(records, len(eq(1)));
    assert_that!(records[0]["user_id"].as_str(), eq("3"));
}

#[test]
fn given_padded_class_attribute_when_parsed_then_link_still_matched() {
    let html = r#"
        <table class="table table-hover">
          <tr>
            <td><a href="/roles/show/8" class=" btn btn-sm btn-default ">s</a></td>
            <td>Alpha</td>
          </tr>
        </table>
    "#;

    let records = parse_table(html, 1, &["name"], "role_id").unwrap();

    assert_that!(records[0]["role_id"].as_str(), eq("8"));
}
