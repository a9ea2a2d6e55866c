use crate::extract_csrf_token;
use crate::tests::LOGIN_PAGE_HTML;

use googletest::prelude::*;

#[test]
fn given_login_page_when_token_extracted_then_hidden_field_value() {
    let token = extract_csrf_token(LOGIN_PAGE_HTML).unwrap();
    assert_that!(token.as_str(), eq("IjVhZDg0ZTk5Ig.ZxYz.token"));
}

#[test]
fn given_several_token_fields_when_extracted_then_last_wins() {
    let html = r#"
        <input id="csrf_token" value="first">
        <input id="csrf_token" value="second">
    "#;

    let token = extract_csrf_token(html).unwrap();

    assert_that!(token.as_str(), eq("second"));
}

#[test]
fn given_page_without_token_when_extracted_then_parse_error() {
    let result = extract_csrf_token("<html><body><form></form></body></html>");

    assert!(matches!(result, Err(crate::ClientError::Parse { .. })));
}
