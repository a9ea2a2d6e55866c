mod html;

pub(crate) const USERS_LIST_HTML: &str = include_str!("../../tests/fixtures/users_list.html");
pub(crate) const ROLES_LIST_HTML: &str = include_str!("../../tests/fixtures/roles_list.html");
pub(crate) const LOGIN_PAGE_HTML: &str = include_str!("../../tests/fixtures/login_page.html");
