use crate::html::{TableRecord, extract_csrf_token, parse_table};
use crate::{ClientError, ClientResult};

use roster_core::{
    CreateUserPayload, DeleteUserPayload, EditUserPayload, Result as SyncErrorResult, RoleId,
    RoleMap, RosterAccount, RosterSource, RosterWriter, normalize_username,
};

use log::{debug, info, warn};
use reqwest::header::REFERER;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;

const LOGIN_PATH: &str = "/login/";
const ROLES_LIST_PATH: &str = "/roles/list";
const USERS_ADD_PATH: &str = "/users/add";

/// Single page large enough for every roster we manage. Users beyond the
/// first page are not listed.
const USERS_PAGE_SIZE: usize = 1000;

const CSRF_HEADER: &str = "X-CSRFToken";
const INVALID_LOGIN_MARKER: &str = "Invalid login";

const USER_SKIP_COLUMNS: usize = 1;
const USER_COLUMNS: [&str; 6] = [
    "first_name",
    "last_name",
    "username",
    "email",
    "is_active",
    "role",
];
const USER_ID_COLUMN: &str = "user_id";

const ROLE_SKIP_COLUMNS: usize = 2;
const ROLE_COLUMNS: [&str; 1] = ["name"];
const ROLE_ID_COLUMN: &str = "role_id";

/// Cookie-session client for the Superset security views.
///
/// Call [`SupersetClient::authenticate`] once before anything else; every later
/// request carries the anti-forgery token it obtains.
pub struct SupersetClient {
    pub base_url: String,
    username: String,
    password: String,
    client: ReqwestClient,
    csrf_token: Option<String>,
}

impl SupersetClient {
    /// Create a new, unauthenticated client
    ///
    /// # Arguments
    /// * `base_url` - Superset URL (e.g., "https://superset.example.com")
    /// * `username` - Admin account used for user management
    /// * `password` - Password of that account
    pub fn new(base_url: &str, username: &str, password: &str) -> ClientResult<Self> {
        let client = ReqwestClient::builder().cookie_store(true).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            client,
            csrf_token: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.csrf_token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request carrying the anti-forgery headers
    fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self
            .csrf_token
            .as_deref()
            .ok_or_else(|| ClientError::not_authenticated())?;

        Ok(self
            .client
            .request(method, self.url(path))
            .header(CSRF_HEADER, token)
            .header(REFERER, self.url(LOGIN_PATH)))
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Fetch the anti-forgery token from the landing page and log in.
    ///
    /// Fails with `Authentication` when the login page reports bad credentials.
    pub async fn authenticate(&mut self) -> ClientResult<()> {
        let landing = self.client.get(self.url("/")).send().await?.text().await?;
        let token = extract_csrf_token(&landing)?;

        let form = [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("csrf_token", token.as_str()),
        ];

        let body = self
            .client
            .post(self.url(LOGIN_PATH))
            .header(CSRF_HEADER, token.as_str())
            .header(REFERER, self.url(LOGIN_PATH))
            .form(&form)
            .send()
            .await?
            .text()
            .await?;

        if body.contains(INVALID_LOGIN_MARKER) {
            return Err(ClientError::authentication(format!(
                "credentials for '{}' were rejected",
                self.username
            )));
        }

        self.csrf_token = Some(token);
        info!("Logged in to {} as {}", self.base_url, self.username);

        Ok(())
    }

    async fn get_html(&self, path: &str) -> ClientResult<String> {
        let response = self.request(Method::GET, path)?.send().await?;
        debug!("GET {} -> {}", path, response.status());
        Ok(response.text().await?)
    }

    /// POST a JSON body. The status is returned, never turned into an error.
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> ClientResult<StatusCode> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        let status = response.status();

        if status.is_success() {
            debug!("POST {} -> {}", path, status);
        } else {
            warn!("POST {} -> {}", path, status);
        }

        Ok(status)
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Role listing as lowercased name -> role id
    pub async fn list_roles(&self) -> ClientResult<RoleMap> {
        let html = self.get_html(ROLES_LIST_PATH).await?;
        let records = parse_table(&html, ROLE_SKIP_COLUMNS, &ROLE_COLUMNS, ROLE_ID_COLUMN)?;

        let roles: RoleMap = records
            .iter()
            .map(|record| {
                (
                    field(record, "name"),
                    RoleId(field(record, ROLE_ID_COLUMN)),
                )
            })
            .collect();

        debug!("Listed {} roles", roles.len());
        Ok(roles)
    }

    /// First page of the user listing, roles resolved through `roles`
    pub async fn list_users(&self, roles: &RoleMap) -> ClientResult<Vec<RosterAccount>> {
        let path = format!("/users/list?psize_UserDBModelView={USERS_PAGE_SIZE}");
        let html = self.get_html(&path).await?;
        let records = parse_table(&html, USER_SKIP_COLUMNS, &USER_COLUMNS, USER_ID_COLUMN)?;

        if records.len() >= USERS_PAGE_SIZE {
            warn!(
                "User listing returned a full page of {} rows; users beyond it are not synced",
                USERS_PAGE_SIZE
            );
        }

        Ok(records
            .iter()
            .map(|record| roster_account(record, roles))
            .collect())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub async fn create_user(&self, payload: &CreateUserPayload) -> ClientResult<StatusCode> {
        self.post_json(USERS_ADD_PATH, payload).await
    }

    /// Edit a user. Whether `active` is present decides the activation state.
    pub async fn update_user(
        &self,
        user_id: &str,
        payload: &EditUserPayload,
    ) -> ClientResult<StatusCode> {
        self.post_json(&format!("/users/edit/{user_id}"), payload)
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> ClientResult<StatusCode> {
        self.post_json(
            &format!("/users/delete/{user_id}"),
            &DeleteUserPayload::default(),
        )
        .await
    }
}

fn field(record: &TableRecord, name: &str) -> String {
    record.get(name).cloned().unwrap_or_default()
}

/// `"[Admin, Gamma]"` -> `["Admin", "Gamma"]`
pub(crate) fn split_roles(raw: &str) -> Vec<String> {
    raw.replace('[', "")
        .replace(']', "")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn parse_active(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

fn roster_account(record: &TableRecord, roles: &RoleMap) -> RosterAccount {
    let role = split_roles(&field(record, "role"));
    let role_id = role.iter().map(|name| roles.get(name).cloned()).collect();

    RosterAccount {
        user_id: field(record, USER_ID_COLUMN),
        username: normalize_username(&field(record, "username")),
        email: field(record, "email"),
        first_name: field(record, "first_name"),
        last_name: field(record, "last_name"),
        is_active: parse_active(&field(record, "is_active")),
        role,
        role_id,
    }
}

impl RosterSource for SupersetClient {
    async fn list_roles(&self) -> SyncErrorResult<RoleMap> {
        Ok(SupersetClient::list_roles(self).await?)
    }

    async fn list_users(&self, roles: &RoleMap) -> SyncErrorResult<Vec<RosterAccount>> {
        Ok(SupersetClient::list_users(self, roles).await?)
    }
}

impl RosterWriter for SupersetClient {
    async fn create_user(&self, payload: &CreateUserPayload) -> SyncErrorResult<u16> {
        Ok(SupersetClient::create_user(self, payload).await?.as_u16())
    }

    async fn update_user(
        &self,
        user_id: &str,
        payload: &EditUserPayload,
    ) -> SyncErrorResult<u16> {
        Ok(SupersetClient::update_user(self, user_id, payload)
            .await?
            .as_u16())
    }

    async fn delete_user(&self, user_id: &str) -> SyncErrorResult<u16> {
        Ok(SupersetClient::delete_user(self, user_id).await?.as_u16())
    }
}
