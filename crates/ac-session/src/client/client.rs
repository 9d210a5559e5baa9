use crate::client::error::{ClientError, Result as ClientResult};

use ac_config::ApiConfig;
use ac_core::{Identity, NewUser, Registration, TokenPair, UserUpdate};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the admin REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root including version prefix (e.g., "http://127.0.0.1:8000/api/v1")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: Self::normalize_base_url(base_url),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: Self::normalize_base_url(base_url),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    fn normalize_base_url(base_url: &str) -> String {
        base_url.trim().trim_end_matches('/').to_string()
    }

    /// Build a request, attaching the bearer token when one is given
    fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");

        let req = self.client.request(method, &url);
        match access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request and decode the body, mapping non-2xx responses to `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_detail(status, &body),
            ));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(method, path, access_token).json(body);
        self.execute(req).await
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for an access/refresh token pair
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<TokenPair> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        self.send_json(Method::POST, "/auth/login", None, &body)
            .await
    }

    /// Create an account through self-service sign-up
    pub async fn register(&self, registration: &Registration) -> ClientResult<Identity> {
        self.send_json(Method::POST, "/auth/register", None, registration)
            .await
    }

    /// Resolve the identity the access token belongs to
    pub async fn current_identity(&self, access_token: &str) -> ClientResult<Identity> {
        let req = self.request(Method::GET, "/auth/me", Some(access_token));
        self.execute(req).await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List users, paginated by `skip`/`limit`
    pub async fn list_users(
        &self,
        access_token: &str,
        skip: u32,
        limit: u32,
    ) -> ClientResult<Vec<Identity>> {
        let req = self.request(
            Method::GET,
            &format!("/users/?skip={}&limit={}", skip, limit),
            Some(access_token),
        );
        self.execute(req).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, access_token: &str, id: i64) -> ClientResult<Identity> {
        let req = self.request(Method::GET, &format!("/users/{}", id), Some(access_token));
        self.execute(req).await
    }

    /// Create a user
    pub async fn create_user(&self, access_token: &str, user: &NewUser) -> ClientResult<Identity> {
        self.send_json(Method::POST, "/users/", Some(access_token), user)
            .await
    }

    /// Update a user; only the fields set in `update` are sent
    pub async fn update_user(
        &self,
        access_token: &str,
        id: i64,
        update: &UserUpdate,
    ) -> ClientResult<Identity> {
        self.send_json(
            Method::PUT,
            &format!("/users/{}", id),
            Some(access_token),
            update,
        )
        .await
    }

    /// Delete a user, returning the removed record
    pub async fn delete_user(&self, access_token: &str, id: i64) -> ClientResult<Identity> {
        let req = self.request(Method::DELETE, &format!("/users/{}", id), Some(access_token));
        self.execute(req).await
    }
}

/// Pull a readable message out of an error body.
///
/// The API answers with `{"detail": "..."}`, or with a list of
/// `{"msg": "..."}` entries for request validation failures.
pub(crate) fn error_detail(status: StatusCode, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    let message = match detail {
        Some(Value::String(message)) => Some(message),
        Some(Value::Array(entries)) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    };

    message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
    })
}
