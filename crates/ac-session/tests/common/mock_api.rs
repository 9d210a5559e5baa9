#![allow(dead_code)]

use crate::common::fixtures::{ACCESS_TOKEN, login_response};

use ac_session::{Client, MemoryTokenStore, SessionStore};

use std::net::TcpListener;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const API_PREFIX: &str = "/api/v1";

/// Base URL the client should use against `server`
pub fn api_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), API_PREFIX)
}

pub fn api_path(suffix: &str) -> String {
    format!("{}{}", API_PREFIX, suffix)
}

/// A URL nothing is listening on, for connection-refused failures
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, API_PREFIX)
}

pub fn session(server: &MockServer, tokens: MemoryTokenStore) -> SessionStore<MemoryTokenStore> {
    SessionStore::new(Client::new(&api_url(server)), tokens)
}

/// `POST /auth/login` accepting any credentials
pub async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .mount(server)
        .await;
}

/// `POST /auth/login` refusing credentials the way the API does
pub async fn mount_login_rejected(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "detail": "Incorrect email or password"
            })),
        )
        .mount(server)
        .await;
}

/// `GET /auth/me` answering `identity` for `token`
pub async fn mount_me(server: &MockServer, token: &str, identity: Value) {
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity))
        .mount(server)
        .await;
}

/// `GET /auth/me` answering `status` for any token
pub async fn mount_me_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(server)
        .await;
}

/// Login plus `/auth/me` for the freshly issued token
pub async fn mount_successful_login(server: &MockServer, identity: Value) {
    mount_login_ok(server).await;
    mount_me(server, ACCESS_TOKEN, identity).await;
}
