//! Session store behaviour against a wiremock API

mod common;

use common::*;

use ac_core::{Registration, Role};
use ac_session::{
    Client, FileTokenStore, GuardDecision, MemoryTokenStore, Navigation, Requirement,
    SessionError, SessionStatus, SessionStore, TokenStore, View,
};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// =========================================================================
// Initialization
// =========================================================================

#[tokio::test]
async fn given_new_session_when_not_initialized_then_pending() {
    let server = MockServer::start().await;
    let session = session(&server, MemoryTokenStore::new());

    assert_eq!(session.status(), SessionStatus::Pending);
    assert!(!session.is_ready());
    assert!(session.current_identity().is_none());
}

#[tokio::test]
async fn given_no_persisted_token_when_initialize_then_anonymous_and_ready() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(0)
        .mount(&server)
        .await;
    let session = session(&server, MemoryTokenStore::new());

    // When
    session.initialize().await;

    // Then
    assert!(session.is_ready());
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert!(session.current_identity().is_none());
}

#[tokio::test]
async fn given_accepted_token_when_initialize_then_identity_restored_and_token_kept() {
    // Given
    let server = MockServer::start().await;
    mount_me(&server, ACCESS_TOKEN, user_json()).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));

    // When
    session.initialize().await;

    // Then
    let identity = session.current_identity().unwrap();
    assert_eq!(identity.id, 7);
    assert_eq!(identity.email, USER_EMAIL);
    assert!(session.is_authenticated());
    assert_eq!(session.access_token().as_deref(), Some(ACCESS_TOKEN));
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
}

#[tokio::test]
async fn given_rejected_token_when_initialize_then_anonymous_and_token_erased() {
    // Given
    let server = MockServer::start().await;
    mount_me_status(&server, 401).await;
    let session = session(&server, MemoryTokenStore::with_tokens(stale_token_pair()));

    // When
    session.initialize().await;

    // Then
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert!(session.access_token().is_none());
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_token_for_deleted_user_when_initialize_then_token_erased() {
    let server = MockServer::start().await;
    mount_me_status(&server, 404).await;
    let session = session(&server, MemoryTokenStore::with_tokens(stale_token_pair()));

    session.initialize().await;

    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_server_error_when_initialize_then_anonymous_but_token_kept() {
    // Given
    let server = MockServer::start().await;
    mount_me_status(&server, 503).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));

    // When
    session.initialize().await;

    // Then
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
}

#[tokio::test]
async fn given_unreachable_server_when_initialize_then_anonymous_but_token_kept() {
    let session = SessionStore::new(
        Client::new(&unreachable_url()),
        MemoryTokenStore::with_tokens(token_pair()),
    );

    session.initialize().await;

    assert!(session.is_ready());
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
}

#[tokio::test]
async fn given_transient_failure_and_keep_disabled_when_initialize_then_token_erased() {
    let server = MockServer::start().await;
    mount_me_status(&server, 503).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()))
        .keep_token_on_transient_failure(false);

    session.initialize().await;

    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_slow_server_when_initialize_with_timeout_then_anonymous_but_token_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_json())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let client = Client::with_timeout(&api_url(&server), Duration::from_millis(200)).unwrap();
    let session = SessionStore::new(client, MemoryTokenStore::with_tokens(token_pair()));

    session.initialize().await;

    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
}

#[tokio::test]
async fn given_initialized_session_when_initialize_again_then_no_second_identity_fetch() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));

    // When
    session.initialize().await;
    session.initialize().await;

    // Then
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn given_concurrent_initialize_calls_when_run_then_single_identity_fetch() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_json())
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let session = Arc::new(session(&server, MemoryTokenStore::with_tokens(token_pair())));

    // When
    let first = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.initialize().await }
    });
    let second = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.initialize().await }
    });
    first.await.unwrap();
    second.await.unwrap();
    session.wait_ready().await;

    // Then
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn given_subscriber_when_initialize_completes_then_notified() {
    let server = MockServer::start().await;
    mount_me(&server, ACCESS_TOKEN, admin_json()).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));
    let mut rx = session.subscribe();
    assert!(!rx.borrow().is_ready());

    session.initialize().await;

    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update();
    assert!(state.is_ready());
    assert_eq!(state.identity().map(|i| i.role), Some(Role::Admin));
}

#[tokio::test]
async fn given_corrupted_token_file_when_initialize_then_anonymous_and_file_removed() {
    let server = MockServer::start().await;
    let temp = tempfile::TempDir::new().unwrap();
    let token_path = temp.path().join("session.json");
    std::fs::write(&token_path, "{ not json").unwrap();
    let session = SessionStore::new(
        Client::new(&api_url(&server)),
        FileTokenStore::new(&token_path),
    );

    session.initialize().await;

    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert!(!token_path.exists());
}

// =========================================================================
// Guard while initializing
// =========================================================================

#[tokio::test]
async fn given_pending_session_when_guard_checked_then_never_redirects() {
    let server = MockServer::start().await;
    let session = session(&server, MemoryTokenStore::new());

    for requirement in [
        Requirement::Public,
        Requirement::Authenticated,
        Requirement::Admin,
    ] {
        assert_eq!(session.check(requirement), GuardDecision::Defer);
    }
    assert_eq!(session.navigate("/users"), Navigation::Loading);
}

// =========================================================================
// Login
// =========================================================================

#[tokio::test]
async fn given_valid_credentials_when_login_then_authenticated_view_allowed() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .and(body_json(json!({ "email": USER_EMAIL, "password": PASSWORD })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .expect(1)
        .mount(&server)
        .await;
    mount_me(&server, ACCESS_TOKEN, user_json()).await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;

    // When
    let identity = session.login(USER_EMAIL, PASSWORD).await.unwrap();

    // Then
    assert_eq!(identity.email, USER_EMAIL);
    assert_eq!(session.check(Requirement::Authenticated), GuardDecision::Allow);
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
    assert_eq!(session.access_token().as_deref(), Some(ACCESS_TOKEN));
}

#[tokio::test]
async fn given_invalid_credentials_when_login_then_authentication_error_and_redirect_to_login() {
    // Given
    let server = MockServer::start().await;
    mount_login_rejected(&server).await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;

    // When
    let result = session.login(USER_EMAIL, "wrong-password").await;

    // Then
    let err = result.unwrap_err();
    assert!(matches!(err, SessionError::Authentication { .. }));
    assert_eq!(err.user_message(), "Incorrect email or password");
    assert!(session.current_identity().is_none());
    assert_eq!(
        session.check(Requirement::Authenticated),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_invalid_credentials_when_login_then_previous_tokens_untouched() {
    let server = MockServer::start().await;
    mount_me_status(&server, 401).await;
    mount_login_rejected(&server).await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;
    session.token_store().save(&stale_token_pair()).unwrap();

    let _ = session.login(USER_EMAIL, "wrong-password").await;

    assert_eq!(
        session.token_store().load().unwrap(),
        Some(stale_token_pair())
    );
}

#[tokio::test]
async fn given_identity_fetch_fails_after_login_when_login_then_nothing_persisted() {
    // Given
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_me_status(&server, 500).await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;

    // When
    let result = session.login(USER_EMAIL, PASSWORD).await;

    // Then
    assert!(matches!(result, Err(SessionError::Network { .. })));
    assert!(session.current_identity().is_none());
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_unreachable_server_when_login_then_network_error() {
    let session = SessionStore::new(Client::new(&unreachable_url()), MemoryTokenStore::new());
    session.initialize().await;

    let result = session.login(USER_EMAIL, PASSWORD).await;

    assert!(matches!(result, Err(SessionError::Network { .. })));
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn given_blank_email_when_login_then_validation_error_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .expect(0)
        .mount(&server)
        .await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;

    let result = session.login("   ", PASSWORD).await;

    assert!(matches!(result, Err(SessionError::Validation { .. })));
}

#[tokio::test]
async fn given_pending_session_when_login_then_not_ready() {
    let server = MockServer::start().await;
    let session = session(&server, MemoryTokenStore::new());

    let result = session.login(USER_EMAIL, PASSWORD).await;

    assert!(matches!(result, Err(SessionError::NotReady { .. })));
}

#[tokio::test]
async fn given_file_store_when_login_then_token_file_written() {
    let server = MockServer::start().await;
    mount_successful_login(&server, user_json()).await;
    let temp = tempfile::TempDir::new().unwrap();
    let token_path = temp.path().join("session.json");
    let session = SessionStore::new(
        Client::new(&api_url(&server)),
        FileTokenStore::new(&token_path),
    );
    session.initialize().await;

    session.login(USER_EMAIL, PASSWORD).await.unwrap();

    assert!(token_path.exists());
    assert_eq!(
        FileTokenStore::new(&token_path).load().unwrap(),
        Some(token_pair())
    );
}

// =========================================================================
// Roles
// =========================================================================

#[tokio::test]
async fn given_regular_user_when_admin_view_checked_then_redirect_to_unauthorized() {
    let server = MockServer::start().await;
    mount_successful_login(&server, user_json()).await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;
    session.login(USER_EMAIL, PASSWORD).await.unwrap();

    assert_eq!(
        session.check(Requirement::Admin),
        GuardDecision::RedirectToUnauthorized
    );
    assert_eq!(
        session.navigate("/users"),
        Navigation::Redirect(View::Unauthorized)
    );
}

#[tokio::test]
async fn given_admin_when_admin_view_checked_then_allow() {
    let server = MockServer::start().await;
    mount_successful_login(&server, admin_json()).await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;
    session.login(ADMIN_EMAIL, PASSWORD).await.unwrap();

    assert_eq!(session.check(Requirement::Admin), GuardDecision::Allow);
    assert_eq!(session.navigate("/users"), Navigation::Render(View::Users));
}

// =========================================================================
// Logout
// =========================================================================

#[tokio::test]
async fn given_signed_in_session_when_logout_then_redirect_to_login_and_tokens_erased() {
    // Given
    let server = MockServer::start().await;
    mount_me(&server, ACCESS_TOKEN, admin_json()).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));
    session.initialize().await;
    assert!(session.is_authenticated());

    // When
    session.logout().unwrap();

    // Then
    assert_eq!(
        session.check(Requirement::Authenticated),
        GuardDecision::RedirectToLogin
    );
    assert!(session.access_token().is_none());
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_anonymous_session_when_logout_then_still_redirect_to_login() {
    let server = MockServer::start().await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;

    session.logout().unwrap();

    assert_eq!(
        session.check(Requirement::Authenticated),
        GuardDecision::RedirectToLogin
    );
}

/// `GET /auth/me` that accepts the saved token, but only after `delay`
async fn mount_slow_me(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_json())
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_startup_check_in_flight_when_logout_then_stays_signed_out() {
    // Given
    let server = MockServer::start().await;
    mount_slow_me(&server, Duration::from_millis(300)).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));

    // When
    let (_, logout) = tokio::join!(session.initialize(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.logout()
    });

    // Then
    assert!(logout.is_ok());
    assert!(session.is_ready());
    assert!(session.current_identity().is_none());
    assert!(session.access_token().is_none());
    assert_eq!(
        session.check(Requirement::Authenticated),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(session.token_store().load().unwrap(), None);
}

#[tokio::test]
async fn given_startup_check_in_flight_when_login_then_not_ready_and_startup_unaffected() {
    // Given
    let server = MockServer::start().await;
    mount_slow_me(&server, Duration::from_millis(300)).await;
    mount_login_ok(&server).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));

    // When
    let (_, login) = tokio::join!(session.initialize(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.login(USER_EMAIL, PASSWORD).await
    });

    // Then
    assert!(matches!(login, Err(SessionError::NotReady { .. })));
    assert!(session.is_authenticated());
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
}

#[tokio::test]
async fn given_logout_during_startup_when_signing_in_again_then_authenticated() {
    let server = MockServer::start().await;
    mount_slow_me(&server, Duration::from_millis(200)).await;
    mount_login_ok(&server).await;
    let session = session(&server, MemoryTokenStore::with_tokens(token_pair()));
    let (_, logout) = tokio::join!(session.initialize(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.logout()
    });
    logout.unwrap();

    session.login(USER_EMAIL, PASSWORD).await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.token_store().load().unwrap(), Some(token_pair()));
}

// =========================================================================
// Registration
// =========================================================================

#[tokio::test]
async fn given_valid_registration_when_register_then_identity_returned_and_session_unchanged() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/register")))
        .and(body_json(json!({
            "email": USER_EMAIL,
            "full_name": "Jane Doe",
            "password": PASSWORD
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;
    let session = session(&server, MemoryTokenStore::new());
    session.initialize().await;

    // When
    let identity = session
        .register(&Registration::new(USER_EMAIL, "Jane Doe", PASSWORD))
        .await
        .unwrap();

    // Then
    assert_eq!(identity.display_name(), "Jane Doe");
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn given_short_password_when_register_then_validation_error_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/register")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(0)
        .mount(&server)
        .await;
    let session = session(&server, MemoryTokenStore::new());

    let result = session
        .register(&Registration::new(USER_EMAIL, "Jane Doe", "short"))
        .await;

    assert!(matches!(result, Err(SessionError::Validation { .. })));
}

#[tokio::test]
async fn given_duplicate_email_when_register_then_api_error_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/register")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Email already registered"
        })))
        .mount(&server)
        .await;
    let session = session(&server, MemoryTokenStore::new());

    let err = session
        .register(&Registration::new(USER_EMAIL, "Jane Doe", PASSWORD))
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Api { .. }));
    assert_eq!(err.user_message(), "Email already registered");
}
