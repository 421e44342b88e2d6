//! Authentication flow against the fake backend.

mod common;

use inspecta_client::ClientError;
use inspecta_shared::types::UserId;
use inspecta_shared::{Role, Session, SessionUser};
use serde_json::json;

use common::{access_token, expired_token, spawn};

#[tokio::test]
async fn test_login_sends_single_contract_and_stores_session() {
    let harness = spawn().await;

    let user = harness
        .client
        .login(" rahim@example.org ", "secret", Role::Inspector)
        .await
        .unwrap();

    assert_eq!(user.role, Role::Inspector);
    assert_eq!(user.branch_name.as_deref(), Some("Motijheel"));
    assert_eq!(harness.auth.access_token().as_deref(), Some(access_token().as_str()));
    assert_eq!(harness.auth.branch_name().as_deref(), Some("Motijheel"));

    let logins: Vec<_> = harness
        .backend
        .requests()
        .into_iter()
        .filter(|r| r.uri == "/api/token/")
        .collect();
    assert_eq!(logins.len(), 1);
    assert_eq!(
        harness.backend.body("/api/token/").unwrap(),
        json!({"email": "rahim@example.org", "password": "secret", "role": "inspector"})
    );
}

#[tokio::test]
async fn test_login_failure_keeps_signed_out() {
    let harness = spawn().await;

    let err = harness
        .client
        .login("rahim@example.org", "wrong", Role::Inspector)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert_eq!(
        err.to_string(),
        "Authentication required: No active account found with the given credentials"
    );
    assert!(!harness.auth.is_signed_in());
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let harness = common::signed_in("inspector", Some("Motijheel")).await;

    let me = harness.client.current_user().await.unwrap();
    assert_eq!(me.employee_id.as_deref(), Some("EMP-7"));

    let seen = harness
        .backend
        .requests()
        .into_iter()
        .find(|r| r.uri == "/api/current-user/")
        .unwrap();
    assert_eq!(seen.bearer, Some(format!("Bearer {}", access_token())));
}

#[tokio::test]
async fn test_signed_out_calls_fail_without_request() {
    let harness = spawn().await;

    let err = harness.client.current_user().await.unwrap_err();
    assert_eq!(err.status_code(), 401);
    assert!(harness.backend.requests().is_empty());
}

#[tokio::test]
async fn test_expired_session_fails_without_request() {
    let harness = spawn().await;
    harness.auth.sign_in(Session {
        access_token: expired_token(),
        refresh_token: common::REFRESH_TOKEN.into(),
        user: SessionUser {
            id: UserId::new(1),
            user_name: "admin".into(),
            email: "admin@example.org".into(),
            role: Role::Admin,
            branch_name: None,
        },
    });

    let err = harness.client.current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "Session expired"));

    let err = harness.client.list_branch_admins().await.unwrap_err();
    assert_eq!(err.status_code(), 401);

    let err = harness.client.delete_user(UserId::new(21)).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));

    assert!(harness.backend.requests().is_empty());
    assert!(harness.auth.is_signed_in());
}

#[tokio::test]
async fn test_logout_clears_session_even_if_backend_fails() {
    let harness = common::signed_in("inspector", Some("Motijheel")).await;

    harness.client.logout().await;

    assert!(!harness.auth.is_signed_in());
    assert_eq!(
        harness.backend.body("/api/token/logout/").unwrap(),
        json!({"refresh": common::REFRESH_TOKEN})
    );
}

#[tokio::test]
async fn test_logout_when_signed_out_sends_nothing() {
    let harness = spawn().await;
    harness.client.logout().await;
    assert!(!harness.backend.saw("/api/token/logout/"));
}

#[tokio::test]
async fn test_password_reset_returns_detail() {
    let harness = spawn().await;
    let detail = harness
        .client
        .password_reset("rahim@example.org")
        .await
        .unwrap();
    assert_eq!(detail, "If that email exists, a reset link was sent.");
}
