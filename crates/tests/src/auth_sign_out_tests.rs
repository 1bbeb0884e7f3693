use backend::AuthClient;
use pretty_assertions::assert_eq;

use crate::common::{self, StubBackend, ADMIN_EMAIL, ADMIN_PASSWORD};

#[tokio::test]
async fn test_sign_out_revokes_token() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());
    let session = auth
        .sign_in_with_password(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("valid credentials");

    auth.sign_out(&session.access_token)
        .await
        .expect("sign-out should succeed");

    assert!(!stub.token_is_live(&session.access_token));
    let req = stub.last_request();
    assert_eq!(req.path, "/auth/v1/logout");
    assert_eq!(
        req.header("authorization").map(str::to_string),
        Some(format!("Bearer {}", session.access_token))
    );
}

#[tokio::test]
async fn test_sign_out_twice_is_ok() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());
    let session = auth
        .sign_in_with_password(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("valid credentials");

    assert!(auth.sign_out(&session.access_token).await.is_ok());
    assert!(auth.sign_out(&session.access_token).await.is_ok());
}

#[tokio::test]
async fn test_sign_out_unknown_token_is_ok() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    assert!(auth.sign_out("token-that-never-existed").await.is_ok());
}

#[tokio::test]
async fn test_sign_out_unreachable_backend_is_error() {
    let auth = AuthClient::new(common::unreachable_config().await);

    let err = auth.sign_out("any-token").await.unwrap_err();
    assert_eq!(err.kind, shared_types::AppErrorKind::Network);
}
