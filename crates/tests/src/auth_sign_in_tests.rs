use backend::AuthClient;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{StubBackend, ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD, EDITOR_EMAIL, EDITOR_PASSWORD};

#[tokio::test]
async fn test_sign_in_returns_live_session() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let session = auth
        .sign_in_with_password(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("valid credentials");

    assert_eq!(session.user.id, ADMIN_ID);
    assert_eq!(session.user.email_or_blank(), ADMIN_EMAIL);
    assert_eq!(session.user.display_name(), "Admin User");
    assert_eq!(session.expires_in, Some(3600));
    assert!(stub.token_is_live(&session.access_token));
}

#[tokio::test]
async fn test_sign_in_without_full_name_displays_email() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let session = auth
        .sign_in_with_password(EDITOR_EMAIL, EDITOR_PASSWORD)
        .await
        .expect("valid credentials");
    assert_eq!(session.user.display_name(), EDITOR_EMAIL);
}

#[tokio::test]
async fn test_sign_in_posts_password_grant() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());
    auth.sign_in_with_password(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("valid credentials");

    let req = stub.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/auth/v1/token");
    assert_eq!(req.query.get("grant_type").map(String::as_str), Some("password"));
    assert_eq!(req.header("apikey"), Some("anon-key"));

    let body = req.body.expect("credentials body");
    assert_eq!(body["email"], ADMIN_EMAIL);
    assert_eq!(body["password"], ADMIN_PASSWORD);
}

#[tokio::test]
async fn test_wrong_password_surfaces_provider_message() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let err = auth
        .sign_in_with_password(ADMIN_EMAIL, "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Invalid login credentials");
    assert_eq!(err.friendly_message(), "Invalid login credentials");
}

#[tokio::test]
async fn test_unknown_email_is_rejected() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let err = auth
        .sign_in_with_password("nobody@example.com", ADMIN_PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
