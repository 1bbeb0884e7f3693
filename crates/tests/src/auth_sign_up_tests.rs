use backend::AuthClient;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{StubBackend, ADMIN_EMAIL};

#[tokio::test]
async fn test_sign_up_returns_session_with_name() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let session = auth
        .sign_up("new@example.com", "s3cret-pass", "New Person")
        .await
        .expect("sign-up should succeed")
        .expect("no confirmation required");

    assert_eq!(session.user.email_or_blank(), "new@example.com");
    assert_eq!(session.user.display_name(), "New Person");
    assert!(stub.token_is_live(&session.access_token));
}

#[tokio::test]
async fn test_sign_up_sends_full_name_as_metadata() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());
    auth.sign_up("new@example.com", "s3cret-pass", "New Person")
        .await
        .expect("sign-up should succeed");

    let req = stub.last_request();
    assert_eq!(req.path, "/auth/v1/signup");
    let body = req.body.expect("sign-up body");
    assert_eq!(body["email"], "new@example.com");
    assert_eq!(body["data"]["full_name"], "New Person");
}

#[tokio::test]
async fn test_sign_up_pending_confirmation_has_no_session() {
    let stub = StubBackend::start().await;
    stub.update(|s| s.require_confirmation = true);
    let auth = AuthClient::new(stub.config.clone());

    let outcome = auth
        .sign_up("confirm@example.com", "s3cret-pass", "Confirm Me")
        .await
        .expect("sign-up should succeed");
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_sign_up_existing_email_is_validation_error() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let err = auth
        .sign_up(ADMIN_EMAIL, "another-pass", "Someone")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.friendly_message(), "User already registered");
}
