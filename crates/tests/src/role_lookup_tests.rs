use backend::AuthClient;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Session, UserRole};

use crate::common::{
    StubBackend, ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD, EDITOR_EMAIL, EDITOR_PASSWORD,
};

async fn signed_in(auth: &AuthClient, email: &str, password: &str) -> Session {
    auth.sign_in_with_password(email, password)
        .await
        .expect("valid credentials")
}

#[tokio::test]
async fn test_admin_and_editor_roles_resolve() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());

    let admin = signed_in(&auth, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(auth.fetch_role(&admin).await.expect("role lookup"), UserRole::Admin);

    let editor = signed_in(&auth, EDITOR_EMAIL, EDITOR_PASSWORD).await;
    assert_eq!(auth.fetch_role(&editor).await.expect("role lookup"), UserRole::Editor);
}

#[tokio::test]
async fn test_role_query_filters_by_user() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());
    let admin = signed_in(&auth, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    auth.fetch_role(&admin).await.expect("role lookup");

    let req = stub.last_request();
    assert_eq!(req.path, "/rest/v1/profiles");
    assert_eq!(req.query.get("select").map(String::as_str), Some("role"));
    assert_eq!(req.query.get("id").map(String::as_str), Some("eq.user-admin"));
    assert_eq!(
        req.header("authorization").map(str::to_string),
        Some(format!("Bearer {}", admin.access_token))
    );
}

#[tokio::test]
async fn test_missing_profile_defaults_to_viewer() {
    let stub = StubBackend::start().await;
    stub.update(|s| {
        s.profiles.remove(ADMIN_ID);
    });
    let auth = AuthClient::new(stub.config.clone());
    let admin = signed_in(&auth, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    assert_eq!(auth.fetch_role(&admin).await.expect("role lookup"), UserRole::Viewer);
}

#[tokio::test]
async fn test_null_role_defaults_to_viewer() {
    let stub = StubBackend::start().await;
    stub.update(|s| {
        s.profiles.insert(ADMIN_ID.to_string(), None);
    });
    let auth = AuthClient::new(stub.config.clone());
    let admin = signed_in(&auth, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    assert_eq!(auth.fetch_role(&admin).await.expect("role lookup"), UserRole::Viewer);
}

#[tokio::test]
async fn test_unrecognized_role_defaults_to_viewer() {
    let stub = StubBackend::start().await;
    stub.update(|s| {
        s.profiles
            .insert(ADMIN_ID.to_string(), Some("superuser".to_string()));
    });
    let auth = AuthClient::new(stub.config.clone());
    let admin = signed_in(&auth, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    assert_eq!(auth.fetch_role(&admin).await.expect("role lookup"), UserRole::Viewer);
}

#[tokio::test]
async fn test_role_lookup_failure_is_reported() {
    let stub = StubBackend::start().await;
    let auth = AuthClient::new(stub.config.clone());
    let admin = signed_in(&auth, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    stub.update(|s| s.forced_status = Some(500));

    let err = auth.fetch_role(&admin).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
}
