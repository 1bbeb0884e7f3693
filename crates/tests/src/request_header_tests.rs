use backend::{ContentStore, RestContentStore};
use pretty_assertions::assert_eq;

use crate::common::{StubBackend, ANON_KEY};

#[tokio::test]
async fn test_user_token_is_sent_as_bearer() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), Some("user-token".to_string()));
    store.list_content().await.expect("list should succeed");

    let req = stub.last_request();
    assert_eq!(req.header("apikey"), Some(ANON_KEY));
    assert_eq!(req.header("authorization"), Some("Bearer user-token"));
}

#[tokio::test]
async fn test_anon_key_is_bearer_without_session() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);
    store.list_content().await.expect("list should succeed");

    let req = stub.last_request();
    assert_eq!(req.header("authorization"), Some("Bearer anon-key"));
}

#[tokio::test]
async fn test_blank_token_falls_back_to_anon_key() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), Some(String::new()));
    store.list_content().await.expect("list should succeed");

    let req = stub.last_request();
    assert_eq!(req.header("authorization"), Some("Bearer anon-key"));
}

#[tokio::test]
async fn test_empty_anon_key_sends_no_auth_headers() {
    let stub = StubBackend::start().await;
    let mut config = stub.config.clone();
    config.anon_key = String::new();
    let store = RestContentStore::new(config, None);
    store.list_content().await.expect("list should succeed");

    let req = stub.last_request();
    assert_eq!(req.header("apikey"), None);
    assert_eq!(req.header("authorization"), None);
}
