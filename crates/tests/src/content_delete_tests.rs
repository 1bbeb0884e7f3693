use backend::{ContentStore, RestContentStore};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::StubBackend;

#[tokio::test]
async fn test_delete_removes_row() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), Some("token".to_string()));

    store.delete_content("2").await.expect("delete should succeed");
    assert_eq!(stub.content_ids(), vec!["1", "3"]);

    let items = store.list_content().await.expect("list should succeed");
    assert!(items.iter().all(|i| i.id != "2"));
}

#[tokio::test]
async fn test_delete_filters_by_id_and_asks_for_rows() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);
    store.delete_content("1").await.expect("delete should succeed");

    let req = stub.last_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.query.get("id").map(String::as_str), Some("eq.1"));
    assert_eq!(req.header("prefer"), Some("return=representation"));
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);

    let err = store.delete_content("99").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(stub.content_ids(), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_delete_hidden_by_policy_is_not_silent() {
    let stub = StubBackend::start().await;
    stub.update(|s| {
        s.protected_ids.insert("1".to_string());
    });
    let store = RestContentStore::new(stub.config.clone(), None);

    let err = store.delete_content("1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(stub.content_ids(), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_delete_twice_second_is_not_found() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);

    store.delete_content("3").await.expect("first delete succeeds");
    let err = store.delete_content("3").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_forbidden_leaves_rows() {
    let stub = StubBackend::start().await;
    stub.update(|s| s.forced_status = Some(403));
    let store = RestContentStore::new(stub.config.clone(), None);

    let err = store.delete_content("1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(stub.content_ids(), vec!["1", "2", "3"]);
}
