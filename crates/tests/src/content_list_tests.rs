use backend::{ContentStore, RestContentStore};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ContentStatus, CONTENT_LIST_COLUMNS};

use crate::common::{self, StubBackend};

#[tokio::test]
async fn test_list_returns_rows_newest_first() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);

    let items = store.list_content().await.expect("list should succeed");
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
}

#[tokio::test]
async fn test_list_decodes_join_status_and_nulls() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);

    let items = store.list_content().await.expect("list should succeed");
    let welcome = items.iter().find(|i| i.id == "1").expect("row 1");
    assert_eq!(welcome.author_name(), "Ada Lovelace");
    assert_eq!(welcome.status, ContentStatus::Published);

    let draft = items.iter().find(|i| i.id == "2").expect("row 2");
    assert_eq!(draft.author_name(), "Unknown");
    assert_eq!(draft.published_at, None);

    let archived = items.iter().find(|i| i.id == "3").expect("row 3");
    assert_eq!(archived.excerpt, "");
    assert_eq!(archived.status, ContentStatus::Archived);
}

#[tokio::test]
async fn test_list_sends_select_and_order() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);
    store.list_content().await.expect("list should succeed");

    let req = stub.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/rest/v1/content");
    assert_eq!(req.query.get("select").map(String::as_str), Some(CONTENT_LIST_COLUMNS));
    assert_eq!(req.query.get("order").map(String::as_str), Some("created_at.desc"));
}

#[tokio::test]
async fn test_list_server_error_maps_to_internal() {
    let stub = StubBackend::start().await;
    stub.update(|s| s.forced_status = Some(500));
    let store = RestContentStore::new(stub.config.clone(), None);

    let err = store.list_content().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "forced failure");
}

#[tokio::test]
async fn test_list_permission_denied_maps_to_forbidden() {
    let stub = StubBackend::start().await;
    stub.update(|s| s.forced_status = Some(403));
    let store = RestContentStore::new(stub.config.clone(), None);

    let err = store.list_content().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn test_list_unreachable_backend_is_network_error() {
    let config = common::unreachable_config().await;
    let store = RestContentStore::new(config, None);

    let err = store.list_content().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(
        err.friendly_message(),
        "Unable to reach the server. Check your connection and try again."
    );
}

#[tokio::test]
async fn test_list_empty_table() {
    let stub = StubBackend::start().await;
    stub.update(|s| s.content.clear());
    let store = RestContentStore::new(stub.config.clone(), None);

    let items = store.list_content().await.expect("list should succeed");
    assert!(items.is_empty());
}
