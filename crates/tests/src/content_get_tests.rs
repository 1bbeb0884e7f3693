use backend::{ContentStore, RestContentStore};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::StubBackend;

#[tokio::test]
async fn test_get_existing_content() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);

    let item = store.get_content("1").await.expect("row 1 exists");
    assert_eq!(item.title, "Welcome");
    assert_eq!(item.slug, "welcome");
    assert_eq!(item.author_name(), "Ada Lovelace");
}

#[tokio::test]
async fn test_get_requests_single_object() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);
    store.get_content("2").await.expect("row 2 exists");

    let req = stub.last_request();
    assert_eq!(req.query.get("id").map(String::as_str), Some("eq.2"));
    assert_eq!(req.header("accept"), Some("application/vnd.pgrst.object+json"));
}

#[tokio::test]
async fn test_get_missing_content_is_not_found() {
    let stub = StubBackend::start().await;
    let store = RestContentStore::new(stub.config.clone(), None);

    let err = store.get_content("does-not-exist").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
