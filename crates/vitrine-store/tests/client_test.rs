use httpmock::prelude::*;
use httpmock::Method::PATCH;
use vitrine_store::{
    Filter, NewMessage, Order, RecordStore, SelectQuery, Service, StoreError, MESSAGES, SERVICES,
};

fn store_for(server: &MockServer) -> RecordStore {
    RecordStore::connect(&server.base_url(), "test-key").unwrap()
}

#[tokio::test]
async fn select_sends_order_limit_and_auth_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/services")
            .header("apikey", "test-key")
            .header("authorization", "Bearer test-key")
            .query_param("select", "*")
            .query_param("order", "created_at.asc")
            .query_param("limit", "3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": "s1",
                    "title": "Web",
                    "description": "Sites",
                    "icon": "fa-globe",
                    "features": ["Design", "SEO"],
                    "created_at": "2024-01-01T00:00:00Z"
                }
            ]));
    });

    let store = store_for(&server);
    let query = SelectQuery::new().order(Order::asc("created_at")).limit(3);
    let services: Vec<Service> = store.select(SERVICES, &query).await.unwrap();

    mock.assert();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, "s1");
    assert_eq!(services[0].features, vec!["Design", "SEO"]);
}

#[tokio::test]
async fn select_applies_equality_filter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/messages")
            .query_param("read", "eq.false");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let store = store_for(&server);
    let query = SelectQuery::new().filter(Filter::eq("read", "false"));
    let rows: Vec<vitrine_store::Message> = store.select(MESSAGES, &query).await.unwrap();

    mock.assert();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn insert_returns_store_representation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/messages")
            .header("prefer", "return=representation")
            .json_body_partial(r#"{"name": "Ada", "message": "hello"}"#);
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": "m1",
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "hello",
                    "read": false,
                    "created_at": "2024-01-01T00:00:00Z"
                }
            ]));
    });

    let store = store_for(&server);
    let row: vitrine_store::Message = store
        .insert(
            MESSAGES,
            &NewMessage {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: None,
                subject: None,
                body: "hello".into(),
            },
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(row.id, "m1");
    assert!(!row.read);
}

#[tokio::test]
async fn update_patches_by_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/rest/v1/messages")
            .query_param("id", "eq.m1")
            .json_body(serde_json::json!({"read": true}));
        then.status(204);
    });

    let store = store_for(&server);
    store
        .update(MESSAGES, "m1", &serde_json::json!({"read": true}))
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn delete_targets_one_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/services")
            .query_param("id", "eq.s1");
        then.status(204);
    });

    let store = store_for(&server);
    store.delete(SERVICES, "s1").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn count_reads_content_range_total() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/messages")
            .header("prefer", "count=exact")
            .query_param("read", "eq.false");
        then.status(206)
            .header("Content-Range", "0-0/42")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"id": "m1"}]));
    });

    let store = store_for(&server);
    let filter = Filter::eq("read", "false");
    let total = store.count(MESSAGES, Some(&filter)).await.unwrap();

    mock.assert();
    assert_eq!(total, 42);
}

#[tokio::test]
async fn rejection_carries_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/rest/v1/services");
        then.status(403).body("permission denied for table services");
    });

    let store = store_for(&server);
    let err = store.delete(SERVICES, "s1").await.unwrap_err();
    match err {
        StoreError::Rejected { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("permission denied"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
