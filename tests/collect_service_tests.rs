//! Mocked-remote tests for the collect service.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_rest::{ClientError, Collect, CollectFilter, CollectService, Credentials, RequestExecutor};

async fn collect_service(server: &MockServer) -> CollectService {
    let credentials = Credentials::builder()
        .shop("test-shop")
        .access_token("test-token")
        .base_url(server.uri())
        .build()
        .unwrap();
    CollectService::new(Arc::new(RequestExecutor::new(&credentials)))
}

#[tokio::test]
async fn test_count_returns_exact_integer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/collects/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 101})))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let count = service.count(None).await.unwrap();
    assert_eq!(count, 101);
}

#[tokio::test]
async fn test_count_passes_filter_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/collects/count.json"))
        .and(query_param("collection_id", "841564295"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let filter = CollectFilter {
        collection_id: Some(841_564_295),
        ..CollectFilter::default()
    };
    let count = service.count(Some(&filter)).await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_list_passes_all_set_filter_fields_unmodified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/collects.json"))
        .and(query_param("product_id", "632910392"))
        .and(query_param("since_id", "100"))
        .and(query_param("limit", "50"))
        .and(query_param("fields", "id,product_id,collection_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collects": [
                {"id": 101, "product_id": 632_910_392u64, "collection_id": 841_564_295u64},
                {"id": 102, "product_id": 632_910_392u64, "collection_id": 841_564_296u64}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let filter = CollectFilter {
        product_id: Some(632_910_392),
        since_id: Some(100),
        limit: Some(50),
        fields: Some(vec![
            "id".to_string(),
            "product_id".to_string(),
            "collection_id".to_string(),
        ]),
        ..CollectFilter::default()
    };

    let collects = service.list(Some(&filter)).await.unwrap();
    assert_eq!(collects.len(), 2);
    assert_eq!(collects[0].id, Some(101));
    assert_eq!(collects[1].collection_id, Some(841_564_296));
}

#[tokio::test]
async fn test_get_path_contains_literal_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/collects/841564295.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collect": {"id": 841_564_295u64, "product_id": 632_910_392u64, "position": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let collect = service.get(841_564_295, None).await.unwrap();
    assert_eq!(collect.id, Some(841_564_295));
    assert_eq!(collect.position, Some(1));
}

#[tokio::test]
async fn test_get_with_fields_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/collects/42.json"))
        .and(query_param("fields", "id,position"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collect": {"id": 42, "position": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let collect = service.get(42, Some("id,position")).await.unwrap();
    assert_eq!(collect.position, Some(3));
}

#[tokio::test]
async fn test_create_wraps_body_under_singular_key() {
    let server = MockServer::start().await;

    // Exact body match: the entity sits under "collect", never "collects".
    Mock::given(method("POST"))
        .and(path("/admin/collects.json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "collect": {"product_id": 632_910_392u64, "collection_id": 841_564_295u64}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "collect": {
                "id": 1_071_559_574u64,
                "product_id": 632_910_392u64,
                "collection_id": 841_564_295u64,
                "position": 1,
                "created_at": "2024-01-02T09:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let collect = Collect {
        product_id: Some(632_910_392),
        collection_id: Some(841_564_295),
        ..Collect::default()
    };

    let created = service.create(&collect).await.unwrap();
    assert_eq!(created.id, Some(1_071_559_574));
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_delete_sends_no_body_and_returns_unit() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/collects/841564295.json"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    service.delete(841_564_295).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_collect_surfaces_404() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/collects/1.json"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})),
        )
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    let error = service.delete(1).await.unwrap_err();
    match error {
        ClientError::Remote { status, message, .. } => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_every_method_surfaces_mocked_422() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"collection_id": ["cannot be blank"]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"collection_id": ["cannot be blank"]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"collection_id": ["cannot be blank"]}
        })))
        .mount(&server)
        .await;

    let service = collect_service(&server).await;

    let results: Vec<ClientError> = vec![
        service.count(None).await.unwrap_err(),
        service.list(None).await.unwrap_err(),
        service.get(1, None).await.unwrap_err(),
        service.create(&Collect::default()).await.unwrap_err(),
        service.delete(1).await.unwrap_err(),
    ];

    for error in results {
        match error {
            ClientError::Remote { status, ref message, .. } => {
                assert_eq!(status, 422);
                assert!(message.contains("collection_id"));
            }
            other => panic!("expected Remote error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_requests_carry_access_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/collects/count.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let service = collect_service(&server).await;
    assert_eq!(service.count(None).await.unwrap(), 0);
}
