use super::*;

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Tests deleting a beer over HTTP.
///
/// Expected: 204 with the beer gone from the store
#[tokio::test]
async fn deletes_beer() {
    let service = Arc::new(FakeBeerService::with_beers(vec![sample_beer(1, "Test")]));

    let response = app(service.clone())
        .oneshot(delete_request("/v1/beer/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(service.beers.lock().unwrap().is_empty());
}

/// Tests deleting a nonexistent beer.
///
/// The no-op policy means the missing row is not surfaced as an error.
///
/// Expected: 204
#[tokio::test]
async fn nonexistent_beer_returns_204() {
    let service = Arc::new(FakeBeerService::new());

    let response = app(service)
        .oneshot(delete_request("/v1/beer/42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Tests a non-integer id in the path.
///
/// Expected: 400 from the path extractor
#[tokio::test]
async fn invalid_id_format_returns_400() {
    let service = Arc::new(FakeBeerService::new());

    let response = app(service)
        .oneshot(delete_request("/v1/beer/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests the storage-failure path on delete.
///
/// Expected: 500 with a generic message body
#[tokio::test]
async fn storage_error_returns_500() {
    let service = Arc::new(FakeBeerService::failing());

    let response = app(service)
        .oneshot(delete_request("/v1/beer/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
