use super::*;

/// Tests listing beers over HTTP.
///
/// Expected: 200 with a JSON array in wire shape (`type`, not `kind`)
#[tokio::test]
async fn returns_json_array() {
    let service = Arc::new(FakeBeerService::with_beers(vec![
        sample_beer(1, "First"),
        sample_beer(2, "Second"),
    ]));

    let response = app(service).oneshot(get_request("/v1/beer")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": 1, "name": "First", "type": 2, "style": 6},
            {"id": 2, "name": "Second", "type": 2, "style": 6},
        ])
    );
}

/// Tests listing with an empty store.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn returns_empty_array_when_no_beers() {
    let service = Arc::new(FakeBeerService::new());

    let response = app(service).oneshot(get_request("/v1/beer")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

/// Tests the storage-failure path.
///
/// Expected: 500 with a generic message body
#[tokio::test]
async fn storage_error_returns_500() {
    let service = Arc::new(FakeBeerService::failing());

    let response = app(service).oneshot(get_request("/v1/beer")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"message": "internal server error"})
    );
}
