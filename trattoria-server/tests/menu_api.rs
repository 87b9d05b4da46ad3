//! Menu endpoint integration tests
//!
//! Drives the assembled router against an in-memory document store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use trattoria_server::{Config, ServerState, build_app};

async fn test_app() -> (Router, ServerState) {
    let config = Config::for_tests();
    let state = ServerState::initialize(&config).await;
    let app = build_app().with_state(state.clone());
    (app, state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn first_menu_request_seeds_the_reference_dishes() {
    let (app, _state) = test_app().await;

    let (status, body) = get_json(&app, "/menu").await;
    assert_eq!(status, StatusCode::OK);

    let dishes = body.as_array().unwrap();
    assert_eq!(dishes.len(), 7);

    // records are stripped of storage identifiers
    for dish in dishes {
        assert!(dish.get("id").is_none(), "dish leaked its id: {dish}");
        assert!(dish.get("name").is_some());
        assert!(dish.get("price").is_some());
        assert!(dish.get("category").is_some());
    }

    // a second request must not seed again
    let (_, body) = get_json(&app, "/menu").await;
    assert_eq!(body.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn category_filter_is_case_insensitive_and_exact() {
    let (app, _state) = test_app().await;

    let (status, body) = get_json(&app, "/menu?category=DESSERT").await;
    assert_eq!(status, StatusCode::OK);

    let dishes = body.as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["name"], "Tiramisu");
}

#[tokio::test]
async fn text_search_matches_name_description_tags_and_category() {
    let (app, _state) = test_app().await;

    // "spicy" appears in Diavola's description and tags only
    let (_, body) = get_json(&app, "/menu?q=spicy").await;
    let dishes = body.as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["name"], "Diavola");

    // tag-only hit
    let (_, body) = get_json(&app, "/menu?q=seafood").await;
    let dishes = body.as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["name"], "Branzino al Forno");
}

#[tokio::test]
async fn text_and_category_filters_combine() {
    let (app, _state) = test_app().await;

    // both Margherita (pizza) and Tiramisu (dessert) are tagged "classic"
    let (_, body) = get_json(&app, "/menu?q=classic&category=pizza").await;
    let dishes = body.as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["name"], "Margherita");
}

#[tokio::test]
async fn limit_caps_the_listing() {
    let (app, _state) = test_app().await;

    let (_, body) = get_json(&app, "/menu?limit=3").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unmatched_query_returns_empty_list_not_error() {
    let (app, _state) = test_app().await;

    let (status, body) = get_json(&app, "/menu?q=sushi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn liveness_endpoints_answer() {
    let (app, _state) = test_app().await;

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello from the Trattoria backend!");

    let (status, body) = get_json(&app, "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello from the backend API!");
}

#[tokio::test]
async fn diagnostics_reports_store_and_config_flags() {
    let (app, _state) = test_app().await;

    // seed first so the dish collection exists
    let _ = get_json(&app, "/menu").await;

    let (status, body) = get_json(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "running");
    assert_eq!(body["store"]["status"], "ok");
    // test config: no DATABASE_PATH, explicit DATABASE_NAME
    assert_eq!(body["database_path_set"], false);
    assert_eq!(body["database_name_set"], true);

    let collections: Vec<String> = body["collections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(collections.contains(&"dish".to_string()));
    assert!(collections.len() <= 10);
}
