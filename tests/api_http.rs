// tests/api_http.rs
//
// HTTP-level tests for the panel Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /authenticity (catalog + generic paths)
// - POST /styling
// - POST /resale
// - 422 on empty required fields, 501 in ai_assisted mode
// - simulated delay on answers, none on rejections (paused clock)

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use luxe_advisor::{api, Advisor, AnalysisMode, AppState, Catalogs, RandomFactory};

const BODY_LIMIT: usize = 1024 * 1024;

/// Same router the binary serves, minus `/metrics`, with no artificial delay.
fn test_router(mode: AnalysisMode) -> Router {
    router_with_delay(mode, Duration::ZERO)
}

fn router_with_delay(mode: AnalysisMode, delay: Duration) -> Router {
    let catalogs = Catalogs::builtin().expect("built-in catalogs parse");
    let advisor = Advisor::new(Arc::new(catalogs), mode);
    api::router(AppState::new(advisor, RandomFactory::new(Some(7)), delay))
}

async fn post_json(app: Router, uri: &str, payload: Json) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST");

    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v: Json = serde_json::from_slice(&bytes).expect("json body");
    (status, v)
}

#[tokio::test]
async fn health_returns_200_and_ok_body() {
    let app = test_router(AnalysisMode::Heuristic);

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    assert_eq!(String::from_utf8_lossy(&bytes).trim(), "ok");
}

#[tokio::test]
async fn authenticity_catalog_match_is_high_confidence() {
    let (status, v) = post_json(
        test_router(AnalysisMode::Heuristic),
        "/authenticity",
        json!({
            "title": "Classic Flap Bag",
            "brand": "Chanel",
            "description": "Quilted pattern, interlocking CC logo, chain strap with leather woven through, burgundy interior",
            "condition": "Excellent"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {v}");
    assert_eq!(v["tier"], "high");
    assert_eq!(v["matched_model"], "classic flap bag");
    assert_eq!(v["features_matched"], 4);
    assert_eq!(v["features_total"], 4);

    let c = v["confidence"].as_f64().expect("confidence is a number");
    assert!((0.85..=0.99).contains(&c), "confidence {c}");
    assert!(v["confidence_display"].as_str().unwrap().ends_with('%'));

    // Response metadata
    assert_eq!(v["mode"], "heuristic");
    assert_eq!(v["ai_enhanced"], false);
    assert!(v["analyzed_at"].is_string());
    assert!(v["summary"].as_str().unwrap().contains("(high)"));
}

#[tokio::test]
async fn authenticity_unknown_brand_is_generic_medium() {
    let (status, v) = post_json(
        test_router(AnalysisMode::Heuristic),
        "/authenticity",
        json!({ "title": "Mystery Tote", "brand": "Unknown Brand", "description": "canvas" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["tier"], "medium");
    assert!(v["matched_model"].is_null());
    let c = v["confidence"].as_f64().unwrap();
    assert!((0.3..=0.5).contains(&c), "generic confidence {c}");
}

#[tokio::test]
async fn styling_returns_three_looks() {
    let (status, v) = post_json(
        test_router(AnalysisMode::Heuristic),
        "/styling",
        json!({ "item_name": "Gucci Blazer", "context": "winter office" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let looks = v["suggestions"].as_array().expect("suggestions array");
    assert_eq!(looks.len(), 3);
    assert_eq!(v["source"]["kind"], "catalog");
    assert_eq!(v["source"]["key"], "gucci blazer");
    assert_eq!(v["source"]["season"], "cold");
    assert_eq!(v["source"]["occasion"], "work");
    assert!(v["summary"].as_str().unwrap().contains("Look 3:"));
}

#[tokio::test]
async fn resale_listed_model_stays_within_ten_percent() {
    let (status, v) = post_json(
        test_router(AnalysisMode::Heuristic),
        "/resale",
        json!({ "brand": "Louis Vuitton", "item_name": "Speedy", "condition": "Good" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value = v["value"].as_u64().expect("integer value");
    assert!((630..=770).contains(&value), "value {value}");
    assert_eq!(v["trend"], "down");
    assert_eq!(v["trend_symbol"], "↓");
    assert_eq!(v["condition"], "good");
    assert_eq!(v["matched_model"], "speedy");
    assert_eq!(v["market_tips"].as_array().unwrap().len(), 3);
    assert!(v["formatted_value"].as_str().unwrap().starts_with('$'));
}

#[tokio::test]
async fn empty_required_fields_answer_422_with_warning() {
    let (status, v) = post_json(
        test_router(AnalysisMode::Heuristic),
        "/resale",
        json!({ "brand": "  ", "condition": "Good" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["missing"], json!(["item_name", "brand"]));
    assert_eq!(
        v["warning"],
        "Please fill out all required fields: item_name, brand"
    );
}

#[tokio::test]
async fn ai_assisted_mode_answers_501() {
    let (status, v) = post_json(
        test_router(AnalysisMode::AiAssisted),
        "/styling",
        json!({ "item_name": "Gucci Blazer" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(v["error"].as_str().unwrap().contains("ai_assisted"));
}

#[tokio::test(start_paused = true)]
async fn answers_wait_for_the_simulated_delay() {
    let app = router_with_delay(AnalysisMode::Heuristic, Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    let (status, _) = post_json(app, "/styling", json!({ "item_name": "Gucci Blazer" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        started.elapsed() >= Duration::from_millis(1500),
        "answered after {:?}",
        started.elapsed()
    );
}

#[tokio::test(start_paused = true)]
async fn rejections_skip_the_simulated_delay() {
    let app = router_with_delay(AnalysisMode::Heuristic, Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    let (status, _) = post_json(app, "/styling", json!({ "item_name": "   " })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(started.elapsed(), Duration::ZERO);
}
