use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::matching::router::relief_router;

fn test_router() -> (Router, Arc<MemoryStore>) {
    let (service, store) = build_service();
    (relief_router(Arc::new(service)), store)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn recommendations_endpoint_ranks_a_submitted_profile() {
    let (router, store) = test_router();

    let payload = json!({
        "profile": {
            "income": 10000,
            "household_size": 1,
            "employment_status": "unemployed"
        }
    });
    let response = router
        .oneshot(post_json("/api/v1/relief/recommendations", &payload))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let recommendations = body.as_array().expect("array body");
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 8);
    let first = &recommendations[0];
    assert!(first["match_score"].as_f64().expect("score") > 0.1);
    assert!(first["why_recommended"].as_str().is_some());

    // No user id, so nothing was persisted.
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn recommendations_with_a_user_id_are_persisted() {
    let (router, store) = test_router();

    let payload = json!({
        "profile": { "income": 10000, "household_size": 1 },
        "user_id": "user-42"
    });
    let response = router
        .oneshot(post_json("/api/v1/relief/recommendations", &payload))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let records = store.records();
    assert!(!records.is_empty());
    assert!(records.iter().all(|record| record.user_id == "user-42"));
}

#[tokio::test]
async fn program_listing_returns_the_full_catalog() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(get("/api/v1/relief/programs"))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let programs = body["programs"].as_array().expect("programs array");
    assert_eq!(programs.len(), 12);
}

#[tokio::test]
async fn program_detail_returns_404_for_unknown_slugs() {
    let (router, _store) = test_router();

    let response = router
        .clone()
        .oneshot(get("/api/v1/relief/programs/wic-nutrition"))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["program"]["slug"], "wic-nutrition");

    let response = router
        .oneshot(get("/api/v1/relief/programs/no-such-program"))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn credit_profile_endpoint_returns_the_derived_report() {
    let (router, _store) = test_router();

    let payload = json!({
        "accounts": [
            {
                "creditor": "Chase",
                "balance": 9000.0,
                "account_type": "Credit Card",
                "status": "Open"
            },
            {
                "creditor": "Veterans United",
                "balance": 12000.0,
                "account_type": "Personal Loan",
                "status": "Delinquent"
            }
        ]
    });
    let response = router
        .oneshot(post_json("/api/v1/relief/credit-profile", &payload))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["accounts_analyzed"], 2);
    assert_eq!(body["profile"]["is_veteran"], true);
    assert!(body["profile"]["income"].as_u64().is_some());
    let recommendations = body["recommendations"].as_array().expect("array");
    assert!(recommendations.len() <= 6);
    let indicators = body["signals"]["stress_indicators"]
        .as_array()
        .expect("indicators");
    assert!(indicators.contains(&json!("delinquent_accounts")));
}

#[tokio::test]
async fn saved_recommendations_round_trip_through_the_api() {
    let (router, _store) = test_router();

    let payload = json!({
        "profile": { "income": 10000, "household_size": 1 },
        "user_id": "user-77"
    });
    let response = router
        .clone()
        .oneshot(post_json("/api/v1/relief/recommendations", &payload))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(get("/api/v1/relief/users/user-77/recommendations"))
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["user_id"], "user-77");
    let saved = body["recommendations"].as_array().expect("array");
    assert!(!saved.is_empty());
    assert!(saved
        .iter()
        .all(|record| record["status"] == "proposed"));
}
