use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ClientProfile;
use super::repository::RecommendationStore;
use super::service::{ReliefService, ReliefServiceError};
use super::synthesize::CreditAccount;

/// Router builder exposing the recommendation and catalog endpoints.
pub fn relief_router<S>(service: Arc<ReliefService<S>>) -> Router
where
    S: RecommendationStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/relief/recommendations",
            post(recommend_handler::<S>),
        )
        .route("/api/v1/relief/programs", get(list_programs_handler::<S>))
        .route(
            "/api/v1/relief/programs/:slug",
            get(program_detail_handler::<S>),
        )
        .route(
            "/api/v1/relief/credit-profile",
            post(credit_profile_handler::<S>),
        )
        .route(
            "/api/v1/relief/users/:user_id/recommendations",
            get(saved_recommendations_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendRequest {
    pub(crate) profile: ClientProfile,
    #[serde(default)]
    pub(crate) user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreditProfileRequest {
    pub(crate) accounts: Vec<CreditAccount>,
    #[serde(default)]
    pub(crate) user_id: Option<String>,
}

pub(crate) async fn recommend_handler<S>(
    State(service): State<Arc<ReliefService<S>>>,
    axum::Json(request): axum::Json<RecommendRequest>,
) -> Response
where
    S: RecommendationStore + 'static,
{
    match service.recommend_direct(&request.profile, request.user_id.as_deref()) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn list_programs_handler<S>(
    State(service): State<Arc<ReliefService<S>>>,
) -> Response
where
    S: RecommendationStore + 'static,
{
    let payload = json!({ "programs": service.programs() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn program_detail_handler<S>(
    State(service): State<Arc<ReliefService<S>>>,
    Path(slug): Path<String>,
) -> Response
where
    S: RecommendationStore + 'static,
{
    match service.program(&slug) {
        Some(program) => {
            let payload = json!({ "program": program });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({ "error": "program not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn credit_profile_handler<S>(
    State(service): State<Arc<ReliefService<S>>>,
    axum::Json(request): axum::Json<CreditProfileRequest>,
) -> Response
where
    S: RecommendationStore + 'static,
{
    match service.recommend_from_credit(&request.accounts, request.user_id.as_deref()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn saved_recommendations_handler<S>(
    State(service): State<Arc<ReliefService<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: RecommendationStore + 'static,
{
    match service.saved_recommendations(&user_id) {
        Ok(records) => {
            let payload = json!({
                "user_id": user_id,
                "recommendations": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: ReliefServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
