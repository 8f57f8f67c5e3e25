use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{TalentId, TalentIntake};
use super::repository::{RepositoryError, TalentRepository};
use super::service::{RosterService, RosterServiceError};
use crate::workflows::casting::CastingRequest;

/// Router builder exposing the roster endpoints consumed by the dashboard.
pub fn roster_router<R>(service: Arc<RosterService<R>>) -> Router
where
    R: TalentRepository + 'static,
{
    Router::new()
        .route("/api/v1/roster", get(roster_handler::<R>))
        .route("/api/v1/roster/talent", post(provision_handler::<R>))
        .route(
            "/api/v1/roster/talent/:talent_id/offboard",
            post(offboard_handler::<R>),
        )
        .route(
            "/api/v1/roster/talent/:talent_id/availability",
            get(availability_handler::<R>),
        )
        .route(
            "/api/v1/productions/casting-report",
            post(casting_report_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityQuery {
    #[serde(default)]
    pub(crate) start_date: Option<String>,
}

pub(crate) async fn provision_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    axum::Json(intake): axum::Json<TalentIntake>,
) -> Response
where
    R: TalentRepository + 'static,
{
    match service.provision(intake) {
        Ok(profile) => (StatusCode::CREATED, axum::Json(profile)).into_response(),
        Err(RosterServiceError::MissingDisplayName) => {
            let payload = json!({
                "error": RosterServiceError::MissingDisplayName.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RosterServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "talent already on roster",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn offboard_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    Path(talent_id): Path<String>,
) -> Response
where
    R: TalentRepository + 'static,
{
    let id = TalentId(talent_id);
    match service.offboard(&id) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(RosterServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "talent_id": id.0,
                "error": "talent not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn availability_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    Path(talent_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Response
where
    R: TalentRepository + 'static,
{
    let id = TalentId(talent_id);
    match service.availability(&id, query.start_date.as_deref()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn casting_report_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    axum::Json(request): axum::Json<CastingRequest>,
) -> Response
where
    R: TalentRepository + 'static,
{
    match service.casting_report(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn roster_handler<R>(State(service): State<Arc<RosterService<R>>>) -> Response
where
    R: TalentRepository + 'static,
{
    match service.roster() {
        Ok(profiles) => (StatusCode::OK, axum::Json(profiles)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
