use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use studio_ops::workflows::casting::{CastSheet, CastingReport};
use studio_ops::workflows::roster::{roster_router, RosterService, TalentRepository};

pub(crate) fn with_roster_routes<R>(service: Arc<RosterService<R>>) -> axum::Router
where
    R: TalentRepository + 'static,
{
    roster_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/casting/report",
            axum::routing::post(casting_sheet_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Conflict-check a caller-supplied cast sheet. Dashboards that already hold
/// a roster snapshot use this instead of the repository-backed report route.
pub(crate) async fn casting_sheet_endpoint(
    Json(sheet): Json<CastSheet>,
) -> Json<CastingReport> {
    Json(CastingReport::build(&sheet))
}
