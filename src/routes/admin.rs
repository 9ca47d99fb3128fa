use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::{flights::AddFlightRequest, stats::Statistics},
    error::AppResult,
    middleware::auth::AdminAuth,
    models::Flight,
    response::ApiResponse,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/flights", post(add_flight))
        .route("/statistics", get(statistics))
}

#[utoipa::path(
    post,
    path = "/admin/flights",
    request_body = AddFlightRequest,
    responses(
        (status = 200, description = "Created flight", body = ApiResponse<Flight>),
        (status = 400, description = "Missing or invalid field"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn add_flight(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Json(payload): Json<AddFlightRequest>,
) -> AppResult<Json<ApiResponse<Flight>>> {
    let resp = admin_service::add_flight(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/admin/statistics",
    responses(
        (status = 200, description = "Aggregates over current state", body = ApiResponse<Statistics>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn statistics(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> AppResult<Json<ApiResponse<Statistics>>> {
    let resp = admin_service::statistics(&state).await?;
    Ok(Json(resp))
}
