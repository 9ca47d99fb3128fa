use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::flights::{FlightList, SearchCriteria},
    error::AppResult,
    response::ApiResponse,
    services::flight_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_flights))
        .route("/search", post(search_flights))
}

#[utoipa::path(
    get,
    path = "/flights",
    responses(
        (status = 200, description = "All flights in insertion order", body = ApiResponse<FlightList>),
    ),
    tag = "Flights"
)]
pub async fn list_flights(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<FlightList>>> {
    let resp = flight_service::list_flights(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/flights/search",
    request_body = SearchCriteria,
    responses(
        (status = 200, description = "Flights matching all provided filters", body = ApiResponse<FlightList>),
    ),
    tag = "Flights"
)]
pub async fn search_flights(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> AppResult<Json<ApiResponse<FlightList>>> {
    let resp = flight_service::search_flights(&state, criteria).await?;
    Ok(Json(resp))
}
