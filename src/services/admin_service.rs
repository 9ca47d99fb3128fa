use crate::{
    dto::{flights::AddFlightRequest, stats::Statistics},
    error::AppResult,
    models::Flight,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn add_flight(
    state: &AppState,
    payload: AddFlightRequest,
) -> AppResult<ApiResponse<Flight>> {
    let flight = state.inventory().add_flight(&payload)?;

    tracing::info!(
        flight_id = flight.id,
        flight_number = %flight.flight_number,
        seats_total = flight.seats_total,
        "flight added"
    );

    Ok(ApiResponse::success(
        "Flight added successfully",
        flight,
        Some(Meta::empty()),
    ))
}

pub async fn statistics(state: &AppState) -> AppResult<ApiResponse<Statistics>> {
    let stats = state.inventory().statistics();
    Ok(ApiResponse::success("Ok", stats, Some(Meta::empty())))
}
