use crate::{
    dto::flights::{FlightList, SearchCriteria},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_flights(state: &AppState) -> AppResult<ApiResponse<FlightList>> {
    let items = state.inventory().flights();
    let meta = Meta::count(items.len() as i64);
    Ok(ApiResponse::success("Ok", FlightList { items }, Some(meta)))
}

pub async fn search_flights(
    state: &AppState,
    criteria: SearchCriteria,
) -> AppResult<ApiResponse<FlightList>> {
    let items = state.inventory().search(&criteria);
    let meta = Meta::count(items.len() as i64);
    Ok(ApiResponse::success("Ok", FlightList { items }, Some(meta)))
}
