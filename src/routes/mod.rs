use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod doc;
pub mod flights;
pub mod health;
pub mod tickets;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/flights", flights::router())
        .nest("/tickets", tickets::router())
        .nest("/admin", admin::router())
}
