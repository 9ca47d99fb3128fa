use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use crate::{
    dto::tickets::{BookTicketRequest, BookingConfirmation, TicketList},
    error::AppResult,
    models::Ticket,
    response::ApiResponse,
    services::booking_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/book", post(book_ticket))
        .route("/user/{email}", get(user_tickets))
        .route("/{id}", delete(cancel_ticket))
}

#[utoipa::path(
    post,
    path = "/tickets/book",
    request_body = BookTicketRequest,
    responses(
        (status = 200, description = "Ticket, order and updated flight", body = ApiResponse<BookingConfirmation>),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Flight not found"),
        (status = 409, description = "No seats available"),
    ),
    tag = "Tickets"
)]
pub async fn book_ticket(
    State(state): State<AppState>,
    Json(payload): Json<BookTicketRequest>,
) -> AppResult<Json<ApiResponse<BookingConfirmation>>> {
    let resp = booking_service::book_ticket(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/tickets/user/{email}",
    params(
        ("email" = String, Path, description = "Exact contact email")
    ),
    responses(
        (status = 200, description = "Tickets of any status for the email", body = ApiResponse<TicketList>),
    ),
    tag = "Tickets"
)]
pub async fn user_tickets(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<TicketList>>> {
    let resp = booking_service::user_tickets(&state, &email).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    params(
        ("id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Cancelled ticket", body = ApiResponse<Ticket>),
        (status = 404, description = "Ticket not found"),
        (status = 409, description = "Ticket already cancelled"),
    ),
    tag = "Tickets"
)]
pub async fn cancel_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Ticket>>> {
    let resp = booking_service::cancel_ticket(&state, &id).await?;
    Ok(Json(resp))
}
