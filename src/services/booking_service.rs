use crate::{
    dto::tickets::{BookTicketRequest, BookingConfirmation, TicketList},
    error::AppResult,
    models::Ticket,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn book_ticket(
    state: &AppState,
    payload: BookTicketRequest,
) -> AppResult<ApiResponse<BookingConfirmation>> {
    let (ticket, order, flight) = state.inventory().book(&payload)?;

    tracing::info!(
        ticket_id = %ticket.id,
        order_id = %order.id,
        flight_id = flight.id,
        seats_available = flight.seats_available,
        "ticket booked"
    );

    Ok(ApiResponse::success(
        "Ticket booked successfully",
        BookingConfirmation {
            ticket,
            order,
            flight,
        },
        Some(Meta::empty()),
    ))
}

pub async fn cancel_ticket(state: &AppState, ticket_id: &str) -> AppResult<ApiResponse<Ticket>> {
    let ticket = state.inventory().cancel(ticket_id)?;

    tracing::info!(
        ticket_id = %ticket.id,
        flight_id = ticket.flight_id,
        "ticket cancelled"
    );

    Ok(ApiResponse::success(
        "Ticket cancelled successfully",
        ticket,
        Some(Meta::empty()),
    ))
}

pub async fn user_tickets(state: &AppState, email: &str) -> AppResult<ApiResponse<TicketList>> {
    let items = state.inventory().tickets_for(email);
    let meta = Meta::count(items.len() as i64);
    Ok(ApiResponse::success("Ok", TicketList { items }, Some(meta)))
}
