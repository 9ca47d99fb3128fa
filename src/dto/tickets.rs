use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Flight, Order, Ticket};

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookTicketRequest {
    pub flight_id: i64,
    pub passenger_name: String,
    pub passport_number: String,
    pub email: String,
    pub phone: String,
    /// Seat label; assigned automatically when omitted.
    pub seat_number: Option<String>,
}

/// Everything produced by one successful booking: the ticket, the order
/// settling it, and the flight with its decremented seat count.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingConfirmation {
    pub ticket: Ticket,
    pub order: Order,
    pub flight: Flight,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketList {
    pub items: Vec<Ticket>,
}
