use serde::Serialize;
use utoipa::ToSchema;

/// Read-only aggregate over current state, recomputed on every call.
#[derive(Debug, Serialize, ToSchema)]
pub struct Statistics {
    pub total_flights: i64,
    pub active_flights: i64,
    pub total_tickets: i64,
    pub sold_tickets: i64,
    /// Orders created since the start of the current UTC day.
    pub today_sales: i64,
    /// Sum of all order amounts to date, in whole USD.
    pub total_revenue: i64,
    pub available_seats: i64,
}
