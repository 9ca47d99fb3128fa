use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Flight;

/// Conjunctive search filters; an absent field is not applied.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchCriteria {
    /// Case-insensitive substring match on the origin country.
    pub from_country: Option<String>,
    /// Case-insensitive substring match on the destination country.
    pub to_country: Option<String>,
    /// Keep only flights with at least this many seats available.
    pub passengers: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddFlightRequest {
    pub flight_number: String,
    pub airline: String,
    pub from_country: String,
    pub from_city: String,
    pub to_country: String,
    pub to_city: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub price: i64,
    pub seats_total: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FlightList {
    pub items: Vec<Flight>,
}
