use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;
use uuid::Uuid;

use crate::{
    dto::{
        flights::{AddFlightRequest, SearchCriteria},
        stats::Statistics,
        tickets::BookTicketRequest,
    },
    error::{AppError, AppResult},
    models::{Flight, FlightStatus, Order, PaymentStatus, Ticket, TicketStatus},
};

// Same shape the booking form enforces client-side.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Owned state of the booking service: the three collections plus the flight
/// id counter. All mutation goes through the methods below; callers get
/// cloned snapshots, never references into the collections.
///
/// Wrapped in a single mutex by [`crate::state::AppState`], which serializes
/// bookings and cancellations so each runs as one indivisible step against
/// the (flight, ticket, order) triple.
#[derive(Debug)]
pub struct Inventory {
    flights: Vec<Flight>,
    tickets: Vec<Ticket>,
    orders: Vec<Order>,
    next_flight_id: i64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
            tickets: Vec::new(),
            orders: Vec::new(),
            next_flight_id: 1,
        }
    }

    /// Inventory pre-loaded with the six demo routes.
    pub fn with_demo_flights() -> Self {
        let mut inv = Self::new();
        for spec in DEMO_FLIGHTS {
            let id = inv.next_flight_id;
            inv.next_flight_id += 1;
            inv.flights.push(spec.build(id));
        }
        inv
    }

    pub fn flights(&self) -> Vec<Flight> {
        self.flights.clone()
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|f| {
                criteria.from_country.as_ref().is_none_or(|c| {
                    f.from_country.to_lowercase().contains(&c.to_lowercase())
                })
            })
            .filter(|f| {
                criteria.to_country.as_ref().is_none_or(|c| {
                    f.to_country.to_lowercase().contains(&c.to_lowercase())
                })
            })
            .filter(|f| {
                criteria
                    .passengers
                    .is_none_or(|p| f.seats_available >= p)
            })
            .cloned()
            .collect()
    }

    /// Book one seat: decrement availability, create the ticket and its
    /// order in one step. Every precondition is checked before the first
    /// mutation, so a failed booking leaves no trace.
    pub fn book(&mut self, req: &BookTicketRequest) -> AppResult<(Ticket, Order, Flight)> {
        let flight = self
            .flights
            .iter()
            .position(|f| f.id == req.flight_id)
            .ok_or(AppError::NotFound)?;

        if self.flights[flight].seats_available < 1 {
            return Err(AppError::SeatUnavailable);
        }

        validate_booking(req)?;

        let now = Utc::now();
        let flight = &mut self.flights[flight];

        let seat_number = match req.seat_number.as_deref().map(str::trim) {
            Some(seat) if !seat.is_empty() => seat.to_string(),
            // Next free label: one past the number of seats already sold.
            _ => (flight.seats_total - flight.seats_available + 1).to_string(),
        };

        flight.seats_available -= 1;

        let ticket = Ticket {
            id: tagged_id("TKT", now),
            flight_id: flight.id,
            passenger_name: req.passenger_name.trim().to_string(),
            passport_number: req.passport_number.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: req.phone.trim().to_string(),
            seat_number,
            status: TicketStatus::Sold,
            booked_at: now,
        };

        let order = Order {
            id: tagged_id("ORD", now),
            ticket_id: ticket.id.clone(),
            passenger_name: ticket.passenger_name.clone(),
            amount: flight.price,
            currency: "USD".to_string(),
            payment_status: PaymentStatus::Completed,
            created_at: now,
        };

        let flight = flight.clone();
        self.tickets.push(ticket.clone());
        self.orders.push(order.clone());

        Ok((ticket, order, flight))
    }

    /// Cancel a sold ticket and return its seat to the flight. The seat
    /// count is capped at `seats_total` so out-of-order replays cannot
    /// drift it upward.
    pub fn cancel(&mut self, ticket_id: &str) -> AppResult<Ticket> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or(AppError::NotFound)?;

        if ticket.status != TicketStatus::Sold {
            return Err(AppError::AlreadyCancelled);
        }

        ticket.status = TicketStatus::Cancelled;
        let flight_id = ticket.flight_id;
        let ticket = ticket.clone();

        if let Some(flight) = self.flights.iter_mut().find(|f| f.id == flight_id) {
            flight.seats_available = (flight.seats_available + 1).min(flight.seats_total);
        }

        Ok(ticket)
    }

    /// Tickets of any status whose email exactly matches, in creation order.
    pub fn tickets_for(&self, email: &str) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.email == email)
            .cloned()
            .collect()
    }

    /// Register a new flight with a fresh id. Ids are monotonically
    /// increasing and never reused.
    pub fn add_flight(&mut self, req: &AddFlightRequest) -> AppResult<Flight> {
        validate_flight(req)?;

        let id = self.next_flight_id;
        self.next_flight_id += 1;

        let flight = Flight {
            id,
            flight_number: req.flight_number.trim().to_string(),
            airline: req.airline.trim().to_string(),
            from_country: req.from_country.trim().to_string(),
            from_city: req.from_city.trim().to_string(),
            to_country: req.to_country.trim().to_string(),
            to_city: req.to_city.trim().to_string(),
            departure_time: req.departure_time,
            arrival_time: req.arrival_time,
            price: req.price,
            seats_total: req.seats_total,
            seats_available: req.seats_total,
            status: FlightStatus::Active,
            created_at: Utc::now(),
        };

        self.flights.push(flight.clone());
        Ok(flight)
    }

    pub fn statistics(&self) -> Statistics {
        let today = Utc::now().date_naive();
        Statistics {
            total_flights: self.flights.len() as i64,
            active_flights: self
                .flights
                .iter()
                .filter(|f| f.status == FlightStatus::Active)
                .count() as i64,
            total_tickets: self.tickets.len() as i64,
            sold_tickets: self
                .tickets
                .iter()
                .filter(|t| t.status == TicketStatus::Sold)
                .count() as i64,
            today_sales: self
                .orders
                .iter()
                .filter(|o| o.created_at.date_naive() == today)
                .count() as i64,
            total_revenue: self.orders.iter().map(|o| o.amount).sum(),
            available_seats: self
                .flights
                .iter()
                .map(|f| f.seats_available as i64)
                .sum(),
        }
    }
}

fn validate_booking(req: &BookTicketRequest) -> AppResult<()> {
    if req.passenger_name.trim().is_empty() {
        return Err(AppError::InvalidInput("passenger name is required".into()));
    }
    if req.passport_number.trim().is_empty() {
        return Err(AppError::InvalidInput("passport number is required".into()));
    }
    if !EMAIL_RE.is_match(req.email.trim()) {
        return Err(AppError::InvalidInput("malformed email address".into()));
    }
    Ok(())
}

fn validate_flight(req: &AddFlightRequest) -> AppResult<()> {
    let required = [
        ("flight number", &req.flight_number),
        ("airline", &req.airline),
        ("origin country", &req.from_country),
        ("origin city", &req.from_city),
        ("destination country", &req.to_country),
        ("destination city", &req.to_city),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::InvalidInput(format!("{name} is required")));
        }
    }
    if req.price <= 0 {
        return Err(AppError::InvalidInput("price must be positive".into()));
    }
    if req.seats_total <= 0 {
        return Err(AppError::InvalidInput("seat total must be positive".into()));
    }
    Ok(())
}

fn tagged_id(prefix: &str, now: DateTime<Utc>) -> String {
    let date = now.format("%Y%m%d");
    let suffix = Uuid::new_v4().to_string();
    let short = &suffix[..8];
    format!("{prefix}-{date}-{short}")
}

struct DemoFlight {
    flight_number: &'static str,
    airline: &'static str,
    from_country: &'static str,
    from_city: &'static str,
    to_country: &'static str,
    to_city: &'static str,
    departure: (u32, u32),
    arrival: (u32, u32, u32),
    price: i64,
    seats_total: i32,
    seats_available: i32,
}

impl DemoFlight {
    fn build(&self, id: i64) -> Flight {
        let (dep_h, dep_m) = self.departure;
        let (arr_d, arr_h, arr_m) = self.arrival;
        Flight {
            id,
            flight_number: self.flight_number.to_string(),
            airline: self.airline.to_string(),
            from_country: self.from_country.to_string(),
            from_city: self.from_city.to_string(),
            to_country: self.to_country.to_string(),
            to_city: self.to_city.to_string(),
            departure_time: demo_time(20, dep_h, dep_m),
            arrival_time: demo_time(arr_d, arr_h, arr_m),
            price: self.price,
            seats_total: self.seats_total,
            seats_available: self.seats_available,
            status: FlightStatus::Active,
            created_at: Utc::now(),
        }
    }
}

fn demo_time(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
}

const DEMO_FLIGHTS: &[DemoFlight] = &[
    DemoFlight {
        flight_number: "TK-123",
        airline: "Turkish Airlines",
        from_country: "Uzbekistan",
        from_city: "Toshkent",
        to_country: "Turkey",
        to_city: "Istanbul",
        departure: (8, 0),
        arrival: (20, 11, 30),
        price: 350,
        seats_total: 180,
        seats_available: 45,
    },
    DemoFlight {
        flight_number: "HY-456",
        airline: "Uzbekistan Airways",
        from_country: "Uzbekistan",
        from_city: "Toshkent",
        to_country: "Russia",
        to_city: "Moskva",
        departure: (10, 30),
        arrival: (20, 13, 45),
        price: 280,
        seats_total: 200,
        seats_available: 12,
    },
    DemoFlight {
        flight_number: "EK-789",
        airline: "Emirates",
        from_country: "Uzbekistan",
        from_city: "Toshkent",
        to_country: "UAE",
        to_city: "Dubai",
        departure: (14, 0),
        arrival: (20, 18, 30),
        price: 420,
        seats_total: 240,
        seats_available: 89,
    },
    DemoFlight {
        flight_number: "AA-101",
        airline: "American Airlines",
        from_country: "USA",
        from_city: "New York",
        to_country: "Germany",
        to_city: "Berlin",
        departure: (20, 0),
        arrival: (21, 8, 30),
        price: 650,
        seats_total: 220,
        seats_available: 56,
    },
    DemoFlight {
        flight_number: "BA-202",
        airline: "British Airways",
        from_country: "UK",
        from_city: "London",
        to_country: "USA",
        to_city: "Los Angeles",
        departure: (18, 0),
        arrival: (20, 22, 30),
        price: 720,
        seats_total: 260,
        seats_available: 34,
    },
    DemoFlight {
        flight_number: "QR-303",
        airline: "Qatar Airways",
        from_country: "Qatar",
        from_city: "Doha",
        to_country: "Japan",
        to_city: "Tokyo",
        departure: (22, 0),
        arrival: (21, 14, 30),
        price: 580,
        seats_total: 230,
        seats_available: 78,
    },
];
