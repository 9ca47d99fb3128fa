use chrono::{TimeZone, Utc};
use skyticket_api::{
    config::AppConfig,
    dto::{
        flights::{AddFlightRequest, SearchCriteria},
        tickets::BookTicketRequest,
    },
    error::AppError,
    models::TicketStatus,
    services::{admin_service, booking_service, flight_service},
    state::AppState,
    store::Inventory,
};

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        admin_token: "test-admin-token".into(),
        seed_demo_flights: false,
    }
}

fn empty_state() -> AppState {
    AppState::with_inventory(test_config(), Inventory::new())
}

fn demo_state() -> AppState {
    AppState::with_inventory(test_config(), Inventory::with_demo_flights())
}

fn flight_request(flight_number: &str, seats_total: i32) -> AddFlightRequest {
    AddFlightRequest {
        flight_number: flight_number.into(),
        airline: "Test Air".into(),
        from_country: "Uzbekistan".into(),
        from_city: "Toshkent".into(),
        to_country: "Turkey".into(),
        to_city: "Istanbul".into(),
        departure_time: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        arrival_time: Utc.with_ymd_and_hms(2024, 3, 1, 11, 30, 0).unwrap(),
        price: 350,
        seats_total,
    }
}

fn booking_request(flight_id: i64, email: &str) -> BookTicketRequest {
    BookTicketRequest {
        flight_id,
        passenger_name: "Alisher Usmonov".into(),
        passport_number: "AB1234567".into(),
        email: email.into(),
        phone: "+998901234567".into(),
        seat_number: None,
    }
}

async fn seed_flight(state: &AppState, flight_number: &str, seats_total: i32) -> i64 {
    let resp = admin_service::add_flight(state, flight_request(flight_number, seats_total))
        .await
        .expect("add flight");
    resp.data.expect("flight data").id
}

// Full lifecycle over a two-seat flight: two bookings sell it out, the
// third is rejected, a cancellation frees exactly one seat, and the
// statistics reflect every step.
#[tokio::test]
async fn two_seat_flight_lifecycle() {
    let state = empty_state();
    let flight_id = seed_flight(&state, "TK-001", 2).await;

    let first = booking_service::book_ticket(&state, booking_request(flight_id, "a@example.com"))
        .await
        .expect("first booking")
        .data
        .expect("confirmation");
    assert_eq!(first.flight.seats_available, 1);
    assert_eq!(first.ticket.status, TicketStatus::Sold);
    assert_eq!(first.order.ticket_id, first.ticket.id);
    assert_eq!(first.order.amount, 350);
    assert!(first.ticket.id.starts_with("TKT-"));
    assert!(first.order.id.starts_with("ORD-"));

    let second = booking_service::book_ticket(&state, booking_request(flight_id, "b@example.com"))
        .await
        .expect("second booking")
        .data
        .expect("confirmation");
    assert_eq!(second.flight.seats_available, 0);

    let err = booking_service::book_ticket(&state, booking_request(flight_id, "c@example.com"))
        .await
        .expect_err("sold out");
    assert!(matches!(err, AppError::SeatUnavailable));

    // The failed booking must not leave any trace.
    let stats = admin_service::statistics(&state)
        .await
        .expect("stats")
        .data
        .expect("stats data");
    assert_eq!(stats.total_tickets, 2);
    assert_eq!(stats.sold_tickets, 2);
    assert_eq!(stats.today_sales, 2);
    assert_eq!(stats.total_revenue, 700);
    assert_eq!(stats.available_seats, 0);

    let cancelled = booking_service::cancel_ticket(&state, &first.ticket.id)
        .await
        .expect("cancel")
        .data
        .expect("ticket");
    assert_eq!(cancelled.status, TicketStatus::Cancelled);

    let stats = admin_service::statistics(&state)
        .await
        .expect("stats")
        .data
        .expect("stats data");
    assert_eq!(stats.available_seats, 1);
    assert_eq!(stats.sold_tickets, 1);
    assert_eq!(stats.total_tickets, 2);
}

#[tokio::test]
async fn booking_decrements_by_exactly_one() {
    let state = demo_state();
    let before = flight_service::list_flights(&state)
        .await
        .expect("list")
        .data
        .expect("flights")
        .items;
    let flight = &before[0];

    booking_service::book_ticket(&state, booking_request(flight.id, "x@example.com"))
        .await
        .expect("booking");

    let after = flight_service::list_flights(&state)
        .await
        .expect("list")
        .data
        .expect("flights")
        .items;
    assert_eq!(after[0].seats_available, flight.seats_available - 1);
    for f in &after {
        assert!(f.seats_available >= 0 && f.seats_available <= f.seats_total);
    }
}

#[tokio::test]
async fn cancelling_twice_is_rejected_and_changes_nothing() {
    let state = empty_state();
    let flight_id = seed_flight(&state, "TK-002", 5).await;

    let ticket = booking_service::book_ticket(&state, booking_request(flight_id, "a@example.com"))
        .await
        .expect("booking")
        .data
        .expect("confirmation")
        .ticket;

    booking_service::cancel_ticket(&state, &ticket.id)
        .await
        .expect("first cancel");

    let err = booking_service::cancel_ticket(&state, &ticket.id)
        .await
        .expect_err("second cancel");
    assert!(matches!(err, AppError::AlreadyCancelled));

    // Seat count did not drift above the total.
    let flights = flight_service::list_flights(&state)
        .await
        .expect("list")
        .data
        .expect("flights")
        .items;
    assert_eq!(flights[0].seats_available, 5);

    let tickets = booking_service::user_tickets(&state, "a@example.com")
        .await
        .expect("tickets")
        .data
        .expect("ticket data")
        .items;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].status, TicketStatus::Cancelled);
}

#[tokio::test]
async fn cancel_restores_seat_capped_at_total() {
    let state = empty_state();
    let flight_id = seed_flight(&state, "TK-003", 1).await;

    let ticket = booking_service::book_ticket(&state, booking_request(flight_id, "a@example.com"))
        .await
        .expect("booking")
        .data
        .expect("confirmation")
        .ticket;

    booking_service::cancel_ticket(&state, &ticket.id)
        .await
        .expect("cancel");

    let flights = flight_service::list_flights(&state)
        .await
        .expect("list")
        .data
        .expect("flights")
        .items;
    assert_eq!(flights[0].seats_available, 1);
    assert_eq!(flights[0].seats_total, 1);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let state = empty_state();

    let err = booking_service::book_ticket(&state, booking_request(999, "a@example.com"))
        .await
        .expect_err("no such flight");
    assert!(matches!(err, AppError::NotFound));

    let err = booking_service::cancel_ticket(&state, "TKT-00000000-deadbeef")
        .await
        .expect_err("no such ticket");
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn invalid_booking_input_is_rejected_without_side_effects() {
    let state = empty_state();
    let flight_id = seed_flight(&state, "TK-004", 10).await;

    let mut bad_email = booking_request(flight_id, "not-an-email");
    bad_email.email = "not an@email".into();
    let err = booking_service::book_ticket(&state, bad_email)
        .await
        .expect_err("malformed email");
    assert!(matches!(err, AppError::InvalidInput(_)));

    let mut no_name = booking_request(flight_id, "a@example.com");
    no_name.passenger_name = "  ".into();
    let err = booking_service::book_ticket(&state, no_name)
        .await
        .expect_err("blank name");
    assert!(matches!(err, AppError::InvalidInput(_)));

    let mut no_passport = booking_request(flight_id, "a@example.com");
    no_passport.passport_number = "".into();
    let err = booking_service::book_ticket(&state, no_passport)
        .await
        .expect_err("blank passport");
    assert!(matches!(err, AppError::InvalidInput(_)));

    let stats = admin_service::statistics(&state)
        .await
        .expect("stats")
        .data
        .expect("stats data");
    assert_eq!(stats.total_tickets, 0);
    assert_eq!(stats.available_seats, 10);
}

#[tokio::test]
async fn explicit_seat_label_is_kept_and_default_is_assigned() {
    let state = empty_state();
    let flight_id = seed_flight(&state, "TK-005", 4).await;

    let mut with_seat = booking_request(flight_id, "a@example.com");
    with_seat.seat_number = Some("12A".into());
    let ticket = booking_service::book_ticket(&state, with_seat)
        .await
        .expect("booking")
        .data
        .expect("confirmation")
        .ticket;
    assert_eq!(ticket.seat_number, "12A");

    let ticket = booking_service::book_ticket(&state, booking_request(flight_id, "b@example.com"))
        .await
        .expect("booking")
        .data
        .expect("confirmation")
        .ticket;
    assert_eq!(ticket.seat_number, "2");
}

#[tokio::test]
async fn search_matches_country_case_insensitively() {
    let state = demo_state();

    let criteria = SearchCriteria {
        from_country: Some("uzbekistan".into()),
        ..Default::default()
    };
    let items = flight_service::search_flights(&state, criteria)
        .await
        .expect("search")
        .data
        .expect("flights")
        .items;
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|f| f.from_country == "Uzbekistan"));

    let criteria = SearchCriteria {
        to_country: Some("TURK".into()),
        ..Default::default()
    };
    let items = flight_service::search_flights(&state, criteria)
        .await
        .expect("search")
        .data
        .expect("flights")
        .items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].flight_number, "TK-123");
}

#[tokio::test]
async fn search_filters_are_conjunctive() {
    let state = demo_state();

    let criteria = SearchCriteria {
        from_country: Some("Uzbekistan".into()),
        to_country: None,
        passengers: Some(50),
    };
    let items = flight_service::search_flights(&state, criteria)
        .await
        .expect("search")
        .data
        .expect("flights")
        .items;
    // Only EK-789 has 50+ seats left out of Toshkent.
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].flight_number, "EK-789");

    let criteria = SearchCriteria {
        from_country: Some("Atlantis".into()),
        ..Default::default()
    };
    let items = flight_service::search_flights(&state, criteria)
        .await
        .expect("search")
        .data
        .expect("flights")
        .items;
    assert!(items.is_empty());
}

#[tokio::test]
async fn user_tickets_match_email_exactly() {
    let state = empty_state();
    let flight_id = seed_flight(&state, "TK-006", 10).await;

    booking_service::book_ticket(&state, booking_request(flight_id, "a@example.com"))
        .await
        .expect("booking");
    booking_service::book_ticket(&state, booking_request(flight_id, "a@example.com"))
        .await
        .expect("booking");
    booking_service::book_ticket(&state, booking_request(flight_id, "b@example.com"))
        .await
        .expect("booking");

    let resp = booking_service::user_tickets(&state, "a@example.com")
        .await
        .expect("tickets");
    assert_eq!(resp.meta.and_then(|m| m.count), Some(2));
    assert_eq!(resp.data.expect("ticket data").items.len(), 2);

    let empty = booking_service::user_tickets(&state, "nonexistent@x.com")
        .await
        .expect("tickets")
        .data
        .expect("ticket data")
        .items;
    assert!(empty.is_empty());
}

#[tokio::test]
async fn add_flight_validates_and_assigns_monotonic_ids() {
    let state = empty_state();

    let first = seed_flight(&state, "TK-010", 100).await;
    let second = seed_flight(&state, "TK-011", 120).await;
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let flights = flight_service::list_flights(&state)
        .await
        .expect("list")
        .data
        .expect("flights")
        .items;
    assert!(flights.iter().all(|f| f.seats_available == f.seats_total));

    let mut no_airline = flight_request("TK-012", 50);
    no_airline.airline = "".into();
    let err = admin_service::add_flight(&state, no_airline)
        .await
        .expect_err("blank airline");
    assert!(matches!(err, AppError::InvalidInput(_)));

    let mut free = flight_request("TK-013", 50);
    free.price = 0;
    let err = admin_service::add_flight(&state, free)
        .await
        .expect_err("zero price");
    assert!(matches!(err, AppError::InvalidInput(_)));

    let mut seatless = flight_request("TK-014", 0);
    seatless.seats_total = 0;
    let err = admin_service::add_flight(&state, seatless)
        .await
        .expect_err("zero seats");
    assert!(matches!(err, AppError::InvalidInput(_)));

    // Failed adds must not consume ids.
    let third = seed_flight(&state, "TK-015", 80).await;
    assert_eq!(third, 3);
}
