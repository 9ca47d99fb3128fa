use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        flights::{AddFlightRequest, FlightList, SearchCriteria},
        stats::Statistics,
        tickets::{BookTicketRequest, BookingConfirmation, TicketList},
    },
    models::{Flight, FlightStatus, Order, PaymentStatus, Ticket, TicketStatus},
    response::{ApiResponse, Meta},
    routes::{admin, flights, health, tickets},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("Token")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        flights::list_flights,
        flights::search_flights,
        tickets::book_ticket,
        tickets::user_tickets,
        tickets::cancel_ticket,
        admin::add_flight,
        admin::statistics
    ),
    components(
        schemas(
            Flight,
            FlightStatus,
            Ticket,
            TicketStatus,
            Order,
            PaymentStatus,
            SearchCriteria,
            AddFlightRequest,
            BookTicketRequest,
            BookingConfirmation,
            FlightList,
            TicketList,
            Statistics,
            Meta,
            ApiResponse<Flight>,
            ApiResponse<FlightList>,
            ApiResponse<TicketList>,
            ApiResponse<BookingConfirmation>,
            ApiResponse<Statistics>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Flights", description = "Flight listing and search"),
        (name = "Tickets", description = "Booking and cancellation"),
        (name = "Admin", description = "Flight administration and statistics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
