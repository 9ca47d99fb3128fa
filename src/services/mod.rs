pub mod admin_service;
pub mod booking_service;
pub mod flight_service;
