pub mod use_booking_offers;
pub mod use_flight_search;
