//! Domain model and presentation pipeline for the flight-search client.
//!
//! Everything here is target-independent: the wire types exchanged with the
//! flight-search proxies, the pure sort/paginate engine, the per-row
//! booking-offer cache, and the two-stage outbound/return trip workflow.
//! The Yew frontend drives these from its hooks and components.

pub mod enrichment;
pub mod models;
pub mod search;
pub mod table;

pub use enrichment::{booking_query, extract_offers, FetchTicket, OfferCache, OfferState};
pub use models::{
    AirportOption, AirportSearchResponse, ApiError, BookingOffer, CabinClass, Carrier, Carriers,
    FlightDetailsQuery, FlightDetailsResponse, FlightSearchQuery, FlightSearchResponse, Itinerary,
    Leg, LegPlace, LegReference, Price, Segment,
};
pub use search::{return_query, PassengerCounts, PassengerKind, TripStage, TripType, MAX_PASSENGERS};
pub use table::{
    paginate, sort_itineraries, total_pages, SortDirection, SortField, TableState,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
