use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{BookingOffer, FlightDetailsQuery, FlightDetailsResponse, Itinerary, LegReference};
use crate::search::PassengerCounts;

/// Lifecycle of one row's booking-offer lookup. Absence from the cache is
/// the third state: nothing fetched yet (or a failed fetch awaiting retry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OfferState {
    Loading,
    Loaded(Vec<BookingOffer>),
}

/// Proof that a fetch was started against the current result list. A ticket
/// from before a `reset_for_new_results` is stale and its completion is
/// dropped instead of written into the replacement list's cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Per-row booking-offer store, keyed by itinerary id.
///
/// Owned by the result table for its current result list; discarded when the
/// list identity changes. At most one fetch may be in flight per id, and a
/// loaded entry is memoized for the lifetime of the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferCache {
    entries: HashMap<String, OfferState>,
    generation: u64,
}

impl OfferCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, id: &str) -> Option<&OfferState> {
        self.entries.get(id)
    }

    pub fn is_loading(&self, id: &str) -> bool {
        matches!(self.entries.get(id), Some(OfferState::Loading))
    }

    pub fn offers(&self, id: &str) -> Option<&[BookingOffer]> {
        match self.entries.get(id) {
            Some(OfferState::Loaded(offers)) => Some(offers),
            _ => None,
        }
    }

    /// A ticket bound to the current result list, for callers that split the
    /// begin/complete steps across async boundaries.
    pub fn current_ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Mark `id` as loading and hand back a ticket for the completion
    /// handlers. Returns `None` when a fetch is already in flight or the
    /// offers are already loaded; the caller must not issue a request then.
    pub fn begin_fetch(&mut self, id: &str) -> Option<FetchTicket> {
        if self.entries.contains_key(id) {
            return None;
        }
        self.entries.insert(id.to_string(), OfferState::Loading);
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Store the fetched offers. A stale ticket (the list was replaced while
    /// the fetch was in flight) is ignored.
    pub fn complete(&mut self, ticket: FetchTicket, id: &str, offers: Vec<BookingOffer>) {
        if ticket.generation != self.generation {
            return;
        }
        self.entries.insert(id.to_string(), OfferState::Loaded(offers));
    }

    /// Revert a failed fetch to absent so the user can retry by interacting
    /// with the row again. Stale tickets are ignored.
    pub fn fail(&mut self, ticket: FetchTicket, id: &str) {
        if ticket.generation != self.generation {
            return;
        }
        if self.is_loading(id) {
            self.entries.remove(id);
        }
    }

    /// Drop every entry and invalidate outstanding tickets. Called when the
    /// result list is replaced by a new search.
    pub fn reset_for_new_results(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }
}

/// Build the flight-details request for one itinerary: the id portion before
/// its first `|` plus a per-leg (origin code, destination code, departure
/// day) projection, carried alongside the session token and passenger counts.
pub fn booking_query(
    itinerary: &Itinerary,
    session_id: &str,
    passengers: &PassengerCounts,
) -> FlightDetailsQuery {
    let itinerary_id = itinerary
        .id
        .split('|')
        .next()
        .unwrap_or(itinerary.id.as_str())
        .to_string();

    let legs = itinerary
        .legs
        .iter()
        .map(|leg| LegReference {
            origin: leg.origin.code().to_string(),
            destination: leg.destination.code().to_string(),
            date: departure_day(&leg.departure),
        })
        .collect();

    FlightDetailsQuery {
        itinerary_id,
        legs,
        session_id: session_id.to_string(),
        adults: passengers.adults,
        children: passengers.children,
        infants: passengers.infants,
    }
}

/// Truncate an upstream departure timestamp to its calendar day (YYYY-MM-DD).
fn departure_day(departure: &str) -> String {
    NaiveDateTime::parse_from_str(departure, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date().format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| {
            departure
                .split('T')
                .next()
                .unwrap_or(departure)
                .to_string()
        })
}

/// First pricing option's agents, empty when any nesting level is missing.
pub fn extract_offers(response: FlightDetailsResponse) -> Vec<BookingOffer> {
    response
        .data
        .itinerary
        .pricing_options
        .into_iter()
        .next()
        .map(|option| option.agents)
        .unwrap_or_default()
}
