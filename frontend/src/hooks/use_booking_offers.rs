use std::rc::Rc;

use shared::{booking_query, BookingOffer, FetchTicket, OfferCache, PassengerCounts};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Reducer wrapper so completion handlers always apply against the latest
/// cache instead of a render-time snapshot.
#[derive(Clone, PartialEq, Default)]
pub struct OffersModel {
    pub cache: OfferCache,
}

pub enum OffersAction {
    Begin { id: String },
    Complete { ticket: FetchTicket, id: String, offers: Vec<BookingOffer> },
    Fail { ticket: FetchTicket, id: String },
    Reset,
}

impl Reducible for OffersModel {
    type Action = OffersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cache = self.cache.clone();
        match action {
            OffersAction::Begin { id } => {
                cache.begin_fetch(&id);
            }
            OffersAction::Complete { ticket, id, offers } => {
                cache.complete(ticket, &id, offers);
            }
            OffersAction::Fail { ticket, id } => {
                cache.fail(ticket, &id);
            }
            OffersAction::Reset => {
                cache.reset_for_new_results();
            }
        }
        Rc::new(OffersModel { cache })
    }
}

pub struct UseBookingOffersResult {
    /// Snapshot of the per-row offer store for rendering.
    pub offers: OfferCache,
    /// Trigger one row's enrichment fetch. No-op while that row is loading
    /// or already loaded.
    pub fetch: Callback<shared::Itinerary>,
}

/// Owns the booking-offer cache for the current result list. The cache is
/// discarded whenever `results_generation` changes; completions belonging to
/// a discarded list carry a stale ticket and are dropped by the reducer.
#[hook]
pub fn use_booking_offers(
    api_client: &ApiClient,
    session_id: String,
    passengers: PassengerCounts,
    results_generation: u64,
) -> UseBookingOffersResult {
    let model = use_reducer(OffersModel::default);

    {
        let model = model.clone();
        use_effect_with(results_generation, move |_| {
            model.dispatch(OffersAction::Reset);
            || ()
        });
    }

    let fetch = {
        let model = model.clone();
        let api_client = api_client.clone();
        Callback::from(move |itinerary: shared::Itinerary| {
            if model.cache.entry(&itinerary.id).is_some() {
                Logger::debug_with_component(
                    "booking-offers",
                    &format!("Offers for {} already loading or loaded", itinerary.id),
                );
                return;
            }
            let ticket = model.cache.current_ticket();
            let id = itinerary.id.clone();
            model.dispatch(OffersAction::Begin { id: id.clone() });

            let query = booking_query(&itinerary, &session_id, &passengers);
            let api_client = api_client.clone();
            let model = model.clone();
            spawn_local(async move {
                match api_client.fetch_booking_offers(&query).await {
                    Ok(offers) => {
                        model.dispatch(OffersAction::Complete { ticket, id, offers });
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "booking-offers",
                            &format!("Failed to fetch offers for {}: {}", id, e),
                        );
                        model.dispatch(OffersAction::Fail { ticket, id });
                    }
                }
            });
        })
    };

    UseBookingOffersResult {
        offers: model.cache.clone(),
        fetch,
    }
}
