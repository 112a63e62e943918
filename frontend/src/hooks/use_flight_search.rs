use shared::{return_query, FlightSearchQuery, Itinerary, PassengerCounts, TripStage, TripType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct FlightSearchState {
    pub stage: TripStage,
    pub trip_type: TripType,
    /// Session token from the latest search response envelope, required on
    /// every follow-up call in the same session.
    pub session_id: String,
    pub passengers: PassengerCounts,
    pub searching: bool,
    pub error: Option<String>,
    /// Bumped whenever a new result list replaces the table contents, so
    /// per-list caches know to reset.
    pub results_generation: u64,
}

#[derive(Clone, PartialEq)]
pub struct FlightSearchActions {
    pub run_search: Callback<FlightSearchQuery>,
    pub select_outbound: Callback<Itinerary>,
    pub set_trip_type: Callback<TripType>,
    pub set_passengers: Callback<PassengerCounts>,
    /// The airport lookup also yields a session token before any search runs.
    pub set_session_id: Callback<String>,
}

pub struct UseFlightSearchResult {
    pub state: FlightSearchState,
    pub actions: FlightSearchActions,
}

/// Search orchestrator: owns the search parameters and session context,
/// triggers primary and return-leg searches, and drives the two-stage
/// outbound/return selection workflow. A failed search keeps the stage it
/// started from and surfaces one generic failure notice.
#[hook]
pub fn use_flight_search(api_client: &ApiClient) -> UseFlightSearchResult {
    let stage = use_state(|| TripStage::Idle);
    let trip_type = use_state(|| TripType::RoundTrip);
    let session_id = use_state(String::new);
    let passengers = use_state(PassengerCounts::default);
    let searching = use_state(|| false);
    let error = use_state(|| None::<String>);
    let results_generation = use_state(|| 0u64);
    let last_query = use_state(|| None::<FlightSearchQuery>);

    let run_search = {
        let api_client = api_client.clone();
        let stage = stage.clone();
        let session_id = session_id.clone();
        let searching = searching.clone();
        let error = error.clone();
        let results_generation = results_generation.clone();
        let last_query = last_query.clone();

        Callback::from(move |query: FlightSearchQuery| {
            let api_client = api_client.clone();
            let stage = stage.clone();
            let session_id = session_id.clone();
            let searching = searching.clone();
            let error = error.clone();
            let generation = *results_generation;
            let results_generation = results_generation.clone();
            last_query.set(Some(query.clone()));

            spawn_local(async move {
                searching.set(true);
                error.set(None);

                match api_client.search_flights(&query).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            "flight-search",
                            &format!("Search returned {} itineraries", response.data.itineraries.len()),
                        );
                        if !response.data.context.session_id.is_empty() {
                            session_id.set(response.data.context.session_id.clone());
                        }
                        stage.set(TripStage::with_outbound_results(response.data.itineraries));
                        results_generation.set(generation + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("flight-search", &e);
                        error.set(Some(
                            "Failed to search flights. Please try again.".to_string(),
                        ));
                    }
                }

                searching.set(false);
            });
        })
    };

    let select_outbound = {
        let api_client = api_client.clone();
        let stage = stage.clone();
        let searching = searching.clone();
        let error = error.clone();
        let results_generation = results_generation.clone();
        let last_query = last_query.clone();

        Callback::from(move |outbound: Itinerary| {
            let Some(query) = (*last_query).clone() else {
                return;
            };
            let Some(next_stage) = stage.select_outbound(outbound.clone()) else {
                return;
            };
            let Some(return_search) = return_query(&query, &outbound) else {
                error.set(Some("Missing return date for the return search.".to_string()));
                return;
            };

            // Keep the outbound list around in case the return search fails.
            let prior = (*stage).clone();
            stage.set(next_stage);

            let api_client = api_client.clone();
            let stage = stage.clone();
            let searching = searching.clone();
            let error = error.clone();
            let generation = *results_generation;
            let results_generation = results_generation.clone();

            spawn_local(async move {
                searching.set(true);
                error.set(None);

                match api_client.search_flights(&return_search).await {
                    Ok(response) => {
                        stage.set(TripStage::ReturnResults {
                            outbound,
                            itineraries: response.data.itineraries,
                        });
                        results_generation.set(generation + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("flight-search", &e);
                        error.set(Some(
                            "Failed to fetch return flights. Please try again.".to_string(),
                        ));
                        stage.set(prior);
                    }
                }

                searching.set(false);
            });
        })
    };

    let set_trip_type = {
        let trip_type = trip_type.clone();
        Callback::from(move |value: TripType| trip_type.set(value))
    };

    let set_passengers = {
        let passengers = passengers.clone();
        Callback::from(move |counts: PassengerCounts| passengers.set(counts))
    };

    let set_session_id = {
        let session_id = session_id.clone();
        Callback::from(move |value: String| {
            if !value.is_empty() {
                session_id.set(value);
            }
        })
    };

    let state = FlightSearchState {
        stage: (*stage).clone(),
        trip_type: *trip_type,
        session_id: (*session_id).clone(),
        passengers: *passengers,
        searching: *searching,
        error: (*error).clone(),
        results_generation: *results_generation,
    };

    let actions = FlightSearchActions {
        run_search,
        select_outbound,
        set_trip_type,
        set_passengers,
        set_session_id,
    };

    UseFlightSearchResult { state, actions }
}
