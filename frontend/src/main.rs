use shared::{TripStage, TripType};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{FlightTable, Navbar, SearchBar, ThemeProvider};
use hooks::use_booking_offers::use_booking_offers;
use hooks::use_flight_search::use_flight_search;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <FlightSearch />
        </ThemeProvider>
    }
}

#[function_component(FlightSearch)]
fn flight_search() -> Html {
    let api_client = ApiClient::new();
    let search = use_flight_search(&api_client);
    let booking = use_booking_offers(
        &api_client,
        search.state.session_id.clone(),
        search.state.passengers,
        search.state.results_generation,
    );

    let is_round_trip = search.state.trip_type == TripType::RoundTrip;

    let results = match &search.state.stage {
        TripStage::Idle => html! {},
        TripStage::OutboundResults { itineraries } => html! {
            <section class="results">
                <h2>{if is_round_trip { "Select Outbound Flight" } else { "Flights" }}</h2>
                <FlightTable
                    itineraries={itineraries.clone()}
                    show_selection={is_round_trip}
                    on_select_outbound={is_round_trip.then(|| search.actions.select_outbound.clone())}
                    offers={booking.offers.clone()}
                    on_fetch_offers={booking.fetch.clone()}
                />
            </section>
        },
        TripStage::AwaitingReturn { outbound } => html! {
            <section class="results">
                <h2>{"Selected Outbound Flight"}</h2>
                <FlightTable
                    itineraries={vec![outbound.clone()]}
                    offers={booking.offers.clone()}
                    on_fetch_offers={booking.fetch.clone()}
                />
                <div class="loading">{"Loading return flights..."}</div>
            </section>
        },
        TripStage::ReturnResults { outbound, itineraries } => html! {
            <section class="results">
                <h2>{"Selected Outbound Flight"}</h2>
                <FlightTable
                    itineraries={vec![outbound.clone()]}
                    offers={booking.offers.clone()}
                    on_fetch_offers={booking.fetch.clone()}
                />
                <FlightTable
                    itineraries={itineraries.clone()}
                    heading="Select your return flight"
                    offers={booking.offers.clone()}
                    on_fetch_offers={booking.fetch.clone()}
                />
            </section>
        },
    };

    html! {
        <>
            <Navbar />
            <main class="hero">
                <h1>{"Flight Search"}</h1>
                <SearchBar
                    api_client={api_client.clone()}
                    trip_type={search.state.trip_type}
                    on_trip_type_change={search.actions.set_trip_type.clone()}
                    passengers={search.state.passengers}
                    on_passengers_change={search.actions.set_passengers.clone()}
                    searching={search.state.searching}
                    on_search={search.actions.run_search.clone()}
                    on_session_id={search.actions.set_session_id.clone()}
                />
                {if let Some(message) = &search.state.error {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}
                {if search.state.searching {
                    html! { <div class="loading">{"Searching flights..."}</div> }
                } else {
                    html! {}
                }}
                {results}
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
