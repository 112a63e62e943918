use shared::{
    AirportOption, CabinClass, FlightSearchQuery, PassengerCounts, PassengerKind, TripType,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::format::{today, tomorrow};
use crate::services::logging::Logger;

/// Autocomplete fires only once the query is this long.
const MIN_QUERY_LEN: usize = 3;

#[derive(Properties, PartialEq)]
pub struct AirportFieldProps {
    pub label: AttrValue,
    pub api_client: ApiClient,
    pub on_select: Callback<Option<AirportOption>>,
    /// The airport lookup response carries a session token too.
    pub on_session_id: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// One origin/destination input: free text above a suggestion dropdown.
#[function_component(AirportField)]
pub fn airport_field(props: &AirportFieldProps) -> Html {
    let text = use_state(String::new);
    let options = use_state(Vec::<AirportOption>::new);
    let loading = use_state(|| false);
    let open = use_state(|| false);

    let on_input = {
        let text = text.clone();
        let options = options.clone();
        let loading = loading.clone();
        let open = open.clone();
        let api_client = props.api_client.clone();
        let on_select = props.on_select.clone();
        let on_session_id = props.on_session_id.clone();

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            text.set(value.clone());
            // Typing invalidates whatever was picked before.
            on_select.emit(None);

            if value.len() < MIN_QUERY_LEN {
                open.set(false);
                return;
            }

            let options = options.clone();
            let loading = loading.clone();
            let open = open.clone();
            let api_client = api_client.clone();
            let on_session_id = on_session_id.clone();
            spawn_local(async move {
                loading.set(true);
                // Short delay so we don't hammer the lookup on every keystroke.
                gloo::timers::future::TimeoutFuture::new(300).await;
                match api_client.search_airports(&value).await {
                    Ok(response) => {
                        on_session_id.emit(response.session_id.clone());
                        options.set(response.options());
                        open.set(true);
                    }
                    Err(e) => {
                        Logger::warn_with_component(
                            "airport-lookup",
                            &format!("Airport search failed: {}", e),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    let pick = {
        let text = text.clone();
        let open = open.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |option: AirportOption| {
            text.set(option.label.clone());
            open.set(false);
            on_select.emit(Some(option));
        })
    };

    html! {
        <div class="airport-field">
            <label>{props.label.clone()}</label>
            <input
                type="text"
                value={(*text).clone()}
                oninput={on_input}
                disabled={props.disabled}
                placeholder="City or airport"
            />
            {if *loading {
                html! { <span class="field-spinner" /> }
            } else {
                html! {}
            }}
            {if *open && !options.is_empty() {
                html! {
                    <ul class="airport-options">
                        {for options.iter().map(|option| {
                            let option = option.clone();
                            let pick = pick.clone();
                            let label = option.label.clone();
                            let kind = option.kind.clone();
                            html! {
                                <li>
                                    <button type="button" onclick={Callback::from(move |_| pick.emit(option.clone()))}>
                                        {label}
                                        <span class="airport-kind">{kind}</span>
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub api_client: ApiClient,
    pub trip_type: TripType,
    pub on_trip_type_change: Callback<TripType>,
    pub passengers: PassengerCounts,
    pub on_passengers_change: Callback<PassengerCounts>,
    pub searching: bool,
    pub on_search: Callback<FlightSearchQuery>,
    pub on_session_id: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let selected_from = use_state(|| None::<AirportOption>);
    let selected_to = use_state(|| None::<AirportOption>);
    let departure_date = use_state(today);
    let return_date = use_state(tomorrow);
    let cabin_class = use_state(|| CabinClass::Economy);
    let passenger_menu_open = use_state(|| false);
    let validation_error = use_state(|| None::<String>);

    let is_round_trip = props.trip_type == TripType::RoundTrip;

    let on_trip_type = {
        let on_trip_type_change = props.on_trip_type_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = if select.value() == "one_way" {
                TripType::OneWay
            } else {
                TripType::RoundTrip
            };
            on_trip_type_change.emit(value);
        })
    };

    let on_departure_date = {
        let departure_date = departure_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            departure_date.set(input.value());
        })
    };

    let on_return_date = {
        let return_date = return_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            return_date.set(input.value());
        })
    };

    let on_cabin_class = {
        let cabin_class = cabin_class.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cabin_class.set(CabinClass::from_str_or_default(&select.value()));
        })
    };

    let toggle_passenger_menu = {
        let passenger_menu_open = passenger_menu_open.clone();
        Callback::from(move |_: MouseEvent| passenger_menu_open.set(!*passenger_menu_open))
    };

    // Validates locally; an invalid form never reaches the network.
    let on_submit = {
        let selected_from = selected_from.clone();
        let selected_to = selected_to.clone();
        let departure_date = departure_date.clone();
        let return_date = return_date.clone();
        let cabin_class = cabin_class.clone();
        let validation_error = validation_error.clone();
        let passengers = props.passengers;
        let on_search = props.on_search.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(from), Some(to)) = ((*selected_from).clone(), (*selected_to).clone()) else {
                validation_error.set(Some(
                    "Please choose both an origin and a destination.".to_string(),
                ));
                return;
            };
            if departure_date.is_empty() {
                validation_error.set(Some("Please pick a departure date.".to_string()));
                return;
            }
            if is_round_trip && return_date.is_empty() {
                validation_error.set(Some("Please pick a return date.".to_string()));
                return;
            }
            validation_error.set(None);

            on_search.emit(FlightSearchQuery {
                origin_sky_id: from.sky_id,
                destination_sky_id: to.sky_id,
                origin_entity_id: from.entity_id,
                destination_entity_id: to.entity_id,
                date: (*departure_date).clone(),
                return_date: is_round_trip.then(|| (*return_date).clone()),
                cabin_class: *cabin_class,
                adults: passengers.adults,
                children: passengers.children,
                infants: passengers.infants,
            });
        })
    };

    let passenger_row = |label: &'static str,
                         caption: &'static str,
                         kind: PassengerKind,
                         count: u32| {
        let minus = {
            let passengers = props.passengers;
            let on_change = props.on_passengers_change.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(next) = passengers.try_adjust(kind, false) {
                    on_change.emit(next);
                }
            })
        };
        let plus = {
            let passengers = props.passengers;
            let on_change = props.on_passengers_change.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(next) = passengers.try_adjust(kind, true) {
                    on_change.emit(next);
                }
            })
        };
        let can_decrement = props.passengers.try_adjust(kind, false).is_some();
        let can_increment = props.passengers.try_adjust(kind, true).is_some();

        html! {
            <div class="passenger-row">
                <div>
                    <div class="passenger-label">{label}</div>
                    <div class="passenger-caption">{caption}</div>
                </div>
                <div class="passenger-stepper">
                    <button type="button" onclick={minus} disabled={!can_decrement}>{"−"}</button>
                    <span>{count}</span>
                    <button type="button" onclick={plus} disabled={!can_increment}>{"+"}</button>
                </div>
            </div>
        }
    };

    html! {
        <form class="search-bar" onsubmit={on_submit}>
            <select class="trip-type" onchange={on_trip_type} disabled={props.searching}>
                <option value="round_trip" selected={is_round_trip}>{"Round trip"}</option>
                <option value="one_way" selected={!is_round_trip}>{"One way"}</option>
            </select>

            <AirportField
                label="From"
                api_client={props.api_client.clone()}
                on_select={Callback::from({
                    let selected_from = selected_from.clone();
                    move |option| selected_from.set(option)
                })}
                on_session_id={props.on_session_id.clone()}
                disabled={props.searching}
            />
            <AirportField
                label="To"
                api_client={props.api_client.clone()}
                on_select={Callback::from({
                    let selected_to = selected_to.clone();
                    move |option| selected_to.set(option)
                })}
                on_session_id={props.on_session_id.clone()}
                disabled={props.searching}
            />

            <div class="date-field">
                <label>{"Departure"}</label>
                <input
                    type="date"
                    value={(*departure_date).clone()}
                    onchange={on_departure_date}
                    disabled={props.searching}
                />
            </div>
            {if is_round_trip {
                html! {
                    <div class="date-field">
                        <label>{"Return"}</label>
                        <input
                            type="date"
                            value={(*return_date).clone()}
                            onchange={on_return_date}
                            disabled={props.searching}
                        />
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="passenger-menu">
                <button type="button" onclick={toggle_passenger_menu}>
                    {format!("{} Passenger(s)", props.passengers.total())}
                </button>
                {if *passenger_menu_open {
                    html! {
                        <div class="passenger-popover">
                            {passenger_row("Adults", "Age 12+", PassengerKind::Adults, props.passengers.adults)}
                            {passenger_row("Children", "Age 2-11", PassengerKind::Children, props.passengers.children)}
                            {passenger_row("Infants", "Under 2", PassengerKind::Infants, props.passengers.infants)}
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>

            <select class="cabin-class" onchange={on_cabin_class} disabled={props.searching}>
                {for CabinClass::ALL.iter().map(|cabin| {
                    html! {
                        <option value={cabin.as_str()} selected={*cabin == *cabin_class}>
                            {cabin.label()}
                        </option>
                    }
                })}
            </select>

            <button type="submit" class="search-button" disabled={props.searching}>
                {if props.searching { "Searching..." } else { "Explore" }}
            </button>

            {if let Some(message) = (*validation_error).as_ref() {
                html! { <div class="form-message error">{message}</div> }
            } else {
                html! {}
            }}
        </form>
    }
}
