use shared::{Itinerary, OfferState};
use yew::prelude::*;

use crate::services::format::{format_date_time, format_duration};

#[derive(Properties, PartialEq)]
pub struct ExpandedDetailsProps {
    pub itinerary: Itinerary,
    /// This row's slot in the offer cache; `None` means nothing fetched yet.
    pub offers: Option<OfferState>,
    pub on_fetch_offers: Callback<Itinerary>,
    /// Extra Action column widens the panel.
    pub show_selection: bool,
}

/// The expanded panel under a row: every leg with its segments and carriers,
/// plus the on-demand booking-options section. Offers are fetched only when
/// the user asks for them, once per row per result list.
#[function_component(ExpandedDetails)]
pub fn expanded_details(props: &ExpandedDetailsProps) -> Html {
    let colspan = if props.show_selection { "4" } else { "3" };

    let booking_section = match &props.offers {
        Some(OfferState::Loading) => html! {
            <div class="booking-loading">
                <span class="spinner" />
                {"Loading booking options..."}
            </div>
        },
        Some(OfferState::Loaded(offers)) if offers.is_empty() => html! {
            <div class="booking-empty">{"No booking options available."}</div>
        },
        Some(OfferState::Loaded(offers)) => html! {
            <div class="booking-offers">
                {for offers.iter().map(|offer| {
                    html! {
                        <a href={offer.url.clone()} target="_blank" rel="noopener noreferrer">
                            <button type="button" class="booking-offer">
                                {format!("Book with {} (${})", offer.name, offer.price)}
                            </button>
                        </a>
                    }
                })}
            </div>
        },
        None => {
            let fetch = {
                let itinerary = props.itinerary.clone();
                let on_fetch_offers = props.on_fetch_offers.clone();
                Callback::from(move |_: MouseEvent| on_fetch_offers.emit(itinerary.clone()))
            };
            html! {
                <button type="button" class="show-booking" onclick={fetch}>
                    {"Show Booking Options"}
                </button>
            }
        }
    };

    html! {
        <tr class="expanded-details">
            <td colspan={colspan}>
                {for props.itinerary.legs.iter().map(|leg| {
                    html! {
                        <div class="leg-details">
                            <div class="leg-route">
                                <strong>{format!("{} → {}", leg.origin.name, leg.destination.name)}</strong>
                            </div>
                            <div class="leg-segments">
                                {for leg.segments.iter().enumerate().map(|(index, segment)| {
                                    html! {
                                        <div class="segment">
                                            <div class="segment-route">
                                                {format!(
                                                    "Segment {}: {}, {} → {}, {}",
                                                    index + 1,
                                                    segment.origin.parent.name,
                                                    segment.origin.parent.country,
                                                    segment.destination.parent.name,
                                                    segment.destination.parent.country,
                                                )}
                                            </div>
                                            <div>{format!("Flight: {}", segment.flight_number)}</div>
                                            <div>{format!("Departure: {}", format_date_time(&segment.departure))}</div>
                                            <div>{format!("Arrival: {}", format_date_time(&segment.arrival))}</div>
                                            <div>{format!("Duration: {}", format_duration(segment.duration_in_minutes))}</div>
                                        </div>
                                    }
                                })}
                            </div>
                            <div class="leg-summary">
                                <div>{format!("Total Duration: {}", format_duration(leg.duration_in_minutes))}</div>
                                <div class="leg-carriers">
                                    {"Carrier(s):"}
                                    <ul>
                                        {for leg.carriers.marketing.iter().map(|carrier| {
                                            html! {
                                                <li>
                                                    {if let Some(logo_url) = &carrier.logo_url {
                                                        html! { <img src={logo_url.clone()} alt={carrier.name.clone()} class="carrier-logo" /> }
                                                    } else {
                                                        html! {}
                                                    }}
                                                    <span>{&carrier.name}</span>
                                                </li>
                                            }
                                        })}
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }
                })}
                <div class="booking-options">
                    <div class="booking-title">{"Booking Options:"}</div>
                    {booking_section}
                </div>
            </td>
        </tr>
    }
}
