use shared::Itinerary;
use yew::prelude::*;

use crate::services::format::format_time;

#[derive(Properties, PartialEq)]
pub struct FlightRowProps {
    pub itinerary: Itinerary,
    pub expanded: bool,
    pub show_selection: bool,
    pub on_toggle_expand: Callback<String>,
    #[prop_or_default]
    pub on_select_outbound: Option<Callback<Itinerary>>,
}

/// Summary row: primary-leg times and carriers, stop count, price, and the
/// Select Flight action when an outbound must be chosen. Clicking anywhere
/// else on the row toggles the expanded detail panel.
#[function_component(FlightRow)]
pub fn flight_row(props: &FlightRowProps) -> Html {
    let itinerary = &props.itinerary;
    let leg = itinerary.primary_leg();

    let onclick = {
        let id = itinerary.id.clone();
        let on_toggle_expand = props.on_toggle_expand.clone();
        Callback::from(move |_: MouseEvent| on_toggle_expand.emit(id.clone()))
    };

    let carriers = leg
        .map(|leg| {
            leg.carriers
                .marketing
                .iter()
                .map(|carrier| carrier.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    html! {
        <tr class={classes!("flight-row", props.expanded.then_some("expanded"))} onclick={onclick}>
            <td class="flight-details">
                {if let Some(leg) = leg {
                    html! {
                        <div class="flight-summary">
                            <div class="flight-times">
                                <span>{format_time(&leg.departure)}</span>
                                <span>{"→"}</span>
                                <span>{format_time(&leg.arrival)}</span>
                            </div>
                            <div class="flight-carriers">{carriers}</div>
                        </div>
                    }
                } else {
                    html! { <div class="flight-summary">{"No leg information"}</div> }
                }}
            </td>
            <td class="stops">
                {format!("{} stop(s)", leg.map(|leg| leg.stop_count).unwrap_or(0))}
            </td>
            <td class="price">{&itinerary.price.formatted}</td>
            {if props.show_selection {
                let select = {
                    let itinerary = itinerary.clone();
                    let on_select = props.on_select_outbound.clone();
                    Callback::from(move |e: MouseEvent| {
                        // Selection must not also toggle the row expansion.
                        e.stop_propagation();
                        if let Some(on_select) = &on_select {
                            on_select.emit(itinerary.clone());
                        }
                    })
                };
                html! {
                    <td class="action">
                        <button type="button" class="select-flight" onclick={select}>
                            {"Select Flight"}
                        </button>
                    </td>
                }
            } else {
                html! {}
            }}
        </tr>
    }
}
