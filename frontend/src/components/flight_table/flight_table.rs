use shared::{Itinerary, OfferCache, SortField, TableState};
use yew::prelude::*;

use super::expanded_details::ExpandedDetails;
use super::flight_row::FlightRow;
use super::table_header::TableHeader;
use super::table_pagination::TablePagination;

#[derive(Properties, PartialEq)]
pub struct FlightTableProps {
    pub itineraries: Vec<Itinerary>,
    /// Round-trip outbound selection shows the Action column.
    #[prop_or_default]
    pub show_selection: bool,
    #[prop_or_default]
    pub on_select_outbound: Option<Callback<Itinerary>>,
    /// Banner rendered above the table for the return-selection stage.
    #[prop_or_default]
    pub heading: Option<AttrValue>,
    pub offers: OfferCache,
    pub on_fetch_offers: Callback<Itinerary>,
}

/// Paginated, sortable, expandable result table. Sorting and pagination are
/// a derived view over the canonical list in props; this component owns only
/// the presentation state.
#[function_component(FlightTable)]
pub fn flight_table(props: &FlightTableProps) -> Html {
    let state = use_state(TableState::new);

    // A new result list resets page, sort, and expansion.
    {
        let state = state.clone();
        use_effect_with(props.itineraries.clone(), move |_| {
            let mut next = (*state).clone();
            next.reset_for_new_results();
            state.set(next);
            || ()
        });
    }

    let result_count = props.itineraries.len();
    let total_pages = state.total_pages(result_count);
    let visible: Vec<Itinerary> = state
        .visible_page(&props.itineraries)
        .into_iter()
        .cloned()
        .collect();

    let on_sort = {
        let state = state.clone();
        Callback::from(move |field: SortField| {
            let mut next = (*state).clone();
            next.toggle_sort(field);
            state.set(next);
        })
    };

    let on_toggle_expand = {
        let state = state.clone();
        Callback::from(move |id: String| {
            let mut next = (*state).clone();
            next.toggle_expanded(&id);
            state.set(next);
        })
    };

    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: usize| {
            let mut next = (*state).clone();
            next.set_page(page, result_count);
            state.set(next);
        })
    };

    let on_page_size_change = {
        let state = state.clone();
        Callback::from(move |size: usize| {
            let mut next = (*state).clone();
            next.set_page_size(size);
            state.set(next);
        })
    };

    html! {
        <div class="flight-table">
            {if let Some(heading) = &props.heading {
                html! { <div class="table-heading"><h2>{heading.clone()}</h2></div> }
            } else {
                html! {}
            }}
            <table>
                <TableHeader
                    sort_field={state.sort_field}
                    sort_direction={state.sort_direction}
                    on_sort={on_sort}
                    show_selection={props.show_selection}
                />
                <tbody>
                    {for visible.iter().map(|itinerary| {
                        let expanded = state.is_expanded(&itinerary.id);
                        html! {
                            <>
                                <FlightRow
                                    key={itinerary.id.clone()}
                                    itinerary={itinerary.clone()}
                                    expanded={expanded}
                                    show_selection={props.show_selection}
                                    on_toggle_expand={on_toggle_expand.clone()}
                                    on_select_outbound={props.on_select_outbound.clone()}
                                />
                                {if expanded {
                                    html! {
                                        <ExpandedDetails
                                            itinerary={itinerary.clone()}
                                            offers={props.offers.entry(&itinerary.id).cloned()}
                                            on_fetch_offers={props.on_fetch_offers.clone()}
                                            show_selection={props.show_selection}
                                        />
                                    }
                                } else {
                                    html! {}
                                }}
                            </>
                        }
                    })}
                </tbody>
            </table>
            {if visible.is_empty() {
                html! { <div class="no-results">{"No flights found."}</div> }
            } else {
                html! {}
            }}
            {if total_pages > 1 {
                html! {
                    <TablePagination
                        page={state.page}
                        total_pages={total_pages}
                        page_size={state.page_size}
                        on_page_change={on_page_change}
                        on_page_size_change={on_page_size_change}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
