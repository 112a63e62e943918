use shared::{SortDirection, SortField};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TableHeaderProps {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub on_sort: Callback<SortField>,
    pub show_selection: bool,
}

/// Column headers; the sortable ones cycle ascending/descending on click.
#[function_component(TableHeader)]
pub fn table_header(props: &TableHeaderProps) -> Html {
    let column = |label: &'static str, field: SortField| {
        let on_sort = props.on_sort.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_sort.emit(field));
        let indicator = if props.sort_field == field {
            match props.sort_direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            ""
        };
        html! {
            <th class="sortable" onclick={onclick}>
                {label}{indicator}
            </th>
        }
    };

    html! {
        <thead>
            <tr>
                {column("Flight Details", SortField::Duration)}
                {column("Stops", SortField::Stops)}
                {column("Price", SortField::Price)}
                {if props.show_selection {
                    html! { <th>{"Action"}</th> }
                } else {
                    html! {}
                }}
            </tr>
        </thead>
    }
}
