use shared::PAGE_SIZES;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TablePaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub on_page_change: Callback<usize>,
    pub on_page_size_change: Callback<usize>,
}

#[function_component(TablePagination)]
pub fn table_pagination(props: &TablePaginationProps) -> Html {
    let on_page_size = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                on_page_size_change.emit(size);
            }
        })
    };

    let goto = |page: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    html! {
        <div class="table-pagination">
            <label class="rows-per-page">
                {"Rows"}
                <select onchange={on_page_size}>
                    {for PAGE_SIZES.iter().map(|size| {
                        html! {
                            <option value={size.to_string()} selected={*size == props.page_size}>
                                {size}
                            </option>
                        }
                    })}
                </select>
            </label>
            <div class="pager">
                <button type="button" onclick={goto(1)} disabled={props.page == 1}>{"«"}</button>
                <button
                    type="button"
                    onclick={goto(props.page.saturating_sub(1).max(1))}
                    disabled={props.page == 1}
                >
                    {"‹"}
                </button>
                {for (1..=props.total_pages).map(|page| {
                    html! {
                        <button
                            type="button"
                            class={classes!((page == props.page).then_some("current"))}
                            onclick={goto(page)}
                        >
                            {page}
                        </button>
                    }
                })}
                <button
                    type="button"
                    onclick={goto((props.page + 1).min(props.total_pages))}
                    disabled={props.page == props.total_pages}
                >
                    {"›"}
                </button>
                <button
                    type="button"
                    onclick={goto(props.total_pages)}
                    disabled={props.page == props.total_pages}
                >
                    {"»"}
                </button>
            </div>
        </div>
    }
}
