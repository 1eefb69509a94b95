use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use shared::{CategorizeQuery, TransactionFilter};

use super::category_controls::CategoryControls;
use super::transaction_table::TransactionTable;
use crate::hooks::use_categorize;
use crate::router::Route;
use crate::services::{ApiClient, Logger};

#[function_component(CategorizePage)]
pub fn categorize_page() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let location = use_location();
    let navigator = use_navigator();

    let filter = location
        .as_ref()
        .and_then(|location| location.query::<CategorizeQuery>().ok())
        .map(|query| TransactionFilter::from_query(&query))
        .unwrap_or_default();

    let categorize = use_categorize(&api_client, &filter);
    let state = &categorize.state;
    let actions = &categorize.actions;

    // Toggling "uncategorized only" rewrites the URL; the hook refetches on the new filter
    let on_uncategorized_toggle = {
        let month = filter.month.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let next = TransactionFilter {
                uncategorized: input.checked(),
                month: month.clone(),
            };
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::Categorize, &next.to_query()) {
                    Logger::error_with_component("categorize", &format!("Failed to update filter: {:?}", e));
                }
            }
        })
    };

    let on_reload = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let clear_month_query = TransactionFilter {
        uncategorized: filter.uncategorized,
        month: None,
    }
    .to_query();

    html! {
        <section class="categorize-page">
            <div class="page-header">
                <h2>{"Categorize Transactions"}</h2>
                <button class="btn btn-secondary" onclick={on_reload} disabled={state.loading}>{"Reload"}</button>
                <Link<Route> to={Route::Summary} classes="back-link">{"← Back to summary"}</Link<Route>>
            </div>

            <div class="filter-bar">
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        checked={filter.uncategorized}
                        onchange={on_uncategorized_toggle}
                    />
                    {" Uncategorized only"}
                </label>
                {if let Some(month) = &filter.month {
                    html! {
                        <span class="month-filter">
                            {format!("Month: {} ", month)}
                            <Link<Route, CategorizeQuery> to={Route::Categorize} query={Some(clear_month_query)}>
                                {"(clear)"}
                            </Link<Route, CategorizeQuery>>
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>

            <div class="categorize-stats">
                <span>{format!("{} transactions", state.transactions.len())}</span>
                <span>{format!("{} uncategorized", state.uncategorized_count())}</span>
                <span>{format!("Selected total: £{}", state.selected_total())}</span>
            </div>

            {if let Some(message) = &state.status_message {
                html! { <div class="status-message success">{message}</div> }
            } else {
                html! {}
            }}

            <CategoryControls
                selected_category={state.selected_category}
                selected_count={state.selection.len()}
                selected_total={state.selected_total()}
                submitting={state.submitting}
                on_category_change={actions.on_category_change.clone()}
                on_categorize={actions.categorize.clone()}
                on_auto_categorize={actions.auto_categorize.clone()}
            />

            <TransactionTable
                transactions={state.transactions.clone()}
                selection={state.selection.clone()}
                sort={state.sort}
                loading={state.loading}
                on_row_click={actions.on_row_click.clone()}
                on_sort={actions.on_sort.clone()}
            />
        </section>
    }
}
