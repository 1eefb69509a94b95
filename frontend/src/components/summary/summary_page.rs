use yew::prelude::*;
use yew_router::prelude::*;

use super::pivot_table::PivotTable;
use crate::hooks::use_summary;
use crate::router::Route;
use crate::services::ApiClient;

#[function_component(SummaryPage)]
pub fn summary_page() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let summary = use_summary(&api_client);
    let state = &summary.state;

    let on_reload = {
        let refresh = summary.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <section class="summary-page">
            <div class="page-header">
                <h2>{"Summary"}</h2>
                <button class="btn btn-secondary" onclick={on_reload}>{"Reload"}</button>
                <Link<Route> to={Route::Trends} classes="btn btn-secondary">{"View trends"}</Link<Route>>
            </div>

            <div class="balance-display">
                {match state.available_to_spend() {
                    Some(amount) => html! {
                        <span class="balance-amount">{format!("Available to spend: {}", amount)}</span>
                    },
                    None if state.loading_total => html! {
                        <span class="balance-amount loading">{"Loading balance..."}</span>
                    },
                    None => html! {},
                }}
            </div>

            {match &state.pivot {
                Some(pivot) if !pivot.is_empty() => html! { <PivotTable pivot={pivot.clone()} /> },
                Some(_) => html! {
                    <div class="empty-state">{"No spending data yet. Import transactions to see a summary."}</div>
                },
                None if state.loading_pivot => html! { <div class="loading">{"Loading summary..."}</div> },
                None => html! {
                    <div class="empty-state">{"Summary data is unavailable."}</div>
                },
            }}
        </section>
    }
}
