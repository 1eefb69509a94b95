use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlSelectElement;

use super::trend_chart::TrendChart;
use crate::hooks::use_trends;
use crate::router::Route;
use crate::services::ApiClient;

#[function_component(TrendsPage)]
pub fn trends_page() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let trends = use_trends(&api_client);
    let state = &trends.state;

    let onchange = {
        let on_category_change = trends.actions.on_category_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                on_category_change.emit((!value.is_empty()).then_some(value));
            }
        })
    };

    html! {
        <section class="trends-page">
            <div class="page-header">
                <h2>{"Spending Trends"}</h2>
                <Link<Route> to={Route::Summary} classes="back-link">{"← Back to summary"}</Link<Route>>
            </div>

            <div class="group-charts">
                {if state.group_series.is_empty() {
                    html! { <div class="loading">{"Loading group trends..."}</div> }
                } else {
                    html! {
                        {for state.group_series.iter().map(|(group, series)| html! {
                            <TrendChart
                                title={format!("{} (cumulative)", group.label())}
                                series={series.clone()}
                                current_year={state.current_year}
                            />
                        })}
                    }
                }}
            </div>

            <div class="category-trend">
                <label class="category-picker">
                    {"Category: "}
                    <select class="category-select" {onchange}>
                        <option value="" selected={state.selected_category.is_none()}>{"Select category"}</option>
                        {for state.categories.iter().map(|category| html! {
                            <option
                                value={category.clone()}
                                selected={state.selected_category.as_deref() == Some(category.as_str())}
                            >
                                {category}
                            </option>
                        })}
                    </select>
                </label>

                {if let Some(category) = &state.selected_category {
                    html! {
                        <TrendChart
                            title={format!("{} (cumulative)", category)}
                            series={state.category_series.clone().unwrap_or_default()}
                            current_year={state.current_year}
                            loading={state.loading_category}
                        />
                    }
                } else {
                    html! {}
                }}
            </div>
        </section>
    }
}
