use yew::prelude::*;
use shared::{
    build_trend_series, distinct_categories, CategoryGroup, CategorySpend, ReportingPeriod,
    TrendSeries, TREND_GROUPS,
};
use wasm_bindgen_futures::spawn_local;
use crate::services::{ApiClient, Logger, RequestSequence};

const COMPONENT: &str = "trends";

#[derive(Clone, PartialEq)]
pub struct TrendsState {
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub category_series: Option<TrendSeries>,
    pub group_series: Vec<(CategoryGroup, TrendSeries)>,
    pub current_year: i32,
    pub loading_category: bool,
}

pub struct UseTrendsResult {
    pub state: TrendsState,
    pub actions: UseTrendsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTrendsActions {
    pub on_category_change: Callback<Option<String>>,
}

#[hook]
pub fn use_trends(api_client: &ApiClient) -> UseTrendsResult {
    let categories = use_state(Vec::<String>::new);
    let selected_category = use_state(|| None::<String>);
    let category_series = use_state(|| None::<TrendSeries>);
    let group_series = use_state(Vec::<(CategoryGroup, TrendSeries)>::new);
    let loading_category = use_state(|| false);
    let sequence = use_state(RequestSequence::new);
    let period = ReportingPeriod::current();

    // Category list for the selector
    {
        let api_client = api_client.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_all_transactions().await {
                    Ok(transactions) => categories.set(distinct_categories(&transactions)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching categories: {}", e));
                    }
                }
            });
            || ()
        });
    }

    // Group charts merge the spend of every member category
    {
        let api_client = api_client.clone();
        let group_series = group_series.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let mut loaded = Vec::with_capacity(TREND_GROUPS.len());
                for group in TREND_GROUPS {
                    let records = fetch_group_spend(&api_client, group).await;
                    loaded.push((group, build_trend_series(&records, period)));
                }
                group_series.set(loaded);
            });
            || ()
        });
    }

    // Selected category chart; a newer selection supersedes an in-flight fetch
    {
        let api_client = api_client.clone();
        let category_series = category_series.clone();
        let loading_category = loading_category.clone();
        let sequence = (*sequence).clone();
        use_effect_with((*selected_category).clone(), move |selected: &Option<String>| {
            let ticket = sequence.issue();
            match selected.clone() {
                None => {
                    category_series.set(None);
                    loading_category.set(false);
                }
                Some(category) => {
                    spawn_local(async move {
                        loading_category.set(true);
                        let result = api_client.get_category_spend(&category).await;
                        if !sequence.is_current(ticket) {
                            Logger::debug_with_component(COMPONENT, "Dropping response of a superseded category request");
                            return;
                        }

                        match result {
                            Ok(records) => category_series.set(Some(build_trend_series(&records, period))),
                            Err(e) => {
                                Logger::error_with_component(
                                    COMPONENT,
                                    &format!("Error fetching spend for {}: {}", category, e),
                                );
                            }
                        }
                        loading_category.set(false);
                    });
                }
            }
            || ()
        });
    }

    let on_category_change = {
        let selected_category = selected_category.clone();
        Callback::from(move |category: Option<String>| selected_category.set(category))
    };

    let state = TrendsState {
        categories: (*categories).clone(),
        selected_category: (*selected_category).clone(),
        category_series: (*category_series).clone(),
        group_series: (*group_series).clone(),
        current_year: period.year,
        loading_category: *loading_category,
    };

    UseTrendsResult {
        state,
        actions: UseTrendsActions { on_category_change },
    }
}

/// Concatenates the spend records of every member of a group, skipping
/// members whose fetch fails
async fn fetch_group_spend(api_client: &ApiClient, group: CategoryGroup) -> Vec<CategorySpend> {
    let mut records = Vec::new();
    for category in group.members() {
        match api_client.get_category_spend(category.as_str()).await {
            Ok(member_records) => records.extend(member_records),
            Err(e) => {
                Logger::error_with_component(
                    COMPONENT,
                    &format!("Error fetching spend for {} ({}): {}", category, group.label(), e),
                );
            }
        }
    }
    records
}
