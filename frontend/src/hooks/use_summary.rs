use yew::prelude::*;
use shared::{build_pivot, format_amount, PivotTable, ReportingPeriod};
use wasm_bindgen_futures::spawn_local;
use crate::services::{ApiClient, Logger};

const COMPONENT: &str = "summary";

#[derive(Clone, PartialEq)]
pub struct SummaryState {
    pub total: Option<f64>,
    pub pivot: Option<PivotTable>,
    pub loading_total: bool,
    pub loading_pivot: bool,
}

impl SummaryState {
    /// "Available to spend" line, empty until the total has arrived
    pub fn available_to_spend(&self) -> Option<String> {
        self.total.map(|total| format!("£{}", format_amount(total)))
    }
}

pub struct UseSummaryResult {
    pub state: SummaryState,
    pub actions: UseSummaryActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSummaryActions {
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_summary(api_client: &ApiClient) -> UseSummaryResult {
    let total = use_state(|| None::<f64>);
    let pivot = use_state(|| None::<PivotTable>);
    let loading_total = use_state(|| true);
    let loading_pivot = use_state(|| true);

    // The total and the pivot load independently; either may fail on its own
    let refresh = {
        let api_client = api_client.clone();
        let total = total.clone();
        let pivot = pivot.clone();
        let loading_total = loading_total.clone();
        let loading_pivot = loading_pivot.clone();

        Callback::from(move |_: ()| {
            {
                let api_client = api_client.clone();
                let total = total.clone();
                let loading_total = loading_total.clone();
                spawn_local(async move {
                    loading_total.set(true);
                    match api_client.get_total().await {
                        Ok(value) => total.set(Some(value)),
                        Err(e) => {
                            Logger::error_with_component(COMPONENT, &format!("Error fetching total: {}", e));
                        }
                    }
                    loading_total.set(false);
                });
            }

            let api_client = api_client.clone();
            let pivot = pivot.clone();
            let loading_pivot = loading_pivot.clone();
            spawn_local(async move {
                loading_pivot.set(true);
                match api_client.get_pivot_data().await {
                    Ok(records) => {
                        let year = ReportingPeriod::current().year;
                        let table = build_pivot(&records, year);
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Pivot built from {} records over {} months", records.len(), table.months.len()),
                        );
                        pivot.set(Some(table));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching pivot data: {}", e));
                    }
                }
                loading_pivot.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let state = SummaryState {
        total: *total,
        pivot: (*pivot).clone(),
        loading_total: *loading_total,
        loading_pivot: *loading_pivot,
    };

    UseSummaryResult {
        state,
        actions: UseSummaryActions { refresh },
    }
}
