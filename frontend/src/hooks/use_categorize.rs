use std::rc::Rc;

use yew::prelude::*;
use shared::{
    categorize_request, format_amount, selected_total, sort_transactions, uncategorized_count,
    Category, ClickModifiers, Selection, SortConfig, SortKey, Transaction, TransactionFilter,
};
use wasm_bindgen_futures::spawn_local;
use crate::services::{ApiClient, Logger, RequestSequence};

const COMPONENT: &str = "categorize";
const STATUS_MESSAGE_MS: u32 = 3000;

/// The listed transactions together with the state derived from them.
/// Responses and clicks go through one reducer so each update sees the
/// latest selection and sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
    pub selection: Selection,
    pub sort: Option<SortConfig>,
    pub loading: bool,
}

pub enum ListAction {
    FetchStarted,
    Loaded(Vec<Transaction>),
    FetchFailed,
    Click(String, ClickModifiers),
    Sort(SortKey),
    ClearSelection,
}

impl TransactionList {
    fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::FetchStarted => self.loading = true,
            ListAction::Loaded(mut transactions) => {
                if let Some(config) = self.sort {
                    sort_transactions(&mut transactions, config);
                }
                self.selection.retain_visible(&transactions);
                self.transactions = transactions;
                self.loading = false;
            }
            ListAction::FetchFailed => self.loading = false,
            ListAction::Click(id, modifiers) => {
                self.selection.click(&id, modifiers, &self.transactions);
            }
            ListAction::Sort(key) => {
                let config = SortConfig::after_click(self.sort, key);
                sort_transactions(&mut self.transactions, config);
                self.sort = Some(config);
            }
            ListAction::ClearSelection => self.selection.clear(),
        }
    }
}

impl Reducible for TransactionList {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct CategorizeState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub selection: Selection,
    pub selected_category: Option<Category>,
    pub sort: Option<SortConfig>,
    pub submitting: bool,
    pub status_message: Option<String>,
}

impl CategorizeState {
    pub fn uncategorized_count(&self) -> usize {
        uncategorized_count(&self.transactions)
    }

    pub fn selected_total(&self) -> String {
        format_amount(selected_total(&self.transactions, &self.selection))
    }
}

pub struct UseCategorizeResult {
    pub state: CategorizeState,
    pub actions: UseCategorizeActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCategorizeActions {
    pub refresh: Callback<()>,
    pub on_row_click: Callback<(String, ClickModifiers)>,
    pub on_sort: Callback<SortKey>,
    pub on_category_change: Callback<Option<Category>>,
    pub categorize: Callback<()>,
    pub auto_categorize: Callback<()>,
}

#[hook]
pub fn use_categorize(api_client: &ApiClient, filter: &TransactionFilter) -> UseCategorizeResult {
    let list = use_reducer(|| TransactionList {
        loading: true,
        ..TransactionList::default()
    });
    let selected_category = use_state(|| None::<Category>);
    let submitting = use_state(|| false);
    let status_message = use_state(|| None::<String>);
    let sequence = use_state(RequestSequence::new);

    // Fetch the list for the current filter; responses to superseded requests are dropped
    let refresh = {
        let api_client = api_client.clone();
        let filter = filter.clone();
        let dispatcher = list.dispatcher();
        let sequence = (*sequence).clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let filter = filter.clone();
            let dispatcher = dispatcher.clone();
            let sequence = sequence.clone();
            let ticket = sequence.issue();

            spawn_local(async move {
                dispatcher.dispatch(ListAction::FetchStarted);

                let result = api_client.get_transactions(&filter).await;
                if !sequence.is_current(ticket) {
                    Logger::debug_with_component(COMPONENT, "Dropping response of a superseded transaction request");
                    return;
                }

                match result {
                    Ok(data) => dispatcher.dispatch(ListAction::Loaded(data)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching transactions: {}", e));
                        dispatcher.dispatch(ListAction::FetchFailed);
                    }
                }
            });
        })
    };

    // Reload whenever the filter from the URL changes
    {
        let refresh = refresh.clone();
        use_effect_with(filter.clone(), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_row_click = {
        let dispatcher = list.dispatcher();
        Callback::from(move |(id, modifiers): (String, ClickModifiers)| {
            dispatcher.dispatch(ListAction::Click(id, modifiers));
        })
    };

    let on_sort = {
        let dispatcher = list.dispatcher();
        Callback::from(move |key: SortKey| dispatcher.dispatch(ListAction::Sort(key)))
    };

    let on_category_change = {
        let selected_category = selected_category.clone();
        Callback::from(move |category: Option<Category>| selected_category.set(category))
    };

    let categorize = {
        let api_client = api_client.clone();
        let list = list.clone();
        let selected_category = selected_category.clone();
        let submitting = submitting.clone();
        let status_message = status_message.clone();
        let refresh = refresh.clone();

        Callback::from(move |_: ()| {
            let request = match categorize_request(*selected_category, &list.selection) {
                Ok(request) => request,
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &e.to_string());
                    gloo::dialogs::alert(&e.to_string());
                    return;
                }
            };

            let api_client = api_client.clone();
            let dispatcher = list.dispatcher();
            let submitting = submitting.clone();
            let status_message = status_message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.categorize_transactions(&request).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Categorized {} transactions as {}", request.transaction_ids.len(), request.user_category),
                        );
                        dispatcher.dispatch(ListAction::ClearSelection);
                        show_status(&status_message, response.message);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error updating categories: {}", e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let auto_categorize = {
        let api_client = api_client.clone();
        let submitting = submitting.clone();
        let status_message = status_message.clone();
        let refresh = refresh.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let status_message = status_message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.auto_categorize().await {
                    Ok(response) => {
                        show_status(&status_message, response.message);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error auto-categorizing: {}", e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let state = CategorizeState {
        transactions: list.transactions.clone(),
        loading: list.loading,
        selection: list.selection.clone(),
        selected_category: *selected_category,
        sort: list.sort,
        submitting: *submitting,
        status_message: (*status_message).clone(),
    };

    let actions = UseCategorizeActions {
        refresh,
        on_row_click,
        on_sort,
        on_category_change,
        categorize,
        auto_categorize,
    };

    UseCategorizeResult { state, actions }
}

/// Shows a confirmation line that clears itself after a few seconds
fn show_status(status_message: &UseStateHandle<Option<String>>, message: String) {
    status_message.set(Some(message));

    let status_message = status_message.clone();
    spawn_local(async move {
        gloo::timers::future::TimeoutFuture::new(STATUS_MESSAGE_MS).await;
        status_message.set(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(id: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2024-01-15".to_string(),
            description: format!("Payment {}", id),
            amount,
            account: "MONZO".to_string(),
            category: None,
        }
    }

    fn rows() -> Vec<Transaction> {
        vec![transaction("a", 30.0), transaction("b", 10.0), transaction("c", 20.0)]
    }

    fn run(list: TransactionList, actions: Vec<ListAction>) -> TransactionList {
        let mut list = Rc::new(list);
        for action in actions {
            list = list.reduce(action);
        }
        (*list).clone()
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|transaction| transaction.id.as_str()).collect()
    }

    #[test]
    fn test_cleared_selection_stays_cleared_after_reload() {
        let list = run(
            TransactionList::default(),
            vec![
                ListAction::Loaded(rows()),
                ListAction::Click("a".to_string(), ClickModifiers::plain()),
                ListAction::Click("b".to_string(), ClickModifiers::toggle()),
                ListAction::ClearSelection,
                ListAction::FetchStarted,
                ListAction::Loaded(rows()),
            ],
        );

        assert!(list.selection.is_empty());
        assert!(!list.loading);
    }

    #[test]
    fn test_clicks_during_fetch_are_kept() {
        let list = run(
            TransactionList::default(),
            vec![
                ListAction::Loaded(rows()),
                ListAction::FetchStarted,
                ListAction::Click("c".to_string(), ClickModifiers::plain()),
                ListAction::Loaded(rows()),
            ],
        );

        assert_eq!(list.selection.ids(), ["c"]);
    }

    #[test]
    fn test_reload_prunes_rows_that_left_the_list() {
        let list = run(
            TransactionList::default(),
            vec![
                ListAction::Loaded(rows()),
                ListAction::Click("a".to_string(), ClickModifiers::plain()),
                ListAction::Click("b".to_string(), ClickModifiers::toggle()),
                ListAction::Loaded(vec![transaction("b", 10.0), transaction("c", 20.0)]),
            ],
        );

        assert_eq!(list.selection.ids(), ["b"]);
    }

    #[test]
    fn test_reload_reapplies_active_sort() {
        let list = run(
            TransactionList::default(),
            vec![
                ListAction::Loaded(rows()),
                ListAction::Sort(SortKey::Amount),
                ListAction::Loaded(vec![transaction("d", 5.0), transaction("a", 30.0), transaction("b", 10.0)]),
            ],
        );

        assert_eq!(ids(&list.transactions), ["d", "b", "a"]);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let list = run(
            TransactionList::default(),
            vec![
                ListAction::Loaded(rows()),
                ListAction::Sort(SortKey::Amount),
                ListAction::Sort(SortKey::Amount),
            ],
        );

        assert_eq!(ids(&list.transactions), ["a", "c", "b"]);
    }

    #[test]
    fn test_failed_fetch_keeps_rows() {
        let list = run(
            TransactionList::default(),
            vec![ListAction::Loaded(rows()), ListAction::FetchStarted, ListAction::FetchFailed],
        );

        assert_eq!(list.transactions.len(), 3);
        assert!(!list.loading);
    }
}
