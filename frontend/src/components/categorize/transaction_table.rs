use yew::prelude::*;
use shared::{format_amount, ClickModifiers, Selection, SortConfig, SortKey, Transaction};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub selection: Selection,
    pub sort: Option<SortConfig>,
    pub loading: bool,
    pub on_row_click: Callback<(String, ClickModifiers)>,
    pub on_sort: Callback<SortKey>,
}

/// Reads the modifier keys held during a row click
pub fn click_modifiers(event: &MouseEvent) -> ClickModifiers {
    ClickModifiers {
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    }
}

fn header_label(key: SortKey, sort: Option<SortConfig>) -> String {
    match SortConfig::indicator(sort, key) {
        Some(arrow) => format!("{} {}", key.label(), arrow),
        None => key.label().to_string(),
    }
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    if props.loading && props.transactions.is_empty() {
        return html! { <div class="loading">{"Loading transactions..."}</div> };
    }

    if props.transactions.is_empty() {
        return html! { <div class="empty-state">{"No transactions match this filter"}</div> };
    }

    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        {for SortKey::ALL.iter().map(|key| {
                            let key = *key;
                            let on_sort = props.on_sort.clone();
                            html! {
                                <th class="sortable" onclick={Callback::from(move |_: MouseEvent| on_sort.emit(key))}>
                                    {header_label(key, props.sort)}
                                </th>
                            }
                        })}
                    </tr>
                </thead>
                <tbody>
                    {for props.transactions.iter().map(|transaction| {
                        let id = transaction.id.clone();
                        let on_row_click = props.on_row_click.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            // keep shift-click from selecting page text
                            if e.shift_key() {
                                e.prevent_default();
                            }
                            on_row_click.emit((id.clone(), click_modifiers(&e)));
                        });
                        let row_class = if props.selection.contains(&transaction.id) {
                            "transaction-row selected"
                        } else {
                            "transaction-row"
                        };

                        html! {
                            <tr class={row_class} {onclick}>
                                <td class="transaction-id">{&transaction.id}</td>
                                <td class="date">{&transaction.date}</td>
                                <td class="description">{&transaction.description}</td>
                                <td class="amount">{format_amount(transaction.amount)}</td>
                                <td class="account">{&transaction.account}</td>
                                <td class="category">{transaction.category.clone().unwrap_or_default()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
