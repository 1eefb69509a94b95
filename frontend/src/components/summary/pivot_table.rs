use yew::prelude::*;
use yew_router::prelude::*;
use shared::{CategorizeQuery, PivotRow, PivotTable as Pivot, TransactionFilter};

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct PivotTableProps {
    pub pivot: Pivot,
}

/// Columns before the per-month ones: all-time, year-to-date and label
const LEADING_COLUMNS: usize = 3;

fn render_row(row: &PivotRow, column_count: usize) -> Html {
    if row.is_separator() {
        return html! {
            <tr class="separator-row">
                <td colspan={column_count.to_string()}></td>
            </tr>
        };
    }

    html! {
        <tr class={row.css_class()}>
            <td class="amount all-time">{row.formatted_all_time_total()}</td>
            <td class="amount year-total">{row.formatted_year_total()}</td>
            <td class="category-label">{row.label()}</td>
            {for row.formatted_amounts().into_iter().map(|amount| html! {
                <td class="amount">{amount}</td>
            })}
        </tr>
    }
}

#[function_component(PivotTable)]
pub fn pivot_table(props: &PivotTableProps) -> Html {
    let pivot = &props.pivot;
    let column_count = LEADING_COLUMNS + pivot.months.len();

    html! {
        <div class="table-container">
            <table class="pivot-table">
                <thead>
                    <tr>
                        <th>{"All-Time"}</th>
                        <th>{format!("{} Total", pivot.year)}</th>
                        <th>{"Category"}</th>
                        {for pivot.months.iter().map(|month| {
                            let query = TransactionFilter::for_month(month.clone()).to_query();
                            html! {
                                <th class="month-header">
                                    <Link<Route, CategorizeQuery> to={Route::Categorize} query={Some(query)}>
                                        {month}
                                    </Link<Route, CategorizeQuery>>
                                </th>
                            }
                        })}
                    </tr>
                </thead>
                <tbody>
                    {for pivot.rows.iter().map(|row| render_row(row, column_count))}
                </tbody>
            </table>
        </div>
    }
}
