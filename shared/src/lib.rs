use serde::{Deserialize, Deserializer, Serialize};
use chrono::Datelike;

pub mod categories;
pub mod filter;
pub mod pivot;
pub mod selection;
pub mod sorting;
pub mod trends;
pub mod validation;

pub use categories::{distinct_categories, Category, CategoryGroup, RowColor, UnknownCategory, TREND_GROUPS};
pub use filter::{CategorizeQuery, TransactionFilter};
pub use pivot::{build_pivot, PivotRow, PivotRowKind, PivotTable};
pub use selection::{selected_total, uncategorized_count, ClickModifiers, Selection};
pub use sorting::{sort_transactions, SortConfig, SortDirection, SortKey};
pub use trends::{build_trend_series, year_style, TrendPoint, TrendSeries, YearStyle};
pub use validation::{categorize_request, ValidationError};

/// A bank transaction as served by the budget service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transaction_id")]
    pub id: String,
    /// Calendar date (`YYYY-MM-DD`)
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Signed amount (negative for money leaving the account)
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    /// Source account label, e.g. "MONZO" or "AMEX"
    #[serde(default, deserialize_with = "null_as_default")]
    pub account: String,
    /// User or model assigned category label. `None` or blank means uncategorized.
    #[serde(default)]
    pub category: Option<String>,
}

impl Transaction {
    pub fn is_uncategorized(&self) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| category.trim().is_empty())
    }
}

/// Body of `PUT /categorize_multiple/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizeMultipleRequest {
    pub transaction_ids: Vec<String>,
    pub user_category: Category,
}

/// Plain confirmation returned by the mutating endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
}

/// One (category, month) aggregate from `GET /pivot_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRecord {
    #[serde(default = "unknown_category_label", deserialize_with = "null_as_unknown")]
    pub category: String,
    /// Month label in `YYYY-MM` form
    pub month: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

/// One monthly spend figure from `GET /category_spend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub year: i32,
    /// Three letter month name ("Jan".."Dec")
    pub month: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

/// The calendar month used as "now" by the year-to-date and trend transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl ReportingPeriod {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn current() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self::current()
    }
}

/// Formats a money amount with two decimals, never rendering "-0.00"
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_category_label))
}

fn unknown_category_label() -> String {
    Category::Unknown.as_str().to_string()
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::Transaction;

    pub fn transaction(id: &str, amount: f64, category: Option<&str>) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2024-03-01".to_string(),
            description: format!("Transaction {}", id),
            amount,
            account: "MONZO".to_string(),
            category: category.map(str::to_string),
        }
    }
}
