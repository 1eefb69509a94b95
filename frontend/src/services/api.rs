use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    CategorizeMultipleRequest, CategorySpend, MessageResponse, PivotRecord, TotalResponse,
    Transaction, TransactionFilter,
};
use thiserror::Error;

use super::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// API client for the budget service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client pointed at the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Transactions matching the categorization screen's filter
    pub async fn get_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, ApiError> {
        let response = Request::get(&self.url("/transactions"))
            .query(filter.request_params())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Every transaction; only used to discover which categories exist
    pub async fn get_all_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let response = Request::get(&self.url("/transactions/"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Assign one category to many transactions
    pub async fn categorize_transactions(
        &self,
        request: &CategorizeMultipleRequest,
    ) -> Result<MessageResponse, ApiError> {
        let response = Request::put(&self.url("/categorize_multiple/"))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Ask the service to run its keyword rules over uncategorized transactions
    pub async fn auto_categorize(&self) -> Result<MessageResponse, ApiError> {
        let response = Request::put(&self.url("/auto_categorize/"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Overall balance available to spend
    pub async fn get_total(&self) -> Result<f64, ApiError> {
        let response = Request::get(&self.url("/total"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<TotalResponse>(response).await.map(|data| data.total)
    }

    /// Flat (category, month, amount) aggregates for the summary pivot
    pub async fn get_pivot_data(&self) -> Result<Vec<PivotRecord>, ApiError> {
        let response = Request::get(&self.url("/pivot_data"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Monthly spend of one category across all years
    pub async fn get_category_spend(&self, category: &str) -> Result<Vec<CategorySpend>, ApiError> {
        let response = Request::get(&self.url("/category_spend"))
            .query([("category", category)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
