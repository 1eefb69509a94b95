use serde::{Deserialize, Serialize};

/// Raw query string of the `/categorize` route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizeQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncategorized: Option<String>,
}

/// Which transactions the categorization screen lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    pub uncategorized: bool,
    /// `YYYY-MM` month label
    pub month: Option<String>,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            uncategorized: true,
            month: None,
        }
    }
}

impl TransactionFilter {
    /// All transactions of one month, categorized or not
    pub fn for_month(month: impl Into<String>) -> Self {
        Self {
            uncategorized: false,
            month: Some(month.into()),
        }
    }

    /// `uncategorized` defaults to true when absent; any value other than
    /// a case-insensitive "true" turns it off. A blank month means no month.
    pub fn from_query(query: &CategorizeQuery) -> Self {
        let uncategorized = query
            .uncategorized
            .as_deref()
            .map_or(true, |value| value.trim().eq_ignore_ascii_case("true"));
        let month = query
            .month
            .as_deref()
            .map(str::trim)
            .filter(|month| !month.is_empty())
            .map(str::to_string);

        Self { uncategorized, month }
    }

    pub fn to_query(&self) -> CategorizeQuery {
        CategorizeQuery {
            month: self.month.clone(),
            uncategorized: Some(self.uncategorized.to_string()),
        }
    }

    /// Query parameters for `GET /transactions`
    pub fn request_params(&self) -> [(&'static str, String); 2] {
        [
            ("uncategorized", self.uncategorized.to_string()),
            ("month", self.month.clone().unwrap_or_default()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: Option<&str>, uncategorized: Option<&str>) -> CategorizeQuery {
        CategorizeQuery {
            month: month.map(str::to_string),
            uncategorized: uncategorized.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_to_uncategorized_only() {
        assert_eq!(TransactionFilter::from_query(&CategorizeQuery::default()), TransactionFilter::default());
        assert!(TransactionFilter::default().uncategorized);
    }

    #[test]
    fn test_uncategorized_flag_parsing() {
        assert!(TransactionFilter::from_query(&query(None, Some("TRUE"))).uncategorized);
        assert!(TransactionFilter::from_query(&query(None, Some("true"))).uncategorized);
        assert!(!TransactionFilter::from_query(&query(None, Some("false"))).uncategorized);
        assert!(!TransactionFilter::from_query(&query(None, Some("yes"))).uncategorized);
    }

    #[test]
    fn test_blank_month_is_none() {
        assert_eq!(TransactionFilter::from_query(&query(Some(""), None)).month, None);
        assert_eq!(
            TransactionFilter::from_query(&query(Some("2024-05"), Some("false"))),
            TransactionFilter::for_month("2024-05")
        );
    }

    #[test]
    fn test_query_round_trip() {
        let filter = TransactionFilter::for_month("2023-11");
        assert_eq!(TransactionFilter::from_query(&filter.to_query()), filter);
    }

    #[test]
    fn test_request_params() {
        assert_eq!(
            TransactionFilter::default().request_params(),
            [("uncategorized", "true".to_string()), ("month", String::new())]
        );
        assert_eq!(
            TransactionFilter::for_month("2024-01").request_params()[1],
            ("month", "2024-01".to_string())
        );
    }
}
