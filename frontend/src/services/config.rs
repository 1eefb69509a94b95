use super::logging::LogLevel;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Build-time settings. The WASM bundle has no process environment, so
/// values are read from the environment of the `trunk build`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub min_log_level: LogLevel,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BUDGET_API_URL"), option_env!("BUDGET_LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let min_log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or_default();

        Self {
            api_base_url,
            min_log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
