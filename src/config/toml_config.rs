use crate::config::{default_locations, FailurePolicy, Location, ScrapeConfig};
use crate::domain::filter::{ItemFilter, DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_EXCLUDED_ITEMS};
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File form of the scraper settings. Every section is optional and falls
/// back to the built-in registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scraper: Option<ScraperSection>,
    pub locations: Option<Vec<Location>>,
    pub filters: Option<FilterSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperSection {
    pub base_url: Option<String>,
    pub site_id: Option<String>,
    pub max_retries: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub on_request_failure: Option<FailurePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSection {
    pub excluded_categories: Option<Vec<String>>,
    pub excluded_items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DINING_SITE_ID})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScrapeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    /// Merge over the built-in defaults.
    pub fn into_scrape_config(self) -> ScrapeConfig {
        let defaults = ScrapeConfig::default();
        let scraper = self.scraper.unwrap_or_default();
        let filters = self.filters.unwrap_or_default();

        let categories = filters.excluded_categories.unwrap_or_else(|| {
            DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        let items = filters.excluded_items.unwrap_or_else(|| {
            DEFAULT_EXCLUDED_ITEMS.iter().map(|s| s.to_string()).collect()
        });

        ScrapeConfig {
            locations: self.locations.unwrap_or_else(default_locations),
            site_id: scraper.site_id.unwrap_or(defaults.site_id),
            base_url: scraper.base_url.unwrap_or(defaults.base_url),
            max_retries: scraper.max_retries.unwrap_or(defaults.max_retries),
            timeout_seconds: scraper.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            failure_policy: scraper.on_request_failure.unwrap_or(defaults.failure_policy),
            filter: ItemFilter::new(categories, items),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        self.clone().into_scrape_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeOfDay;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap().into_scrape_config();
        assert_eq!(config.locations.len(), 5);
        assert_eq!(config.base_url, crate::config::DEFAULT_BASE_URL);
        assert!(config.filter.is_excluded_category("condiments"));
    }

    #[test]
    fn test_overrides() {
        let content = r#"
[scraper]
base_url = "http://localhost:9000/v1/location"
site_id = "abc123"
max_retries = 5
on_request_failure = "continue"

[[locations]]
name = "Test Hall"
hash = "aa11"

[[locations.services]]
time_of_day = "Lunch"
hash = "bb22"

[filters]
excluded_categories = ["Toppings"]
excluded_items = []

[output]
path = "/tmp/dining"
"#;
        let toml_config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(toml_config.output_path(), Some("/tmp/dining"));
        assert!(toml_config.validate().is_ok());

        let config = toml_config.into_scrape_config();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.locations.len(), 1);
        assert_eq!(config.locations[0].services[0].time_of_day, TimeOfDay::Lunch);
        assert!(config.filter.is_excluded_category("toppings"));
        assert!(!config.filter.is_excluded_category("condiments"));
        assert!(!config.filter.is_excluded_item("ketchup"));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("DINING_SCRAPE_TEST_SITE", "feed42");
        let content = r#"
[scraper]
site_id = "${DINING_SCRAPE_TEST_SITE}"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap().into_scrape_config();
        assert_eq!(config.site_id, "feed42");
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[scraper\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ScrapeError::ConfigError { .. }));
    }
}
