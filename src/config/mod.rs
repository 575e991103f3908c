#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::filter::{ItemFilter, DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_EXCLUDED_ITEMS};
use crate::domain::model::TimeOfDay;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.dineoncampus.com/v1/location/";
pub const DEFAULT_SITE_ID: &str = "5acea5d8f3eeb60b08c5a50d";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub time_of_day: TimeOfDay,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub hash: String,
    pub services: Vec<Service>,
}

/// What to do when a single request exhausts its retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole run and discard everything collected so far.
    #[default]
    Abort,
    /// Keep going; report the failed requests next to the partial output.
    Continue,
}

/// Everything one scrape run needs. Built once, then only borrowed.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub locations: Vec<Location>,
    pub site_id: String,
    pub base_url: String,
    pub max_retries: u32,
    pub timeout_seconds: u64,
    pub failure_policy: FailurePolicy,
    pub filter: ItemFilter,
}

fn service(time_of_day: TimeOfDay, hash: &str) -> Service {
    Service {
        time_of_day,
        hash: hash.to_string(),
    }
}

fn location(name: &str, hash: &str, services: Vec<Service>) -> Location {
    Location {
        name: name.to_string(),
        hash: hash.to_string(),
        services,
    }
}

pub fn default_locations() -> Vec<Location> {
    use TimeOfDay::*;

    vec![
        location(
            "Allison",
            "5b33ae291178e909d807593d",
            vec![
                service(Breakfast, "66e1fc2de45d43074be3a0e5"),
                service(Lunch, "66e1fc2de45d43074be3a0fb"),
                service(Dinner, "66e1fc2de45d43074be3a111"),
            ],
        ),
        location(
            "Sargent",
            "5b33ae291178e909d807593e",
            vec![
                service(Breakfast, "66e97bac351d530685467360"),
                service(Lunch, "66e97bac351d53068546737e"),
                service(Dinner, "66e97bac351d53068546736f"),
            ],
        ),
        location(
            "Plex West",
            "5bae7de3f3eeb60c7d3854ba",
            vec![
                service(Breakfast, "66e99466351d5306ad498440"),
                service(Lunch, "66e99466351d5306ad498450"),
                service(Dinner, "66e99466351d5306ad49845b"),
            ],
        ),
        location(
            "Plex East",
            "5bae7ee9f3eeb60cb4f8f3af",
            vec![
                service(Lunch, "66e99466351d5306ad498467"),
                service(Dinner, "66e99466351d5306ad498461"),
            ],
        ),
        location(
            "Elder",
            "5d113c924198d409c34fdf5c",
            vec![
                service(Breakfast, "66e43426c625af07233bfef2"),
                service(Lunch, "66e43426c625af07233bff01"),
                service(Dinner, "66e85380351d5306adcbcbcd"),
            ],
        ),
    ]
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            site_id: DEFAULT_SITE_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            failure_policy: FailurePolicy::Abort,
            filter: ItemFilter::new(DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_EXCLUDED_ITEMS),
        }
    }
}

impl ScrapeConfig {
    /// Number of menu requests one `scrape_food` run issues.
    pub fn request_count(&self) -> usize {
        self.locations.iter().map(|l| l.services.len()).sum()
    }
}

impl Validate for ScrapeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("scraper.base_url", &self.base_url)?;
        validation::validate_hex_identifier("scraper.site_id", &self.site_id)?;
        validation::validate_positive_number("scraper.max_retries", self.max_retries, 1)?;

        if self.locations.is_empty() {
            return Err(ScrapeError::MissingConfigError {
                field: "locations".to_string(),
            });
        }

        for loc in &self.locations {
            validation::validate_non_empty_string("locations.name", &loc.name)?;
            validation::validate_hex_identifier(&format!("locations.{}.hash", loc.name), &loc.hash)?;

            if loc.services.is_empty() {
                return Err(ScrapeError::InvalidConfigValueError {
                    field: format!("locations.{}.services", loc.name),
                    value: "[]".to_string(),
                    reason: "Each location needs at least one service".to_string(),
                });
            }

            for svc in &loc.services {
                validation::validate_hex_identifier(
                    &format!("locations.{}.services.{}.hash", loc.name, svc.time_of_day),
                    &svc.hash,
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let config = ScrapeConfig::default();
        let names: Vec<&str> = config.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Allison", "Sargent", "Plex West", "Plex East", "Elder"]
        );
        assert_eq!(config.request_count(), 14);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_plex_east_has_no_breakfast() {
        let config = ScrapeConfig::default();
        let plex_east = config
            .locations
            .iter()
            .find(|l| l.name == "Plex East")
            .unwrap();
        let times: Vec<TimeOfDay> = plex_east.services.iter().map(|s| s.time_of_day).collect();
        assert_eq!(times, vec![TimeOfDay::Lunch, TimeOfDay::Dinner]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ScrapeConfig::default();
        config.max_retries = 0;
        assert!(config.validate().is_err());

        let mut config = ScrapeConfig::default();
        config.locations[0].services.clear();
        assert!(config.validate().is_err());

        let mut config = ScrapeConfig::default();
        config.locations.clear();
        assert!(matches!(
            config.validate(),
            Err(ScrapeError::MissingConfigError { .. })
        ));

        let mut config = ScrapeConfig::default();
        config.site_id = "site-1".to_string();
        assert!(config.validate().is_err());
    }
}
