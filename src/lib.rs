pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{build_client, Fetcher, LocalStorage, LogHoursSink};
pub use config::{FailurePolicy, Location, ScrapeConfig, Service};
pub use crate::core::{
    engine::{RunOptions, RunSummary, ScrapeEngine},
    scraper::{DiningHallScraper, FailedRequest, HoursReport, ScrapeReport},
};
pub use domain::filter::ItemFilter;
pub use domain::model::{AllDataItem, DailyItem, TimeOfDay};
pub use utils::error::{Result, ScrapeError};
