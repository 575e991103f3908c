use crate::adapters::http::{menu_url, weekly_schedule_url, Fetcher};
use crate::config::{FailurePolicy, ScrapeConfig};
use crate::core::retry::retry;
use crate::core::transform::parse_menu;
use crate::domain::model::{
    DiningHallResponse, LocationOperationInfo, MenuRecords, OperationHoursResponse, TimeOfDay,
};
use crate::domain::ports::HoursSink;
use crate::utils::error::Result;
use reqwest::Client;

/// A menu request that spent its whole attempt budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRequest {
    pub location: String,
    pub time_of_day: TimeOfDay,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    pub records: MenuRecords,
    /// Always empty under [`FailurePolicy::Abort`].
    pub failures: Vec<FailedRequest>,
}

/// Outcome of one weekly schedule scrape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoursReport {
    /// Locations in the decoded schedule; zero when the body did not decode.
    pub locations: usize,
    /// Whether the hours sink accepted them.
    pub posted: bool,
    pub decode_failed: bool,
}

/// Walks the location x service matrix of a [`ScrapeConfig`], one request
/// at a time.
pub struct DiningHallScraper<'a, H: HoursSink> {
    fetcher: Fetcher,
    config: &'a ScrapeConfig,
    hours_sink: H,
}

impl<'a, H: HoursSink> DiningHallScraper<'a, H> {
    pub fn new(client: Client, config: &'a ScrapeConfig, hours_sink: H) -> Self {
        Self {
            fetcher: Fetcher::new(client),
            config,
            hours_sink,
        }
    }

    pub fn config(&self) -> &ScrapeConfig {
        self.config
    }

    /// Fetch and filter every configured menu for `date`.
    ///
    /// Under the default [`FailurePolicy::Abort`] the first request to
    /// exhaust its retries ends the run and everything gathered so far is
    /// dropped.
    pub async fn scrape_food(&self, date: &str) -> Result<ScrapeReport> {
        let mut report = ScrapeReport::default();

        for location in &self.config.locations {
            for service in &location.services {
                let url = menu_url(&self.config.base_url, &location.hash, &service.hash, date);
                let url_ref = url.as_str();
                let name = location.name.as_str();
                let time_of_day = service.time_of_day;

                let outcome = retry(url_ref, self.config.max_retries, move || {
                    self.visit_dining_hall(url_ref, name, time_of_day)
                })
                .await;

                match outcome {
                    Ok(records) => {
                        tracing::debug!(
                            location = name,
                            %time_of_day,
                            items = records.daily_items.len(),
                            "Visited dining hall"
                        );
                        report.records.extend(records);
                    }
                    Err(e) => match self.config.failure_policy {
                        FailurePolicy::Abort => {
                            tracing::error!("All retries failed for URL: {}", url);
                            return Err(e);
                        }
                        FailurePolicy::Continue => {
                            tracing::error!("All retries failed for URL: {}, continuing", url);
                            report.failures.push(FailedRequest {
                                location: location.name.clone(),
                                time_of_day,
                                url: url.clone(),
                                error: e.to_string(),
                            });
                        }
                    },
                }
            }
        }

        tracing::info!(
            daily_items = report.records.daily_items.len(),
            failures = report.failures.len(),
            "Scraping successful"
        );
        Ok(report)
    }

    /// Fetch the weekly schedule and hand it to the hours sink.
    ///
    /// Only exhausted retries are returned as errors. Decode and sink
    /// failures are logged and show up in the [`HoursReport`].
    pub async fn scrape_operation_hours(&self, date: &str) -> Result<HoursReport> {
        let url = weekly_schedule_url(&self.config.base_url, &self.config.site_id, date);
        let url_ref = url.as_str();

        let locations = match retry(url_ref, self.config.max_retries, move || {
            self.visit_operation_hours(url_ref)
        })
        .await
        {
            Ok(locations) => locations,
            Err(e) => {
                tracing::error!("All retries failed for URL: {}", url);
                return Err(e);
            }
        };

        let Some(locations) = locations else {
            return Ok(HoursReport {
                decode_failed: true,
                ..Default::default()
            });
        };

        let mut report = HoursReport {
            locations: locations.len(),
            ..Default::default()
        };

        match self.hours_sink.post_operation_hours(date, &locations).await {
            Ok(()) => {
                report.posted = true;
                tracing::info!(locations = report.locations, "Scraping and saving successful");
            }
            Err(e) => tracing::error!("Error for operation hours: {}", e),
        }

        Ok(report)
    }

    /// A body that fails to decode is logged and counts as an empty visit;
    /// only transport failures reach the retry loop.
    async fn visit_dining_hall(
        &self,
        url: &str,
        location: &str,
        time_of_day: TimeOfDay,
    ) -> Result<MenuRecords> {
        match self.fetcher.fetch::<DiningHallResponse>(url).await {
            Ok(response) => Ok(parse_menu(
                &response.into_menu(),
                location,
                time_of_day,
                &self.config.filter,
            )),
            Err(e) if e.is_decode() => {
                tracing::warn!("Error unmarshalling JSON for {}: {}", location, e);
                Ok(MenuRecords::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn visit_operation_hours(&self, url: &str) -> Result<Option<Vec<LocationOperationInfo>>> {
        match self.fetcher.fetch::<OperationHoursResponse>(url).await {
            Ok(response) => Ok(Some(response.locations)),
            Err(e) if e.is_decode() => {
                tracing::warn!("Error unmarshalling JSON for operation hours: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
