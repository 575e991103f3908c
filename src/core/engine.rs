use crate::core::scraper::{DiningHallScraper, FailedRequest, HoursReport};
use crate::domain::ports::{HoursSink, ItemSink};
use crate::utils::error::Result;
use crate::utils::validation::validate_date;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub skip_menu: bool,
    pub skip_hours: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub date: String,
    pub daily_items: usize,
    pub all_data_items: usize,
    pub failures: Vec<FailedRequest>,
    /// `None` when the hours scrape was skipped.
    pub hours: Option<HoursReport>,
}

/// Menu scrape, persistence, then the operating hours scrape.
pub struct ScrapeEngine<'a, S: ItemSink, H: HoursSink> {
    scraper: DiningHallScraper<'a, H>,
    sink: S,
}

impl<'a, S: ItemSink, H: HoursSink> ScrapeEngine<'a, S, H> {
    pub fn new(scraper: DiningHallScraper<'a, H>, sink: S) -> Self {
        Self { scraper, sink }
    }

    pub async fn run(&self, date: &str, options: RunOptions) -> Result<RunSummary> {
        validate_date("date", date)?;
        tracing::info!("Starting scrape for {}", date);

        let mut summary = RunSummary {
            date: date.to_string(),
            ..Default::default()
        };

        if !options.skip_menu {
            tracing::info!(
                "Scraping {} menus across {} locations",
                self.scraper.config().request_count(),
                self.scraper.config().locations.len()
            );
            let report = self.scraper.scrape_food(date).await?;

            self.sink
                .save_daily_items(date, &report.records.daily_items)
                .await?;
            self.sink
                .save_all_data_items(&report.records.all_data_items)
                .await?;

            summary.daily_items = report.records.daily_items.len();
            summary.all_data_items = report.records.all_data_items.len();
            summary.failures = report.failures;
        }

        if !options.skip_hours {
            tracing::info!("Scraping operation hours");
            summary.hours = Some(self.scraper.scrape_operation_hours(date).await?);
        }

        Ok(summary)
    }
}
