use crate::domain::model::{AllDataItem, DailyItem, LocationOperationInfo};
use crate::domain::ports::{HoursSink, ItemSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const ALL_ITEMS_FILE: &str = "all_items.csv";

/// Writes scrape output under a base directory.
///
/// - `daily_items_<date>.csv` is rewritten on every run for that date.
/// - `all_items.csv` is the running catalog; names already present are not
///   appended again.
/// - `operation_hours_<date>.json` holds the weekly schedule.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn daily_items_path(&self, date: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("daily_items_{}.csv", date))
    }

    pub fn all_items_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(ALL_ITEMS_FILE)
    }

    pub fn operation_hours_path(&self, date: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("operation_hours_{}.json", date))
    }

    fn ensure_base_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn known_catalog_names(&self) -> Result<HashSet<String>> {
        let path = self.all_items_path();
        if !path.exists() {
            return Ok(HashSet::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut names = HashSet::new();
        for record in reader.deserialize::<AllDataItem>() {
            names.insert(record?.name);
        }
        Ok(names)
    }
}

#[async_trait]
impl ItemSink for LocalStorage {
    async fn save_daily_items(&self, date: &str, items: &[DailyItem]) -> Result<()> {
        self.ensure_base_dir()?;
        let path = self.daily_items_path(date);

        let mut writer = csv::Writer::from_path(&path)?;
        for item in items {
            writer.serialize(item)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} daily items to {}", items.len(), path.display());
        Ok(())
    }

    async fn save_all_data_items(&self, items: &[AllDataItem]) -> Result<()> {
        self.ensure_base_dir()?;
        let path = self.all_items_path();
        let mut known = self.known_catalog_names()?;
        let write_header = !path.exists();

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        let mut added = 0usize;
        for item in items {
            if known.insert(item.name.clone()) {
                writer.serialize(item)?;
                added += 1;
            }
        }
        writer.flush()?;

        tracing::debug!("Catalog: {} new of {} items", added, items.len());
        Ok(())
    }
}

#[async_trait]
impl HoursSink for LocalStorage {
    async fn post_operation_hours(&self, date: &str, locations: &[LocationOperationInfo]) -> Result<()> {
        self.ensure_base_dir()?;
        let path = self.operation_hours_path(date);
        let json = serde_json::to_string_pretty(locations)?;
        fs::write(&path, json)?;

        tracing::debug!(
            "Wrote operation hours for {} locations to {}",
            locations.len(),
            path.display()
        );
        Ok(())
    }
}

/// Logs each location's schedule and stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHoursSink;

#[async_trait]
impl HoursSink for LogHoursSink {
    async fn post_operation_hours(&self, _date: &str, locations: &[LocationOperationInfo]) -> Result<()> {
        tracing::info!("Posting operation hours for {} locations", locations.len());
        for location in locations {
            tracing::info!(
                location = %location.name,
                days = location.week.len(),
                "Operation hours"
            );
        }
        Ok(())
    }
}
