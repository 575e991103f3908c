use crate::domain::model::{AllDataItem, DailyItem, LocationOperationInfo};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence for scraped menu records.
#[async_trait]
pub trait ItemSink: Send + Sync {
    async fn save_daily_items(&self, date: &str, items: &[DailyItem]) -> Result<()>;
    async fn save_all_data_items(&self, items: &[AllDataItem]) -> Result<()>;
}

/// Receiver for the weekly operating hours of every location.
#[async_trait]
pub trait HoursSink: Send + Sync {
    async fn post_operation_hours(&self, date: &str, locations: &[LocationOperationInfo]) -> Result<()>;
}
