pub mod engine;
pub mod retry;
pub mod scraper;
pub mod transform;

pub use crate::domain::model::{AllDataItem, DailyItem, MenuRecords};
pub use crate::domain::ports::{HoursSink, ItemSink};
pub use crate::utils::error::Result;
