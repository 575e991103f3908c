// Adapters layer: concrete implementations for external systems (http, storage).

pub mod http;
pub mod storage;

pub use http::{build_client, Fetcher};
pub use storage::{LocalStorage, LogHoursSink};
