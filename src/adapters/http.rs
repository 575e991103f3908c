use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("dining-scrape/", env!("CARGO_PKG_VERSION"));

/// Shared transport for every request of a run.
pub fn build_client(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Single GET + JSON decode over an injected client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Non-2xx statuses surface as `Transport`; bodies that do not match `T`
    /// surface as `Decode`.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| ScrapeError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

pub fn menu_url(base_url: &str, location_hash: &str, service_hash: &str, date: &str) -> String {
    format!(
        "{}/{}/periods/{}?platform=0&date={}",
        base_url.trim_end_matches('/'),
        location_hash,
        service_hash,
        date
    )
}

pub fn weekly_schedule_url(base_url: &str, site_id: &str, date: &str) -> String {
    format!(
        "{}/weekly_schedule/?site_id={}&date={}",
        base_url.trim_end_matches('/'),
        site_id,
        date
    )
}
