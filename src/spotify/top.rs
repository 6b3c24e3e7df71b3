use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config,
    spotify::FetchError,
    types::{Query, RawPage},
};

/// Source of raw top-items pages.
///
/// Implementations perform one request per call and never retry; the caller
/// decides what a failure means.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(
        &self,
        query: &Query,
        page_size: u32,
        offset: u32,
        credential: &str,
    ) -> Result<RawPage, FetchError>;
}

/// Fetches pages from `GET /me/top/{tracks|artists}` of the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyTopFetcher {
    client: Client,
    api_url: String,
}

impl SpotifyTopFetcher {
    /// Uses the API base URL from the configuration.
    pub fn new() -> Self {
        Self::with_api_url(config::spotify_apiurl())
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the request URL for one page of `query`.
    pub fn page_url(&self, query: &Query, page_size: u32, offset: u32) -> String {
        format!(
            "{uri}/me/top/{kind}?limit={limit}&offset={offset}&time_range={time_range}",
            uri = self.api_url,
            kind = query.result_kind.as_path(),
            limit = page_size,
            offset = offset,
            time_range = query.window.as_param()
        )
    }
}

impl Default for SpotifyTopFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for SpotifyTopFetcher {
    async fn fetch_page(
        &self,
        query: &Query,
        page_size: u32,
        offset: u32,
        credential: &str,
    ) -> Result<RawPage, FetchError> {
        let api_url = self.page_url(query, page_size, offset);

        let response = self
            .client
            .get(&api_url)
            .bearer_auth(credential)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::from_status(status, &body));
        }

        let page = serde_json::from_str::<RawPage>(&body)?;
        Ok(page)
    }
}
