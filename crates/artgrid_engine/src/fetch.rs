use std::time::Duration;

use artgrid_logging::{artgrid_debug, artgrid_warn};
use futures_util::StreamExt;
use url::Url;

use crate::decode::decode_page;
use crate::{FailureKind, FetchError, PageResult};

/// Public Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Rows the grid shows per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Decoded pages are cut down to this many records.
    pub rows_per_page: usize,
    /// Sent as `limit=` when set; otherwise the server's default page size applies.
    pub page_limit: Option<u32>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_limit: None,
        }
    }
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one 1-based page. Every call goes to the network; nothing is cached.
    async fn fetch_page(&self, page: u32) -> Result<PageResult, FetchError>;
}

/// Build `{base}/artworks?page={page}` (plus `limit` when configured).
pub fn page_url(base_url: &str, page: u32, page_limit: Option<u32>) -> Result<Url, FetchError> {
    if page < 1 {
        return Err(FetchError::new(
            FailureKind::InvalidPage,
            format!("page must be at least 1, got {page}"),
        ));
    }
    let mut url = Url::parse(&format!("{}/artworks", base_url.trim_end_matches('/')))
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &page.to_string());
        if let Some(limit) = page_limit {
            query.append_pair("limit", &limit.to_string());
        }
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        if let Some(notice) = truncation_notice(&settings) {
            artgrid_warn!("{}", notice);
        }
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

/// Describes the rows lost per page when the server may send more than fit.
///
/// Without a `page_limit` the server picks its own page size (12 for the
/// public API), and everything past `rows_per_page` is dropped by the decoder.
pub(crate) fn truncation_notice(settings: &FetchSettings) -> Option<String> {
    match settings.page_limit {
        Some(limit) if limit as usize <= settings.rows_per_page => None,
        Some(limit) => Some(format!(
            "page_limit {} exceeds {} rows per page; records past row {} of each server page will not be shown",
            limit, settings.rows_per_page, settings.rows_per_page
        )),
        None => Some(format!(
            "no page_limit configured; records past row {} of each server page will not be shown and page counts will not match the server (set page_limit: Some({}) to avoid this)",
            settings.rows_per_page, settings.rows_per_page
        )),
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(&self, page: u32) -> Result<PageResult, FetchError> {
        let url = page_url(&self.settings.base_url, page, self.settings.page_limit)?;
        artgrid_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let result = decode_page(&bytes, self.settings.rows_per_page)
            .map_err(|err| FetchError::new(FailureKind::MalformedResponse, err.to_string()))?;
        artgrid_debug!(
            "page {} decoded: {} records, total {}",
            page,
            result.records.len(),
            result.total
        );
        Ok(result)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
