use std::time::Duration;

use futures_util::StreamExt;
use gallery_logging::{gallery_debug, gallery_trace};
use url::Url;

use crate::{ArtworkPage, FailureKind, FetchError, HTTP_FAILURE_MESSAGE};

pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogFetcher {
    settings: FetchSettings,
}

impl ReqwestCatalogFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    /// `{base}/artworks?page={page}`
    pub fn page_url(&self, page: u32) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
            .pop_if_empty()
            .push("artworks");
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
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

#[async_trait::async_trait]
impl CatalogFetcher for ReqwestCatalogFetcher {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError> {
        let url = self.page_url(page)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            gallery_debug!("page {} answered with status {}", page, status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                HTTP_FAILURE_MESSAGE,
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }
        gallery_trace!("artworks resp: {}", String::from_utf8_lossy(&body));

        let parsed: ArtworkPage = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        gallery_debug!(
            "page {} decoded: {} records, {} total",
            page,
            parsed.data.len(),
            parsed.pagination.total
        );
        Ok(parsed)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
