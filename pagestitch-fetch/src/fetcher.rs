use crate::error::{FetchError, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Something that can turn a URL into the text behind it.
///
/// Implementations treat every non-success outcome (transport failure, non-2xx status,
/// missing file) as an error; callers decide what to do with it.
pub trait Fetch {
    fn fetch_text(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches `http` and `https` URLs with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pagestitch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Reads `file://` URLs from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        let path = url
            .to_file_path()
            .map_err(|_| FetchError::InvalidUrl(format!("not a local file path: {}", url)))?;
        debug!("Reading {}", path.display());

        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// Picks the HTTP or file fetcher based on the URL scheme.
#[derive(Debug, Clone)]
pub struct SiteFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl SiteFetcher {
    pub fn new(http: HttpFetcher) -> Self {
        Self {
            http,
            file: FileFetcher,
        }
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        Ok(Self::new(HttpFetcher::with_timeout(timeout_secs)?))
    }
}

impl Fetch for SiteFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        match url.scheme() {
            "http" | "https" => self.http.fetch_text(url).await,
            "file" => self.file.fetch_text(url).await,
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}
