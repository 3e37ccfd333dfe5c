use std::time::Duration;

use board_logging::board_debug;
use futures_util::StreamExt;
use url::Url;

use crate::{decode_jobs, EngineError, FailureKind, FetchError, JobRecord};

pub const DEFAULT_JOBS_ENDPOINT: &str = "https://qa.coast.noaa.gov/dav/api/v1/admin/dashboard/jobs";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: Url,
    pub connect_timeout: Duration,
    /// `None` waits for the response indefinitely.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FetchSettings {
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_JOBS_ENDPOINT).expect("default endpoint is a valid url")
}

/// Source of the job collection.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError>;
}

/// Plain GET against [`FetchSettings::endpoint`]: no parameters, no auth
/// headers, no retry.
#[derive(Debug, Clone)]
pub struct ReqwestJobSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestJobSource {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit));
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { settings, client })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl JobSource for ReqwestJobSource {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError> {
        let endpoint = self.settings.endpoint.clone();
        board_debug!("GET {}", endpoint);

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let jobs = decode_jobs(&bytes)?;
        board_debug!("Decoded {} jobs from {} bytes", jobs.len(), bytes.len());
        Ok(jobs)
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::MalformedResponse, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
