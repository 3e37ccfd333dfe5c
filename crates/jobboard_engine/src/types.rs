use std::fmt;

use serde::Deserialize;

/// Wire shape of one job, as served by the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub status: String,
    #[serde(rename = "dataType")]
    pub data_type: String,
    #[serde(rename = "requestID")]
    pub request_id: String,
    #[serde(rename = "requestStatusID")]
    pub request_status_id: i64,
    pub tier: String,
    #[serde(rename = "missionID")]
    pub mission_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// `{ "jobs": [...] }`. Unknown top-level fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobsPayload {
    pub jobs: Vec<JobRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    JobsFetched {
        result: Result<Vec<JobRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body is not JSON or does not have the `{ jobs: [...] }` shape.
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
