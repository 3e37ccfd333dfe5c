use crate::{FieldState, Job};

pub const REQUEST_ID_PLACEHOLDER: &str = "Request ID";
pub const INVALID_REQUEST_ID_MESSAGE: &str = "Valid number required";

pub const COLUMN_TITLES: [&str; 7] = [
    "Request ID",
    "Status",
    "Data Type",
    "Request Status ID",
    "Tier",
    "Mission ID",
    "Created At",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Raw field text, shown even when invalid.
    pub input_text: String,
    pub field_state: FieldState,
    pub validation_message: Option<&'static str>,
    /// Last valid, published filter.
    pub filter: String,
    pub load: LoadStatus,
    pub rows: Vec<JobRowView>,
    pub total_jobs: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub request_id: String,
    pub status: String,
    pub data_type: String,
    pub request_status_id: String,
    pub tier: String,
    pub mission_id: String,
    pub created_at: String,
}

impl JobRowView {
    pub fn from_job(job: &Job) -> Self {
        Self {
            request_id: job.request_id.clone(),
            status: job.status.clone(),
            data_type: job.data_type.clone(),
            request_status_id: job.request_status_id.to_string(),
            tier: job.tier.clone(),
            mission_id: job.mission_id.to_string(),
            created_at: job.created_at.clone(),
        }
    }

    /// Cell texts in [`COLUMN_TITLES`] order.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.request_id.as_str(),
            self.status.as_str(),
            self.data_type.as_str(),
            self.request_status_id.as_str(),
            self.tier.as_str(),
            self.mission_id.as_str(),
            self.created_at.as_str(),
        ]
    }
}
