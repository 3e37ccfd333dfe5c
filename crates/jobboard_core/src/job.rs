/// One record of the fetched job collection. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Job {
    pub id: String,
    pub status: String,
    pub data_type: String,
    /// The only field the filter matches against.
    pub request_id: String,
    pub request_status_id: i64,
    pub tier: String,
    pub mission_id: i64,
    /// Displayed verbatim, never parsed.
    pub created_at: String,
}
