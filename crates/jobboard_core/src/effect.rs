#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one GET for the job collection.
    FetchJobs,
}
