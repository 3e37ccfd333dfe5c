use crate::Job;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Component mounted: attach the input listener and request the jobs.
    Init,
    /// Full text of the request-id field after a keystroke.
    InputChanged(String),
    /// The job collection arrived.
    JobsLoaded(Vec<Job>),
    /// The fetch failed or the payload was malformed.
    JobsFailed(String),
    /// Component torn down; listeners are released.
    Destroyed,
}
