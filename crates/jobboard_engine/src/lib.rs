//! Job board engine: fetches the job collection off the UI thread.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::decode_jobs;
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, JobSource, ReqwestJobSource, DEFAULT_JOBS_ENDPOINT};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, JobRecord, JobsPayload};
