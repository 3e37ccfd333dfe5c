//! Job board core: reactive filter pipeline and view-model helpers.
mod derive;
mod effect;
mod filter;
mod job;
mod msg;
mod signal;
mod state;
mod update;
mod view_model;

pub use derive::{derive_view, DerivedJobs};
pub use effect::Effect;
pub use filter::{is_valid_request_id, FieldState, FilterInput};
pub use job::Job;
pub use msg::Msg;
pub use signal::{Signal, Subscription};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, JobRowView, LoadStatus, COLUMN_TITLES, INVALID_REQUEST_ID_MESSAGE,
    REQUEST_ID_PLACEHOLDER,
};
