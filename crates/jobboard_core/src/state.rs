use crate::view_model::{AppViewModel, JobRowView, LoadStatus, INVALID_REQUEST_ID_MESSAGE};
use crate::{DerivedJobs, Effect, FieldState, FilterInput, Job, Signal, Subscription};

/// State of the job board component.
///
/// The published filter and the job collection are signals; the derived view
/// follows both. The input listener exists between `init` and `destroy`.
#[derive(Debug)]
pub struct AppState {
    input: FilterInput,
    filter: Signal<String>,
    jobs: Signal<Option<Vec<Job>>>,
    derived: Option<DerivedJobs>,
    input_listener: Option<Subscription>,
    load: LoadStatus,
    fetch_requested: bool,
    destroyed: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let filter = Signal::new(String::new());
        let jobs = Signal::new(None);
        let derived = DerivedJobs::bind(&jobs, &filter);
        Self {
            input: FilterInput::new(),
            filter,
            jobs,
            derived: Some(derived),
            input_listener: None,
            load: LoadStatus::Pending,
            fetch_requested: false,
            destroyed: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let field_state = self.input.field_state();
        let rows: Vec<JobRowView> = self
            .derived
            .as_ref()
            .and_then(|derived| {
                derived.with(|jobs| jobs.map(|jobs| jobs.iter().map(JobRowView::from_job).collect()))
            })
            .unwrap_or_default();

        AppViewModel {
            input_text: self.input.text(),
            field_state,
            validation_message: (field_state == FieldState::Invalid)
                .then_some(INVALID_REQUEST_ID_MESSAGE),
            filter: self.filter.get(),
            load: self.load.clone(),
            rows,
            total_jobs: self.jobs.with(|jobs| jobs.as_ref().map_or(0, Vec::len)),
            dirty: self.dirty,
        }
    }

    /// Last valid filter text published by the input.
    pub fn filter(&self) -> String {
        self.filter.get()
    }

    /// Raw text of the field, valid or not.
    pub fn input_text(&self) -> String {
        self.input.text()
    }

    pub fn field_state(&self) -> FieldState {
        self.input.field_state()
    }

    pub fn is_listening(&self) -> bool {
        self.input_listener.is_some() && self.input.is_bound()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn init(&mut self) -> Vec<Effect> {
        if self.destroyed {
            return Vec::new();
        }
        if self.input_listener.is_none() {
            self.input_listener = Some(self.input.bind(&self.filter));
        }
        if self.fetch_requested {
            return Vec::new();
        }
        self.fetch_requested = true;
        self.dirty = true;
        vec![Effect::FetchJobs]
    }

    pub(crate) fn input_changed(&mut self, text: String) {
        self.input.set_text(text);
        self.dirty = true;
    }

    pub(crate) fn apply_jobs(&mut self, jobs: Vec<Job>) {
        if self.load == LoadStatus::Loaded {
            return;
        }
        self.load = LoadStatus::Loaded;
        self.jobs.set(Some(jobs));
        self.dirty = true;
    }

    pub(crate) fn apply_load_failure(&mut self, reason: String) {
        if self.load == LoadStatus::Loaded {
            return;
        }
        self.load = LoadStatus::Failed(reason);
        self.dirty = true;
    }

    pub(crate) fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.input_listener = None;
        self.derived = None;
        self.destroyed = true;
        self.dirty = true;
    }
}
