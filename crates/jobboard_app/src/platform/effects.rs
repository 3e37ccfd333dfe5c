use board_logging::{board_info, board_warn};
use jobboard_core::{Effect, Job, Msg};
use jobboard_engine::{EngineError, EngineEvent, EngineHandle, FetchSettings, JobRecord};

pub struct EffectRunner {
    engine: EngineHandle,
    endpoint: String,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let endpoint = settings.endpoint.to_string();
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine, endpoint })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs => {
                    board_info!("FetchJobs endpoint={}", self.endpoint);
                    self.engine.fetch_jobs();
                }
            }
        }
    }

    /// Drains finished engine work as messages for the UI thread.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::JobsFetched { result: Ok(records) } => {
            Msg::JobsLoaded(records.into_iter().map(map_job).collect())
        }
        EngineEvent::JobsFetched { result: Err(err) } => {
            board_warn!("Jobs unavailable: {}", err);
            Msg::JobsFailed(err.to_string())
        }
    }
}

fn map_job(record: JobRecord) -> Job {
    Job {
        id: record.id,
        status: record.status,
        data_type: record.data_type,
        request_id: record.request_id,
        request_status_id: record.request_status_id,
        tier: record.tier,
        mission_id: record.mission_id,
        created_at: record.created_at,
    }
}
