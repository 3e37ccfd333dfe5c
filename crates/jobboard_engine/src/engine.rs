use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use board_logging::{board_error, board_info};

use crate::fetch::{FetchSettings, JobSource, ReqwestJobSource};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    FetchJobs,
}

/// Runs job fetches on a background thread with its own tokio runtime.
///
/// The engine thread exits once the handle is dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let source = ReqwestJobSource::new(settings)?;
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn JobSource>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = Arc::clone(&source);
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_jobs(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchJobs);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn JobSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchJobs => {
            let result = source.fetch_jobs().await;
            match &result {
                Ok(jobs) => board_info!("Job fetch completed with {} jobs", jobs.len()),
                Err(err) => board_error!("Job fetch failed: {}", err),
            }
            let _ = event_tx.send(EngineEvent::JobsFetched { result });
        }
    }
}
