use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use grid_logging::{grid_debug, grid_error, grid_warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FetchError, FetchId};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    FetchPage { fetch_id: FetchId, page: u32 },
}

/// Handle to the background fetch runtime.
///
/// Commands go in over a channel; completed fetches come back as
/// [`EngineEvent`]s. A new fetch cancels the one still in flight, so at most
/// one page request is outstanding at a time. The handle owns the only event
/// receiver; other threads issue fetches through [`EngineCommands`].
pub struct EngineHandle {
    commands: EngineCommands,
    event_rx: mpsc::Receiver<EngineEvent>,
}

/// Cloneable sending side of an [`EngineHandle`].
#[derive(Clone)]
pub struct EngineCommands {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineCommands {
    pub fn fetch_page(&self, fetch_id: FetchId, page: u32) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchPage { fetch_id, page })
            .is_err()
        {
            grid_error!("Engine stopped; dropping fetch {} for page {}", fetch_id, page);
        }
    }
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestPageFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            let mut in_flight: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchPage { fetch_id, page } => {
                        if let Some(previous) = in_flight.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        in_flight = Some(token.clone());
                        runtime.spawn(run_fetch(
                            fetcher.clone(),
                            fetch_id,
                            page,
                            token,
                            event_tx.clone(),
                        ));
                    }
                }
            }
            grid_debug!("Engine command channel closed; shutting down");
        });

        Ok(Self {
            commands: EngineCommands { cmd_tx },
            event_rx,
        })
    }

    pub fn commands(&self) -> EngineCommands {
        self.commands.clone()
    }

    pub fn fetch_page(&self, fetch_id: FetchId, page: u32) {
        self.commands.fetch_page(fetch_id, page);
    }

    /// Blocks until the next event. `None` once every command sender is gone
    /// and no fetch is left to report.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_fetch(
    fetcher: Arc<dyn PageFetcher>,
    fetch_id: FetchId,
    page: u32,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let result = tokio::select! {
        _ = token.cancelled() => {
            grid_debug!("Fetch {} for page {} superseded", fetch_id, page);
            return;
        }
        result = fetcher.fetch_page(page) => result,
    };
    if let Err(err) = &result {
        grid_warn!("Fetch {} for page {} failed: {}", fetch_id, page, err);
    }
    let _ = event_tx.send(EngineEvent::PageCompleted { fetch_id, result });
}
