use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use artgrid_logging::{artgrid_debug, artgrid_info};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Fetch { request_id: RequestId, page: u32 },
}

/// Runs page fetches on a background tokio runtime.
///
/// A new fetch cancels whichever fetch is still in flight; the cancelled one
/// completes with [`FailureKind::Cancelled`]. Completions are delivered in the
/// order they finish.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("artgrid-engine".to_string())
            .spawn(move || run_commands(runtime, fetcher, cmd_rx, event_tx))?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, request_id: RequestId, page: u32) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { request_id, page });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn run_commands(
    runtime: tokio::runtime::Runtime,
    fetcher: Arc<dyn PageFetcher>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut in_flight: Option<(RequestId, CancellationToken)> = None;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Fetch { request_id, page } => {
                if let Some((previous, token)) = in_flight.take() {
                    artgrid_debug!("request {} superseded by {}", previous, request_id);
                    token.cancel();
                }
                let token = CancellationToken::new();
                in_flight = Some((request_id, token.clone()));

                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => Err(FetchError::new(
                            FailureKind::Cancelled,
                            format!("request {request_id} superseded"),
                        )),
                        result = fetcher.fetch_page(page) => result,
                    };
                    let _ = event_tx.send(EngineEvent::PageFetched {
                        request_id,
                        page,
                        result,
                    });
                });
            }
        }
    }

    if let Some((_, token)) = in_flight {
        token.cancel();
    }
    artgrid_info!("engine command channel closed; shutting down");
    runtime.shutdown_background();
}
