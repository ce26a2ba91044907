use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use gallery_logging::{gallery_debug, gallery_info};

use crate::fetch::{CatalogFetcher, FetchSettings, ReqwestCatalogFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    FetchPage { request_id: RequestId, page: u32 },
}

/// Runs page fetches on a background tokio runtime.
///
/// Every request runs to completion; events are delivered in completion
/// order, which may differ from the order the requests were issued.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestCatalogFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn CatalogFetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            gallery_info!("engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, request_id: RequestId, page: u32) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchPage { request_id, page });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn CatalogFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request_id, page } => {
            gallery_debug!("request {} fetching page {}", request_id, page);
            let result = fetcher.fetch_page(page).await;
            let _ = event_tx.send(EngineEvent::PageFetched {
                request_id,
                page,
                result,
            });
        }
    }
}
