use std::sync::{mpsc, Arc};
use std::thread;

use shortener_logging::shortener_debug;

use crate::{EngineError, EngineEvent, RequestId, Shortener};

enum EngineCommand {
    Shorten { request_id: RequestId, url: String },
}

/// Runs shortening calls on a background Tokio runtime.
///
/// Each submission becomes its own task; nothing is serialized, cancelled or
/// retried. Completions arrive on the receiver returned by [`EngineHandle::spawn`]
/// in the order they settle.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(
        shortener: Arc<dyn Shortener>,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("shortener-io")
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("shortener-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let shortener = shortener.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(shortener.as_ref(), command, event_tx).await;
                    });
                }
            })
            .map_err(EngineError::Thread)?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn submit(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Shorten {
            request_id,
            url: url.into(),
        });
    }
}

async fn handle_command(
    shortener: &dyn Shortener,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Shorten { request_id, url } => {
            shortener_debug!("Shorten start request_id={} url={}", request_id, url);
            let result = shortener.shorten(&url).await;
            let _ = event_tx.send(EngineEvent::Completed { request_id, result });
        }
    }
}
