use std::sync::{mpsc, Arc};
use std::thread;

use shortener_core::{Effect, Msg, ShortenOutcome};
use shortener_engine::{EngineError, EngineEvent, EngineHandle, Shortener};
use shortener_logging::{shortener_error, shortener_info};

/// Executes core effects on the engine and feeds completions back as messages.
///
/// This is the submission boundary: failures are logged here with their full
/// detail and reach the form only as [`ShortenOutcome::Failed`].
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::spawn(shortener)?;
        thread::Builder::new()
            .name("shortener-events".to_string())
            .spawn(move || forward_events(events, msg_tx))
            .map_err(EngineError::Thread)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Shorten { request_id, url } => {
                    shortener_info!(
                        "Shorten request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.submit(request_id, url);
                }
            }
        }
    }
}

fn forward_events(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    for event in events {
        let msg = match event {
            EngineEvent::Completed { request_id, result } => {
                let outcome = match result {
                    Ok(short_url) => {
                        shortener_info!("Shortened request_id={} -> {}", request_id, short_url);
                        ShortenOutcome::Shortened(short_url)
                    }
                    Err(err) => {
                        shortener_error!(
                            "Error shortening URL: request_id={} {}",
                            request_id,
                            err
                        );
                        ShortenOutcome::Failed
                    }
                };
                Msg::ShortenCompleted {
                    request_id,
                    outcome,
                }
            }
        };
        if msg_tx.send(msg).is_err() {
            break;
        }
    }
}
