use std::sync::{mpsc, Arc};
use std::thread;

use folio_logging::{folio_debug, folio_info};

use crate::probe::{Probe, ProbeSettings, ReqwestProbe};
use crate::{Generation, LoadFallback, LoadOutcome, ViewportEvent, LOAD_FALLBACK};

enum EmbedCommand {
    Load { generation: Generation, url: String },
}

/// Handle to the embedded-viewport worker.
///
/// Load requests are queued over a channel and probed on a tokio runtime
/// thread; exactly one `LoadFinished` event comes back per request, tagged
/// with the generation it was issued for.
pub struct EmbedHandle {
    cmd_tx: mpsc::Sender<EmbedCommand>,
    event_rx: mpsc::Receiver<ViewportEvent>,
}

impl EmbedHandle {
    pub fn new(settings: ProbeSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let probe = Arc::new(ReqwestProbe::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let probe = probe.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(probe.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn load(&self, generation: Generation, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EmbedCommand::Load {
            generation,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ViewportEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    probe: &dyn Probe,
    command: EmbedCommand,
    event_tx: mpsc::Sender<ViewportEvent>,
) {
    match command {
        EmbedCommand::Load { generation, url } => {
            let outcome = match probe.probe(&url).await {
                Ok(info) => {
                    folio_info!(
                        "load observed generation={} url={} bytes={}",
                        generation,
                        url,
                        info.byte_len
                    );
                    LoadOutcome::Observed(info)
                }
                Err(reason) => {
                    folio_debug!(
                        "load unobservable generation={} url={} reason={}",
                        generation,
                        url,
                        reason
                    );
                    match LOAD_FALLBACK {
                        // Fail open: report completion right away rather
                        // than leaving the indicator up with no way out.
                        LoadFallback::AssumeLoadedOnUnobservable => {
                            LoadOutcome::Unobservable { reason }
                        }
                    }
                }
            };
            let _ = event_tx.send(ViewportEvent::LoadFinished { generation, outcome });
        }
    }
}
