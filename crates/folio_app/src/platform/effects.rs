use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use folio_core::{share_intent_url, Effect, Msg, SHARE_CAPTION};
use folio_logging::{folio_info, folio_warn};
use folio_viewport::{EmbedHandle, ProbeSettings, ViewportEvent};
use rand::Rng;

use super::config::AppConfig;
use super::persistence;

/// How long the Copy button shows its checkmark.
const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// Executes `Effect`s off the UI thread and feeds results back as `Msg`s.
pub struct EffectRunner {
    work_tx: mpsc::Sender<Effect>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: AppConfig) -> Self {
        let (work_tx, work_rx) = mpsc::channel();
        thread::spawn(move || worker_loop(work_rx, msg_tx, config));
        Self { work_tx }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let _ = self.work_tx.send(effect);
        }
    }
}

/// Single worker owning the viewport handle: services queued effects and
/// forwards viewport completion events between them.
fn worker_loop(work_rx: mpsc::Receiver<Effect>, msg_tx: mpsc::Sender<Msg>, config: AppConfig) {
    let embed = EmbedHandle::new(ProbeSettings::default());
    loop {
        match work_rx.recv_timeout(Duration::from_millis(20)) {
            Ok(effect) => run_effect(effect, &embed, &msg_tx, &config),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        while let Some(event) = embed.try_recv() {
            let ViewportEvent::LoadFinished { generation, outcome } = event;
            let _ = msg_tx.send(Msg::ViewportLoaded {
                generation,
                title: outcome.title().map(ToOwned::to_owned),
            });
        }
    }
}

fn run_effect(
    effect: Effect,
    embed: &EmbedHandle,
    msg_tx: &mpsc::Sender<Msg>,
    config: &AppConfig,
) {
    match effect {
        Effect::ShowUrl { generation, url } => {
            folio_info!("ShowUrl generation={} url={}", generation, url);
            embed.load(generation, url);
        }
        Effect::PersistIndex { index } => {
            persistence::save_current_index(&config.state_dir, index);
        }
        Effect::PickRandomIndex { len } => {
            if len > 0 {
                let index = rand::rng().random_range(0..len);
                let _ = msg_tx.send(Msg::RandomIndexPicked(index));
            }
        }
        Effect::CopyToClipboard { text } => {
            let ok = copy_to_clipboard(&text);
            if !ok {
                folio_warn!("Clipboard write failed for {}", text);
            }
            let _ = msg_tx.send(Msg::CopyFinished { ok });
        }
        Effect::StartCopyTimer { epoch } => {
            let msg_tx = msg_tx.clone();
            thread::spawn(move || {
                thread::sleep(COPY_FEEDBACK_WINDOW);
                let _ = msg_tx.send(Msg::CopyFeedbackExpired { epoch });
            });
        }
        Effect::OpenShareIntent { url } => {
            let intent = share_intent_url(&url, SHARE_CAPTION);
            // Fire-and-forget: no result flows back to the state machine.
            if let Err(err) = webbrowser::open(&intent) {
                folio_warn!("Failed to open share intent: {}", err);
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard.set_text(text.to_owned()).is_ok(),
        Err(err) => {
            folio_warn!("Clipboard unavailable: {}", err);
            false
        }
    }
}
