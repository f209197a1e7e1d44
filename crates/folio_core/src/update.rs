use crate::{AppState, Effect, Msg};

const COPY_FAILED_NOTICE: &str = "Couldn't copy link to clipboard";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => match state.current_index() {
            Some(index) => {
                // Initial load: same generation bump as a jump, but the
                // index did not change so nothing is persisted.
                state.begin_load_at(index);
                state.mark_dirty();
                vec![show_url(&state)]
            }
            None => Vec::new(),
        },
        Msg::BackClicked => match state.current_index() {
            Some(index) if index > 0 => jump(&mut state, index - 1),
            _ => Vec::new(),
        },
        Msg::ForwardClicked => match state.current_index() {
            Some(index) if index + 1 < state.link_count() => jump(&mut state, index + 1),
            _ => Vec::new(),
        },
        Msg::RandomClicked => {
            if state.current_index().is_some() {
                vec![Effect::PickRandomIndex {
                    len: state.link_count(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::RandomIndexPicked(index) => {
            // Re-selecting the current index is allowed and reloads it.
            if state.current_index().is_some() && index < state.link_count() {
                jump(&mut state, index)
            } else {
                Vec::new()
            }
        }
        Msg::InputChanged(text) => {
            state.set_input_text(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::InputSubmitted => match parse_entry(state.input_text(), state.link_count()) {
            Some(index) => jump(&mut state, index),
            None => {
                // Soft validation: revert the box, never surface an error.
                state.sync_input_text();
                state.mark_dirty();
                Vec::new()
            }
        },
        Msg::InputBlurred => {
            state.sync_input_text();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ViewportLoaded { generation, title } => {
            // A signal for an older generation belongs to a URL we have
            // already navigated away from; drop it.
            if generation == state.generation() && state.is_loading() {
                state.finish_load(title);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CopyClicked => match state.current_url() {
            Some(url) => vec![Effect::CopyToClipboard {
                text: url.to_owned(),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinished { ok: true } => {
            state.set_copied(true);
            let epoch = state.bump_copy_epoch();
            state.mark_dirty();
            vec![Effect::StartCopyTimer { epoch }]
        }
        Msg::CopyFinished { ok: false } => {
            state.set_notice(Some(COPY_FAILED_NOTICE.to_string()));
            state.mark_dirty();
            Vec::new()
        }
        Msg::CopyFeedbackExpired { epoch } => {
            // A timer from an earlier copy must not cut the current
            // feedback window short.
            if epoch == state.copy_epoch() && state.copied() {
                state.set_copied(false);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ShareClicked => match state.current_url() {
            Some(url) => vec![Effect::OpenShareIntent {
                url: url.to_owned(),
            }],
            None => Vec::new(),
        },
        Msg::NoticeDismissed => {
            if state.notice().is_some() {
                state.set_notice(None);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn jump(state: &mut AppState, index: usize) -> Vec<Effect> {
    state.begin_load_at(index);
    state.mark_dirty();
    vec![show_url(state), Effect::PersistIndex { index }]
}

fn show_url(state: &AppState) -> Effect {
    Effect::ShowUrl {
        generation: state.generation(),
        url: state.current_url().unwrap_or_default().to_owned(),
    }
}

/// Parses a 1-based human entry against a list of `len` items, returning the
/// 0-based index. Anything non-integer or out of range is rejected.
fn parse_entry(text: &str, len: usize) -> Option<usize> {
    let entered: usize = text.trim().parse().ok()?;
    (1..=len).contains(&entered).then(|| entered - 1)
}
