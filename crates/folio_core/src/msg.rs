use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App shell finished setting up; request the initial viewport load.
    Started,
    /// User clicked the back arrow.
    BackClicked,
    /// User clicked the forward arrow.
    ForwardClicked,
    /// User clicked Random.
    RandomClicked,
    /// Platform drew a random index in response to `Effect::PickRandomIndex`.
    RandomIndexPicked(usize),
    /// User edited the index input box (draft text, not yet confirmed).
    InputChanged(String),
    /// User confirmed the index input with Enter.
    InputSubmitted,
    /// The index input box lost focus without confirmation.
    InputBlurred,
    /// The embedded viewport reported load completion for a generation.
    ViewportLoaded {
        generation: Generation,
        title: Option<String>,
    },
    /// User clicked Copy.
    CopyClicked,
    /// Platform finished the clipboard write attempt.
    CopyFinished { ok: bool },
    /// The 2-second copy-feedback timer fired for an epoch.
    CopyFeedbackExpired { epoch: u64 },
    /// User clicked Share.
    ShareClicked,
    /// User dismissed the notice bar.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
