use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the embedded viewport to load `url` for `generation`.
    ShowUrl { generation: Generation, url: String },
    /// Write the current index to the client-local store.
    PersistIndex { index: usize },
    /// Draw a uniformly random index in `[0, len)` and reply with
    /// `Msg::RandomIndexPicked`.
    PickRandomIndex { len: usize },
    /// Write `text` to the system clipboard and reply with
    /// `Msg::CopyFinished`.
    CopyToClipboard { text: String },
    /// Sleep 2000ms, then reply with `Msg::CopyFeedbackExpired` for `epoch`.
    StartCopyTimer { epoch: u64 },
    /// Open the social share intent for `url` in the default browser.
    OpenShareIntent { url: String },
}
