use thiserror::Error;

/// Load generation assigned by the shell; completion events echo it so the
/// state machine can discard signals for pages it has navigated away from.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportEvent {
    LoadFinished {
        generation: Generation,
        outcome: LoadOutcome,
    },
}

/// What the viewport learned about the page before declaring it loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Readiness was directly observed; the page body was fetched.
    Observed(PageInfo),
    /// Readiness could not be observed; completion was assumed under
    /// [`LoadFallback::AssumeLoadedOnUnobservable`](crate::LoadFallback).
    Unobservable { reason: ProbeError },
}

impl LoadOutcome {
    pub fn title(&self) -> Option<&str> {
        match self {
            LoadOutcome::Observed(info) => info.title.as_deref(),
            LoadOutcome::Unobservable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub final_url: String,
    pub title: Option<String>,
    pub content_type: Option<String>,
    /// Bytes read, capped at `ProbeSettings::max_bytes`.
    pub byte_len: u64,
}

/// Why a page's readiness could not be observed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The site refuses to be embedded, so its content is off limits to us.
    #[error("embedding refused by {header} header")]
    EmbeddingRefused { header: String },
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("unsupported content type {content_type}")]
    UnsupportedContentType { content_type: String },
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
}

/// Policy for loads whose readiness cannot be observed.
///
/// Kept as a named value rather than an implicit catch-and-ignore: the
/// viewport always fails open, reporting completion immediately instead of
/// leaving the shell's loading indicator up forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFallback {
    AssumeLoadedOnUnobservable,
}

pub const LOAD_FALLBACK: LoadFallback = LoadFallback::AssumeLoadedOnUnobservable;
