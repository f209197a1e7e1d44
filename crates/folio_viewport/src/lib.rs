//! Folio viewport: best-effort page probing behind the embedded frame.
mod embed;
mod probe;
mod types;

pub use embed::EmbedHandle;
pub use probe::{extract_title, Probe, ProbeSettings, ReqwestProbe};
pub use types::{
    Generation, LoadFallback, LoadOutcome, PageInfo, ProbeError, ViewportEvent, LOAD_FALLBACK,
};
