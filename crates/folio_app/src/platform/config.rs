use std::path::PathBuf;

use super::logging::LogDestination;

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the client-local state file.
    pub state_dir: PathBuf,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let state_dir = std::env::var_os("FOLIO_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            });
        let log_destination =
            log_destination_from(std::env::var("FOLIO_LOG").ok().as_deref());
        Self {
            state_dir,
            log_destination,
        }
    }
}

fn log_destination_from(value: Option<&str>) -> LogDestination {
    match value {
        Some("terminal") => LogDestination::Terminal,
        Some("both") => LogDestination::Both,
        _ => LogDestination::File,
    }
}
