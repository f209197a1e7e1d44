use std::fs;
use std::io::Write;
use std::path::Path;

use folio_logging::{folio_error, folio_info, folio_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

const STATE_FILENAME: &str = ".folio_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    current_portfolio_index: usize,
}

/// Reads the last-viewed index from the state file. A missing or unreadable
/// file yields the default so a fresh install starts at the first entry.
pub(crate) fn load_current_index(state_dir: &Path) -> usize {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return 0;
        }
        Err(err) => {
            folio_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return 0;
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            folio_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            return 0;
        }
    };

    folio_info!(
        "Restored portfolio index {} from {:?}",
        state.current_portfolio_index,
        path
    );
    state.current_portfolio_index
}

/// Writes the current index atomically (temp file then rename). Failures are
/// logged and swallowed; losing one write only costs the resume position.
pub(crate) fn save_current_index(state_dir: &Path, index: usize) {
    let state = PersistedState {
        current_portfolio_index: index,
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            folio_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomic(state_dir, STATE_FILENAME, &content) {
        folio_error!(
            "Failed to write persisted state to {:?}: {}",
            state_dir,
            err
        );
    }
}

fn write_atomic(dir: &Path, filename: &str, content: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing file if present to keep determinism.
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
