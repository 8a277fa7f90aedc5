use super::read::read_lossy;
use crate::error::{CtxError, Result};
use crate::types::{HistoryEntry, SessionId};
use std::path::Path;

/// Load the session id of the most recent entry in the history index.
/// Only the last non-empty line is parsed; earlier lines may be garbage.
pub async fn load_latest_session_id(history_path: &Path) -> Result<SessionId> {
    let content = read_lossy(history_path)
        .await
        .map_err(|source| CtxError::IndexRead {
            path: history_path.to_path_buf(),
            source,
        })?;

    let Some(last_line) = content.lines().map(str::trim).rfind(|l| !l.is_empty()) else {
        return Err(CtxError::IndexEmpty {
            path: history_path.to_path_buf(),
        });
    };

    let entry: HistoryEntry =
        serde_json::from_str(last_line).map_err(|source| CtxError::IndexParse {
            path: history_path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        session_id = %entry.session_id,
        project = entry.project.as_deref().unwrap_or("-"),
        "latest session from history"
    );

    Ok(entry.session_id)
}
