use super::read::{non_blank_lines, read_lossy};
use crate::error::{CtxError, Result};
use crate::types::{TranscriptEntry, TranscriptUsage};
use std::path::Path;

/// Load the latest transcript usage from a transcript file
/// This function handles the I/O; the scan itself is `latest_usage`
pub async fn load_transcript_usage(transcript_path: &Path) -> Result<Option<TranscriptUsage>> {
    let content = read_lossy(transcript_path)
        .await
        .map_err(|source| CtxError::TranscriptRead {
            path: transcript_path.to_path_buf(),
            source,
        })?;

    Ok(latest_usage(&non_blank_lines(&content)))
}

/// Scan JSONL lines from last to first and return the most recent usage
/// of a non-sidechain entry. Unparseable lines are skipped.
pub fn latest_usage(lines: &[&str]) -> Option<TranscriptUsage> {
    for (index, line) in lines.iter().enumerate().rev() {
        let entry = match serde_json::from_str::<TranscriptEntry>(line) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(line = index + 1, error = %err, "skipping unparseable transcript line");
                continue;
            }
        };

        if let Some(usage) = entry.primary_usage() {
            tracing::debug!(line = index + 1, "selected usage record");
            return Some(usage);
        }
    }

    // No valid usage information found
    None
}
