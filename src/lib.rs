// Module declarations
pub mod constants;
pub mod error;
pub mod formatting;
pub mod types;
pub mod utils;

pub use error::{CtxError, Result};
pub use types::{
    ContextMetrics, ContextTokens, HistoryEntry, SessionId, TranscriptEntry, TranscriptUsage,
};
pub use utils::ClaudePaths;

use utils::{load_latest_session_id, load_transcript_usage};

/// Context metrics of the most recent session.
///
/// Looks up the latest session id in the history index, then scans that
/// session's transcript backward for the newest non-sidechain usage record.
/// Returns `Ok(None)` when the transcript holds no usage at all.
pub async fn compute_context_metrics(paths: &ClaudePaths) -> Result<Option<ContextMetrics>> {
    let session_id = load_latest_session_id(&paths.history_path()).await?;

    let transcript_path = paths.transcript_path(&session_id);
    tracing::debug!(path = %transcript_path.display(), "reading transcript");

    let usage = load_transcript_usage(&transcript_path).await?;

    Ok(usage.as_ref().map(ContextMetrics::from_usage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const SLUG: &str = "-home-dev";

    fn setup(history: &str, session_id: &str, transcript: &str) -> (TempDir, ClaudePaths) {
        let dir = TempDir::new().unwrap();
        let paths = ClaudePaths::new(dir.path().join(".claude"), SLUG);

        let project_dir = paths.claude_dir().join("projects").join(SLUG);
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(paths.history_path(), history).unwrap();
        fs::write(
            project_dir.join(format!("{}.jsonl", session_id)),
            transcript,
        )
        .unwrap();

        (dir, paths)
    }

    #[tokio::test]
    async fn test_single_usage_record() {
        let (_dir, paths) = setup(
            "{\"sessionId\":\"abc123\"}\n",
            "abc123",
            "{\"message\":{\"usage\":{\"input_tokens\":1000,\"cache_read_input_tokens\":500,\"cache_creation_input_tokens\":0}}}\n",
        );

        let metrics = compute_context_metrics(&paths).await.unwrap().unwrap();
        assert_eq!(metrics.tokens, ContextTokens::new(1500));
        assert_eq!(metrics.to_string(), "1500|0.8|0.9|0.2");
    }

    #[tokio::test]
    async fn test_sidechain_is_ignored() {
        let (_dir, paths) = setup(
            "{\"sessionId\":\"abc123\"}\n",
            "abc123",
            "{\"message\":{\"usage\":{\"input_tokens\":100}}}\n{\"isSidechain\":true,\"message\":{\"usage\":{\"input_tokens\":999999}}}\n",
        );

        let metrics = compute_context_metrics(&paths).await.unwrap().unwrap();
        assert_eq!(metrics.tokens.get(), 100);
        assert_eq!(metrics.to_string(), "100|0.1|0.1|0.0");
    }

    #[tokio::test]
    async fn test_uses_latest_session_only() {
        let (dir, paths) = setup(
            "{\"sessionId\":\"older\"}\n{\"sessionId\":\"abc123\"}\n",
            "abc123",
            "{\"message\":{\"usage\":{\"input_tokens\":100000}}}\n",
        );
        fs::write(
            dir.path()
                .join(".claude/projects")
                .join(SLUG)
                .join("older.jsonl"),
            "{\"message\":{\"usage\":{\"input_tokens\":5}}}\n",
        )
        .unwrap();

        let metrics = compute_context_metrics(&paths).await.unwrap().unwrap();
        assert_eq!(metrics.to_string(), "100000|50.0|62.5|12.5");
    }

    #[tokio::test]
    async fn test_no_usage_found() {
        let (_dir, paths) = setup(
            "{\"sessionId\":\"abc123\"}\n",
            "abc123",
            "{\"type\":\"user\",\"message\":{\"role\":\"user\",\"content\":\"hi\"}}\n",
        );

        assert!(compute_context_metrics(&paths).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_idempotent() {
        let (_dir, paths) = setup(
            "{\"sessionId\":\"abc123\"}\n",
            "abc123",
            "{\"message\":{\"usage\":{\"input_tokens\":12000,\"cache_read_input_tokens\":345}}}\n",
        );

        let first = compute_context_metrics(&paths).await.unwrap();
        let second = compute_context_metrics(&paths).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.unwrap().to_string(), "12345|6.2|7.7|1.5");
    }

    #[tokio::test]
    async fn test_missing_history() {
        let dir = TempDir::new().unwrap();
        let paths = ClaudePaths::new(dir.path().join(".claude"), SLUG);

        let err = compute_context_metrics(&paths).await.unwrap_err();
        assert!(err.is_index_error());
    }

    #[tokio::test]
    async fn test_missing_transcript() {
        let (_dir, paths) = setup("{\"sessionId\":\"abc123\"}\n", "other", "");

        let err = compute_context_metrics(&paths).await.unwrap_err();
        match err {
            CtxError::TranscriptRead { path, .. } => {
                assert!(path.ends_with(Path::new(SLUG).join("abc123.jsonl")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
