/// Full context window of the model, in tokens
pub const CONTEXT_WINDOW_TOKENS: u64 = 200_000;

/// Usable share of the context window (80%) before auto-compaction kicks in
pub const USABLE_CONTEXT_TOKENS: u64 = 160_000;

/// Printed in place of real metrics when nothing could be measured
pub const SENTINEL_LINE: &str = "0|0|0|0";

pub const CLAUDE_DIR_NAME: &str = ".claude";
pub const HISTORY_FILE_NAME: &str = "history.jsonl";
pub const PROJECTS_DIR_NAME: &str = "projects";
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";
