pub mod context_metrics;
pub mod context_tokens;
pub mod ids;
pub mod input;

pub use context_metrics::ContextMetrics;
pub use context_tokens::ContextTokens;
pub use ids::SessionId;
pub use input::{HistoryEntry, TranscriptEntry, TranscriptMessageContent, TranscriptUsage};
