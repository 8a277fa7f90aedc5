use crate::constants::{CONTEXT_WINDOW_TOKENS, USABLE_CONTEXT_TOKENS};
use crate::types::TranscriptUsage;

/// Represents the context token usage for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ContextTokens(u64);

impl ContextTokens {
    /// Create from raw token count
    pub fn new(tokens: u64) -> Self {
        ContextTokens(tokens)
    }

    /// Create from transcript usage data
    pub fn from_usage(usage: &TranscriptUsage) -> Self {
        // Calculate total input tokens including cache
        let total_input = usage
            .input_tokens
            .unwrap_or(0)
            .saturating_add(usage.cache_read_input_tokens.unwrap_or(0))
            .saturating_add(usage.cache_creation_input_tokens.unwrap_or(0));

        ContextTokens(total_input)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Share of the full context window, in percent
    pub fn raw_percentage(&self) -> f64 {
        self.percentage_of(CONTEXT_WINDOW_TOKENS)
    }

    /// Share of the usable (pre-compaction) context window, in percent
    pub fn usable_percentage(&self) -> f64 {
        self.percentage_of(USABLE_CONTEXT_TOKENS)
    }

    fn percentage_of(&self, window: u64) -> f64 {
        self.0 as f64 / window as f64 * 100.0
    }
}
