use super::context_tokens::ContextTokens;
use crate::formatting::format_metrics_line;
use crate::types::TranscriptUsage;
use std::fmt;

/// Context-window metrics derived from one usage record.
///
/// `Display` renders the status line format `tokens|raw%|usable%|overhead`,
/// with every percentage rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMetrics {
    pub tokens: ContextTokens,
    /// Percent of the full context window
    pub raw_pct: f64,
    /// Percent of the usable context window
    pub usable_pct: f64,
    /// `usable_pct - raw_pct`
    pub overhead: f64,
}

impl ContextMetrics {
    pub fn from_tokens(tokens: ContextTokens) -> Self {
        let raw_pct = tokens.raw_percentage();
        let usable_pct = tokens.usable_percentage();

        Self {
            tokens,
            raw_pct,
            usable_pct,
            overhead: usable_pct - raw_pct,
        }
    }

    pub fn from_usage(usage: &TranscriptUsage) -> Self {
        Self::from_tokens(ContextTokens::from_usage(usage))
    }
}

impl fmt::Display for ContextMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_metrics_line(
            self.tokens.get(),
            self.raw_pct,
            self.usable_pct,
            self.overhead,
        ))
    }
}
