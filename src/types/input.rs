use super::ids::SessionId;
use serde::Deserialize;
use serde_json::{Map, Value};

// One line of ~/.claude/history.jsonl
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub session_id: SessionId,
    #[serde(default)]
    pub project: Option<String>,
}

// Transcript line structure for parsing JSONL
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    #[serde(default, rename = "isSidechain")]
    pub sidechain: Option<Value>,
    #[serde(default)]
    pub message: Option<TranscriptMessageContent>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptMessageContent {
    #[serde(default)]
    pub usage: Option<TranscriptUsage>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TranscriptUsage {
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_input_tokens: Option<u64>,
    // output_tokens, service_tier, server_tool_use, ...
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl TranscriptUsage {
    /// A usage object with no keys at all (`{}`)
    pub fn is_empty(&self) -> bool {
        self.input_tokens.is_none()
            && self.cache_creation_input_tokens.is_none()
            && self.cache_read_input_tokens.is_none()
            && self.other.is_empty()
    }
}

impl TranscriptEntry {
    /// `isSidechain` holds any truthy value (true, non-zero, non-empty)
    pub fn is_sidechain(&self) -> bool {
        self.sidechain.as_ref().is_some_and(is_truthy)
    }

    /// Usage of a primary-thread entry, if it carries a non-empty one
    pub fn primary_usage(self) -> Option<TranscriptUsage> {
        if self.is_sidechain() {
            return None;
        }
        self.message
            .and_then(|message| message.usage)
            .filter(|usage| !usage.is_empty())
    }
}

// false, null, 0, "", [] and {} are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
