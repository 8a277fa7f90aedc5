use crate::constants::TRANSCRIPT_EXTENSION;
use serde::{Deserialize, Serialize};
use std::fmt;

/// NewType wrapper for Session ID, as recorded in history.jsonl
/// and used to name the session's transcript file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<id>.jsonl`
    pub fn transcript_file_name(&self) -> String {
        format!("{}.{}", self.0, TRANSCRIPT_EXTENSION)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
