use crate::constants::{CLAUDE_DIR_NAME, HISTORY_FILE_NAME, PROJECTS_DIR_NAME};
use crate::error::{CtxError, Result};
use crate::types::SessionId;
use std::path::{Path, PathBuf};

/// Locations of the history index and session transcripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    claude_dir: PathBuf,
    project_slug: String,
}

impl ClaudePaths {
    pub fn new(claude_dir: impl Into<PathBuf>, project_slug: impl Into<String>) -> Self {
        Self {
            claude_dir: claude_dir.into(),
            project_slug: project_slug.into(),
        }
    }

    /// `~/.claude`, with transcripts read from the project named after the home directory
    pub fn from_home() -> Result<Self> {
        let home = home::home_dir()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(CtxError::HomeDirNotFound)?;

        Ok(Self::new(home.join(CLAUDE_DIR_NAME), project_slug(&home)))
    }

    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    pub fn history_path(&self) -> PathBuf {
        self.claude_dir.join(HISTORY_FILE_NAME)
    }

    pub fn transcript_path(&self, session_id: &SessionId) -> PathBuf {
        self.claude_dir
            .join(PROJECTS_DIR_NAME)
            .join(&self.project_slug)
            .join(session_id.transcript_file_name())
    }
}

// Project directory name for a working directory, e.g. C:\Users\dev -> C--Users-dev
pub fn project_slug(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
