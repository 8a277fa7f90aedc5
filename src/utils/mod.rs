pub mod history_loader;
pub mod paths;
pub mod read;
pub mod transcript_loader;

pub use history_loader::load_latest_session_id;
pub use paths::{ClaudePaths, project_slug};
pub use transcript_loader::{latest_usage, load_transcript_usage};
