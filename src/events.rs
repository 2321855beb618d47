// Event types for async communication

use crate::models::{Blog, ProgressState};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The progress script moved to a new stage
    Progress(ProgressState),
    /// Generation finished with a blog
    BlogReady(Blog),
    /// Generation failed; the message is for the log only
    GenerationFailed(String),
}
