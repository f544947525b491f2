//! Progress handler trait and events

/// Events emitted while the pipeline runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Source document loaded into memory
    SourceRead { path: String, bytes: usize },

    /// A named object block was found in the source
    BlockLocated { name: String },

    /// Property extraction finished for one block
    PropertiesExtracted { block: String, found: usize },

    /// A property pattern did not match inside a located block.
    /// Non-fatal here; the render step fails later if the key is needed.
    MissingProperty { block: String, key: &'static str },

    /// Target document loaded into memory
    TargetRead { path: String, bytes: usize },

    /// A block in the target was replaced with freshly rendered text
    BlockReplaced { name: String },

    /// The target contained no span matching a block; the document is
    /// carried forward unchanged for that name
    BlockNotInTarget { name: String },

    /// Target document persisted
    TargetWritten { path: String, bytes: usize },

    /// Run finished successfully
    Completed,

    /// Run aborted
    Failed { error: String },
}

/// Trait for observing pipeline progress
pub trait ProgressHandler: Send + Sync {
    /// Called once per event, in pipeline order
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {
        // Intentionally empty
    }
}
