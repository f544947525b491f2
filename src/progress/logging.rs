//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::SourceRead { path, bytes } => {
                info!(path = %path, bytes, "Read source file");
            }
            ProgressEvent::BlockLocated { name } => {
                debug!(block = %name, "Located block in source");
            }
            ProgressEvent::PropertiesExtracted { block, found } => {
                info!(block = %block, found, "Extracted properties");
            }
            ProgressEvent::MissingProperty { block, key } => {
                warn!(block = %block, key, "Could not find property in block");
            }
            ProgressEvent::TargetRead { path, bytes } => {
                info!(path = %path, bytes, "Read target file");
            }
            ProgressEvent::BlockReplaced { name } => {
                debug!(block = %name, "Replaced block in target");
            }
            ProgressEvent::BlockNotInTarget { name } => {
                warn!(block = %name, "Target has no matching block; left unchanged");
            }
            ProgressEvent::TargetWritten { path, bytes } => {
                info!(path = %path, bytes, "Wrote updated target file");
            }
            ProgressEvent::Completed => {
                info!("Sync complete");
            }
            ProgressEvent::Failed { error } => {
                warn!(error = %error, "Sync failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_handler_creation() {
        let handler = LoggingHandler;
        // Should not panic
        handler.on_progress(&ProgressEvent::Completed);
    }

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        // Test all event types to ensure they don't panic
        let events = vec![
            ProgressEvent::SourceRead {
                path: "/viewer.html".to_string(),
                bytes: 1024,
            },
            ProgressEvent::BlockLocated {
                name: "img1Data".to_string(),
            },
            ProgressEvent::PropertiesExtracted {
                block: "img1Data".to_string(),
                found: 6,
            },
            ProgressEvent::MissingProperty {
                block: "img1Data".to_string(),
                key: "outline",
            },
            ProgressEvent::TargetRead {
                path: "/page.tsx".to_string(),
                bytes: 2048,
            },
            ProgressEvent::BlockReplaced {
                name: "img2Data".to_string(),
            },
            ProgressEvent::BlockNotInTarget {
                name: "img2Data".to_string(),
            },
            ProgressEvent::TargetWritten {
                path: "/page.tsx".to_string(),
                bytes: 4096,
            },
            ProgressEvent::Completed,
            ProgressEvent::Failed {
                error: "test error".to_string(),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
