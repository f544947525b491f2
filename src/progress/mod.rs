//! Progress reporting for the sync pipeline
//!
//! The pipeline never prints directly; it emits [`ProgressEvent`]s through an
//! injectable [`ProgressHandler`] so tests can assert on diagnostics without
//! capturing console output. The CLI installs [`LoggingHandler`], which maps
//! events onto tracing.

pub mod handler;
pub mod logging;

pub use handler::{NoOpHandler, ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;
