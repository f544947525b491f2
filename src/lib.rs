//! layersync - sync Base64 image layer blocks between generated files
//!
//! A visualization pipeline emits a standalone HTML viewer carrying two
//! object literals, `img1Data` and `img2Data`, each holding six Base64
//! image layer properties (`base`, `bgBlur`, `faceBlur`, `outline`,
//! `skeleton`, `annotations`). This crate extracts those properties and
//! rewrites the matching literals inside a separately generated component
//! file, leaving every other byte of the target untouched.
//!
//! Parsing is intentionally regex-based: block spans end at the first `};`
//! and property values may not contain `"`. Both hold for Base64 payloads
//! and are documented limitations, not bugs to harden away.
//!
//! # Example
//!
//! ```no_run
//! use layersync::config::SyncConfig;
//! use layersync::pipeline::run_sync;
//! use layersync::progress::NoOpHandler;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), layersync::error::SyncError> {
//! let config = SyncConfig {
//!     source: PathBuf::from("viewer_standalone.html"),
//!     target: PathBuf::from("page.tsx"),
//!     log_level: "info".to_string(),
//!     dry_run: false,
//! };
//!
//! let report = run_sync(&config, &NoOpHandler)?;
//! println!("extracted {} properties", report.extracted_total());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`block`]: fixed block names, property keys, and the property set model
//! - [`extract`]: regex location of blocks and extraction of properties
//! - [`render`]: canonical block rendering and in-place replacement
//! - [`pipeline`]: the linear read-extract-rewrite-write orchestration
//! - [`progress`]: injectable progress/warning reporting
//! - [`cli`], [`config`], [`util`]: command line, configuration, logging

pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod util;

pub use block::{ObjectBlock, PropertySet, BLOCK_NAMES, PROPERTY_KEYS};
pub use config::{ConfigError, SyncConfig};
pub use error::SyncError;
pub use pipeline::{run_sync, BlockSummary, SyncReport};
pub use progress::{LoggingHandler, NoOpHandler, ProgressEvent, ProgressHandler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
