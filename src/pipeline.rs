//! Linear extract-and-rewrite pipeline
//!
//! The run is a fixed sequence with no retries: read source, locate both
//! blocks, extract properties, read target, render and replace both blocks,
//! write target. Block location is all-or-nothing and every fatal error fires
//! before the target file is touched on disk.

use crate::block::{ObjectBlock, PropertySet, BLOCK_NAMES};
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::extract::{extract_properties, locate_block};
use crate::progress::{ProgressEvent, ProgressHandler};
use crate::render::{render_block, replace_block};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Extraction outcome for one block
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlockSummary {
    pub name: String,
    pub extracted_keys: Vec<String>,
    pub missing_keys: Vec<String>,
    pub replaced_in_target: bool,
}

/// Serializable summary of one completed run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub blocks: Vec<BlockSummary>,
    pub dry_run: bool,
}

impl SyncReport {
    /// Total properties extracted across both blocks
    pub fn extracted_total(&self) -> usize {
        self.blocks.iter().map(|b| b.extracted_keys.len()).sum()
    }

    /// True when every block had all six keys
    pub fn is_complete(&self) -> bool {
        self.blocks.iter().all(|b| b.missing_keys.is_empty())
    }
}

/// Runs the whole pipeline for the given configuration.
///
/// On error the target file is guaranteed untouched: rendering (the only
/// step that can fail after the target is read) happens entirely in memory
/// before the single write at the end.
pub fn run_sync(
    config: &SyncConfig,
    handler: &dyn ProgressHandler,
) -> Result<SyncReport, SyncError> {
    let result = run_sync_inner(config, handler);

    match &result {
        Ok(_) => handler.on_progress(&ProgressEvent::Completed),
        Err(e) => handler.on_progress(&ProgressEvent::Failed {
            error: e.to_string(),
        }),
    }

    result
}

fn run_sync_inner(
    config: &SyncConfig,
    handler: &dyn ProgressHandler,
) -> Result<SyncReport, SyncError> {
    // READ_SOURCE
    let source_doc = fs::read_to_string(&config.source).map_err(|e| SyncError::ReadFailed {
        path: config.source.clone(),
        source: e,
    })?;
    handler.on_progress(&ProgressEvent::SourceRead {
        path: config.source.display().to_string(),
        bytes: source_doc.len(),
    });

    // LOCATE_BLOCKS - all-or-nothing before anything else happens
    let mut blocks: Vec<ObjectBlock> = Vec::with_capacity(BLOCK_NAMES.len());
    for name in BLOCK_NAMES {
        let block = locate_block(&source_doc, name).ok_or_else(|| SyncError::MissingBlock {
            name: name.to_string(),
        })?;
        handler.on_progress(&ProgressEvent::BlockLocated {
            name: name.to_string(),
        });
        blocks.push(block);
    }

    // EXTRACT - missing keys warn here and fail later, at render time
    let prop_sets: Vec<(String, PropertySet)> = blocks
        .iter()
        .map(|block| (block.name.clone(), extract_properties(block, handler)))
        .collect();

    // READ_TARGET
    let mut target_doc = fs::read_to_string(&config.target).map_err(|e| SyncError::ReadFailed {
        path: config.target.clone(),
        source: e,
    })?;
    handler.on_progress(&ProgressEvent::TargetRead {
        path: config.target.display().to_string(),
        bytes: target_doc.len(),
    });

    // RENDER+REPLACE, accumulating into one in-memory document
    let mut summaries = Vec::with_capacity(prop_sets.len());
    for (name, props) in &prop_sets {
        let rendered = render_block(name, props)?;
        let (updated, replaced) = replace_block(&target_doc, name, &rendered);
        target_doc = updated;

        if replaced {
            handler.on_progress(&ProgressEvent::BlockReplaced { name: name.clone() });
        } else {
            handler.on_progress(&ProgressEvent::BlockNotInTarget { name: name.clone() });
        }

        summaries.push(BlockSummary {
            name: name.clone(),
            extracted_keys: props.keys().map(String::from).collect(),
            missing_keys: props.missing_keys().iter().map(|k| k.to_string()).collect(),
            replaced_in_target: replaced,
        });
    }

    // WRITE_TARGET - in place, no backup, no atomicity
    if config.dry_run {
        debug!(path = %config.target.display(), "Dry run, skipping write");
    } else {
        fs::write(&config.target, &target_doc).map_err(|e| SyncError::WriteFailed {
            path: config.target.clone(),
            source: e,
        })?;
        handler.on_progress(&ProgressEvent::TargetWritten {
            path: config.target.display().to_string(),
            bytes: target_doc.len(),
        });
    }

    Ok(SyncReport {
        source: config.source.clone(),
        target: config.target.clone(),
        blocks: summaries,
        dry_run: config.dry_run,
    })
}
