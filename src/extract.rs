//! Regex-based location of object blocks and extraction of their properties
//!
//! Parsing here is deliberately textual, not structural. Block location stops
//! at the first `}` after the opening brace, so a property value containing a
//! literal `}` truncates the match. Property values are maximal runs of
//! non-quote characters, so an embedded `"` cannot round-trip. Both are
//! accepted limitations: the payloads are Base64, and that alphabet contains
//! neither character.

use crate::block::{ObjectBlock, PropertySet, PROPERTY_KEYS};
use crate::progress::{ProgressEvent, ProgressHandler};
use regex::Regex;

/// Builds the pattern matching `const <name> = { ... };` up to the first `}`
pub(crate) fn block_pattern(name: &str) -> Regex {
    let pattern = format!(r"const {} = \{{[^}}]+\}};", regex::escape(name));
    // Infallible: the only interpolated part is escaped
    Regex::new(&pattern).expect("block pattern is valid")
}

/// Finds the first occurrence of the named object block in a document.
///
/// Returns `None` when no span matches; callers decide whether that is fatal.
pub fn locate_block(document: &str, name: &str) -> Option<ObjectBlock> {
    block_pattern(name)
        .find(document)
        .map(|m| ObjectBlock::new(name, m.as_str()))
}

/// Pulls the six fixed properties out of a located block.
///
/// A key whose pattern does not match is reported through the handler and
/// simply left out of the result; extraction itself never fails.
pub fn extract_properties(block: &ObjectBlock, handler: &dyn ProgressHandler) -> PropertySet {
    let mut props = PropertySet::new();

    for key in PROPERTY_KEYS {
        let pattern = format!(r#"{}:\s*"([^"]+)""#, key);
        let re = Regex::new(&pattern).expect("property pattern is valid");

        match re.captures(&block.text) {
            Some(cap) => {
                props.insert(key, cap[1].to_string());
            }
            None => {
                handler.on_progress(&ProgressEvent::MissingProperty {
                    block: block.name.clone(),
                    key,
                });
            }
        }
    }

    handler.on_progress(&ProgressEvent::PropertiesExtracted {
        block: block.name.clone(),
        found: props.len(),
    });

    props
}
