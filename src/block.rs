//! Core data model: named object blocks and their fixed property set
//!
//! The viewer emits exactly two object literals (`img1Data`, `img2Data`),
//! each carrying the same six Base64 string properties. Both lists are
//! compile-time constants; everything downstream iterates them in order so
//! output formatting stays deterministic.

/// The two object blocks every source and target document must carry
pub const BLOCK_NAMES: [&str; 2] = ["img1Data", "img2Data"];

/// The six string properties of each block, in canonical output order
pub const PROPERTY_KEYS: [&str; 6] = [
    "base",
    "bgBlur",
    "faceBlur",
    "outline",
    "skeleton",
    "annotations",
];

/// A named object literal span located in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectBlock {
    /// Identifier the literal is assigned to (`img1Data` or `img2Data`)
    pub name: String,
    /// The full matched span, from `const` to the closing `};`
    pub text: String,
}

impl ObjectBlock {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Values extracted for one block, keyed by the fixed property set.
///
/// Stored as one slot per entry of [`PROPERTY_KEYS`] so iteration always
/// follows the canonical order regardless of insertion order. A slot is
/// `None` when the key's pattern did not match in the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    values: [Option<String>; 6],
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(key: &str) -> Option<usize> {
        PROPERTY_KEYS.iter().position(|k| *k == key)
    }

    /// Binds a value to a known key. Returns false (and stores nothing) for
    /// keys outside the fixed set.
    pub fn insert(&mut self, key: &str, value: String) -> bool {
        match Self::slot(key) {
            Some(i) => {
                self.values[i] = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        Self::slot(key).and_then(|i| self.values[i].as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys that were successfully extracted
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when all six keys are bound
    pub fn is_complete(&self) -> bool {
        self.len() == PROPERTY_KEYS.len()
    }

    /// Present keys in canonical order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        PROPERTY_KEYS
            .iter()
            .zip(self.values.iter())
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| *k)
    }

    /// Absent keys in canonical order
    pub fn missing_keys(&self) -> Vec<&'static str> {
        PROPERTY_KEYS
            .iter()
            .zip(self.values.iter())
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| *k)
            .collect()
    }
}
