//! Rendering of canonical block text and in-place replacement
//!
//! Rendering is fail-fast: a key that did not survive extraction must abort
//! the run here, before anything is written, rather than emit an empty value
//! into the target.

use crate::block::{PropertySet, PROPERTY_KEYS};
use crate::error::SyncError;
use crate::extract::block_pattern;
use regex::NoExpand;

/// Renders the canonical pretty-printed block for a name and property set.
///
/// Keys appear in fixed order, four-space indented, with the closing brace
/// two-space indented to sit inside the enclosing component scope.
pub fn render_block(name: &str, props: &PropertySet) -> Result<String, SyncError> {
    let mut out = format!("const {} = {{\n", name);

    for key in PROPERTY_KEYS {
        let value = props.get(key).ok_or_else(|| SyncError::KeyMissing {
            block: name.to_string(),
            key,
        })?;
        out.push_str(&format!("    {}: \"{}\",\n", key, value));
    }

    out.push_str("  };");
    Ok(out)
}

/// Replaces the first `const <name> = { ... };` span with the rendered text.
///
/// Returns the updated document and whether a span was actually replaced; a
/// target without a matching block passes through unchanged.
pub fn replace_block(document: &str, name: &str, rendered: &str) -> (String, bool) {
    let re = block_pattern(name);
    let replaced = re.is_match(document);
    let updated = re.replace(document, NoExpand(rendered)).into_owned();
    (updated, replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_props() -> PropertySet {
        let mut props = PropertySet::new();
        props.insert("base", "AAA".to_string());
        props.insert("bgBlur", "BBB".to_string());
        props.insert("faceBlur", "CCC".to_string());
        props.insert("outline", "DDD".to_string());
        props.insert("skeleton", "EEE".to_string());
        props.insert("annotations", "FFF".to_string());
        props
    }

    #[test]
    fn test_render_block_exact_shape() {
        let rendered = render_block("img1Data", &full_props()).unwrap();
        let expected = "const img1Data = {\n    \
                        base: \"AAA\",\n    \
                        bgBlur: \"BBB\",\n    \
                        faceBlur: \"CCC\",\n    \
                        outline: \"DDD\",\n    \
                        skeleton: \"EEE\",\n    \
                        annotations: \"FFF\",\n  };";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_block_fails_on_missing_key() {
        let mut props = full_props();
        props = {
            // Rebuild without skeleton
            let mut p = PropertySet::new();
            for key in PROPERTY_KEYS {
                if key != "skeleton" {
                    p.insert(key, props.get(key).unwrap().to_string());
                }
            }
            p
        };

        let err = render_block("img1Data", &props).unwrap_err();
        match err {
            SyncError::KeyMissing { block, key } => {
                assert_eq!(block, "img1Data");
                assert_eq!(key, "skeleton");
            }
            other => panic!("expected KeyMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_replace_block_preserves_surroundings() {
        let target = "// header\nconst img1Data = { base: \"x\" };\n// footer\n";
        let rendered = render_block("img1Data", &full_props()).unwrap();
        let (updated, replaced) = replace_block(target, "img1Data", &rendered);

        assert!(replaced);
        assert!(updated.starts_with("// header\n"));
        assert!(updated.ends_with("\n// footer\n"));
        assert!(updated.contains("skeleton: \"EEE\","));
        assert!(!updated.contains("base: \"x\""));
    }

    #[test]
    fn test_replace_block_only_first_occurrence() {
        let target = "const img1Data = { base: \"x\" };\nconst img1Data = { base: \"y\" };\n";
        let rendered = render_block("img1Data", &full_props()).unwrap();
        let (updated, replaced) = replace_block(target, "img1Data", &rendered);

        assert!(replaced);
        // Second occurrence is intentionally left alone
        assert!(updated.contains("base: \"y\""));
        assert!(!updated.contains("base: \"x\""));
    }

    #[test]
    fn test_replace_block_no_match_is_noop() {
        let target = "nothing relevant\n";
        let rendered = render_block("img2Data", &full_props()).unwrap();
        let (updated, replaced) = replace_block(target, "img2Data", &rendered);

        assert!(!replaced);
        assert_eq!(updated, target);
    }

    #[test]
    fn test_replace_block_literal_dollar_in_value() {
        // Not part of the Base64 alphabet, but replacement must never treat
        // the rendered text as a capture-group template
        let mut props = full_props();
        props.insert("base", "$1$0".to_string());
        let rendered = render_block("img1Data", &props).unwrap();

        let target = "const img1Data = { base: \"x\" };";
        let (updated, _) = replace_block(target, "img1Data", &rendered);
        assert!(updated.contains("base: \"$1$0\","));
    }
}
