//! HTML character entity decoding.

use htmlentity::entity::{decode, ICodedDataTrait};

/// Decode named and numeric character references.
///
/// Decoding is not idempotent: `&amp;lt;` decodes to `&lt;`, and decoding that
/// again yields `<`. Callers must decode raw parser output exactly once.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    match decode(text.as_bytes()).to_string() {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(
                "Failed to decode HTML entities: {}. Using undecoded text.",
                e
            );
            text.to_string()
        }
    }
}
