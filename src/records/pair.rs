// src/records/pair.rs

use crate::records::model::{TemplateRecord, TextRecord};

/// Pair templates and texts positionally: pair `i` is element `i` of each
/// source, and the result stops at the shorter sequence's length.
///
/// Truncation is deliberate batch semantics, not a length-mismatch error:
/// surplus entries in the longer source are silently dropped. Either source
/// being empty yields an empty pairing.
pub fn pair_records<'a>(
    templates: &'a [TemplateRecord],
    texts: &'a [TextRecord],
) -> Vec<(&'a TextRecord, &'a TemplateRecord)> {
    texts.iter().zip(templates.iter()).collect()
}
