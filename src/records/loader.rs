// src/records/loader.rs

//! JSON loaders for the two record sources.
//!
//! Both sources are read once at startup and never re-read. Parsing is
//! schema-checked: a templates source must decode to an array of arrays of
//! strings, a texts source to an array of strings. Anything else is a
//! `MalformedInput` error naming the offending file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::errors::{Result, TemplerunError};
use crate::records::model::{TemplateRecord, TextRecord};

/// Minimum number of string fields a template tuple must carry.
const TEMPLATE_ARITY: usize = 3;

/// Load the templates source: a JSON array of string tuples, each with at
/// least three elements `(pattern, transform, output)`.
///
/// Elements beyond the third are ignored. Source order is preserved exactly;
/// it drives positional pairing downstream.
pub fn load_templates(path: impl AsRef<Path>) -> Result<Vec<TemplateRecord>> {
    let path = path.as_ref();
    let contents = read_source(path)?;

    let rows: Vec<Vec<String>> = serde_json::from_str(&contents)
        .map_err(|e| malformed(path, format!("expected a JSON array of string arrays: {e}")))?;

    let mut templates = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        if row.len() < TEMPLATE_ARITY {
            return Err(malformed(
                path,
                format!(
                    "template {index} has {} fields, expected at least {TEMPLATE_ARITY} \
                     (pattern, transform, output)",
                    row.len()
                ),
            ));
        }
        if row.len() > TEMPLATE_ARITY {
            debug!(
                index,
                extra = row.len() - TEMPLATE_ARITY,
                "template has extra fields beyond (pattern, transform, output); ignoring them"
            );
        }

        let mut fields = row.into_iter();
        // len >= TEMPLATE_ARITY was checked above.
        let pattern = fields.next().unwrap_or_default();
        let transform = fields.next().unwrap_or_default();
        let output = fields.next().unwrap_or_default();
        templates.push(TemplateRecord::new(pattern, transform, output));
    }

    debug!(path = %path.display(), count = templates.len(), "loaded templates source");
    Ok(templates)
}

/// Load the texts source: a JSON array of strings, one per sample text.
pub fn load_texts(path: impl AsRef<Path>) -> Result<Vec<TextRecord>> {
    let path = path.as_ref();
    let contents = read_source(path)?;

    let texts: Vec<TextRecord> = serde_json::from_str(&contents)
        .map_err(|e| malformed(path, format!("expected a JSON array of strings: {e}")))?;

    debug!(path = %path.display(), count = texts.len(), "loaded texts source");
    Ok(texts)
}

/// Read a source file, classifying open failures as `InputNotFound` so the
/// fatal message names which source was missing.
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => TemplerunError::InputNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => TemplerunError::IoError(source),
    })
}

fn malformed(path: &Path, message: String) -> TemplerunError {
    TemplerunError::MalformedInput {
        path: path.to_path_buf(),
        message,
    }
}
