// src/records/model.rs

/// One sample text driving one invocation.
pub type TextRecord = String;

/// One template triple driving one invocation.
///
/// The three fields are positional in the source: element 0 is the pattern
/// spec, element 1 the transform spec, element 2 the output path. They are
/// opaque to the driver; only the external tool interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    /// Pattern spec, passed to the tool's `-P` flag.
    pub pattern: String,

    /// Transform spec, passed to the tool's `-T` flag.
    pub transform: String,

    /// Output path, passed to the tool's `-O` flag.
    pub output: String,
}

impl TemplateRecord {
    pub fn new(
        pattern: impl Into<String>,
        transform: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            transform: transform.into(),
            output: output.into(),
        }
    }
}
