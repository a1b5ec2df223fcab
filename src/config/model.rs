// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file, before validation.
///
/// This is a direct mapping of the expected file shape:
///
/// ```toml
/// [tool]
/// executable = "DataTemple"
/// config = "config.xml"
///
/// [inputs]
/// templates = "templates.json"
/// texts = "texts.json"
/// ```
///
/// The `[inputs]` section is optional; both of its paths can be supplied (or
/// overridden) on the command line instead.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// The external tool from `[tool]`.
    pub tool: ToolSection,

    /// Default input paths from `[inputs]`.
    #[serde(default)]
    pub inputs: InputsSection,
}

/// Validated configuration used by the rest of the application.
///
/// Construct via `ConfigFile::try_from(raw)` (see `validate.rs`) or the
/// `load_and_validate` loader entry point.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub tool: ToolSection,
    pub inputs: InputsSection,
}

impl ConfigFile {
    /// Internal constructor used after validation has passed.
    pub(crate) fn new_unchecked(tool: ToolSection, inputs: InputsSection) -> Self {
        Self { tool, inputs }
    }
}

/// `[tool]` section: the fixed identity of the external collaborator.
///
/// Both paths are configured constants; they are never derived from the
/// input records.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSection {
    /// Path (or name resolvable via PATH) of the external executable.
    pub executable: String,

    /// Path passed to the executable's `-c` flag on every invocation.
    pub config: String,
}

/// `[inputs]` section.
///
/// Default locations of the two record sources. CLI flags `--templates` and
/// `--texts` take precedence over these.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct InputsSection {
    /// Templates source: JSON array of string triples.
    #[serde(default)]
    pub templates: Option<String>,

    /// Texts source: JSON array of strings.
    #[serde(default)]
    pub texts: Option<String>,
}
