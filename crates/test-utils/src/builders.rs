#![allow(dead_code)]

use templerun::config::{ConfigFile, InputsSection, RawConfigFile, ToolSection};
use templerun::records::TemplateRecord;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                tool: ToolSection {
                    executable: "DataTemple".to_string(),
                    config: "config.xml".to_string(),
                },
                inputs: InputsSection::default(),
            },
        }
    }

    pub fn with_executable(mut self, path: &str) -> Self {
        self.config.tool.executable = path.to_string();
        self
    }

    pub fn with_tool_config(mut self, path: &str) -> Self {
        self.config.tool.config = path.to_string();
        self
    }

    pub fn with_templates_path(mut self, path: &str) -> Self {
        self.config.inputs.templates = Some(path.to_string());
        self
    }

    pub fn with_texts_path(mut self, path: &str) -> Self {
        self.config.inputs.texts = Some(path.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a template record in tests.
pub fn template(pattern: &str, transform: &str, output: &str) -> TemplateRecord {
    TemplateRecord::new(pattern, transform, output)
}

/// Shorthand for a numbered run of template records `t0..tN`.
pub fn numbered_templates(count: usize) -> Vec<TemplateRecord> {
    (0..count)
        .map(|i| template(&format!("p{i}"), &format!("t{i}"), &format!("o{i}.xml")))
        .collect()
}

/// Shorthand for a numbered run of text records `x0..xN`.
pub fn numbered_texts(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("sample text {i}")).collect()
}
