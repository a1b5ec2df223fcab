// src/batch/invocation.rs

//! One command-line invocation of the external tool.
//!
//! Execution uses an explicit program + argv passed straight to the process
//! API; no shell ever parses the arguments. The single-string form exists
//! only as the audit line printed before each execution.

use crate::config::ToolSection;
use crate::records::{TemplateRecord, TextRecord};

/// A fully constructed invocation: program name plus argument vector.
///
/// The argv order is the tool's fixed contract:
/// `-c <config> -P <pattern> -T <transform> -O <output> -I <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Build the invocation for one (text, template) pair.
    ///
    /// The executable and `-c` config path come from `[tool]` and are the
    /// same for every pair; only the four record-derived values vary.
    pub fn build(tool: &ToolSection, text: &TextRecord, template: &TemplateRecord) -> Self {
        let args = vec![
            "-c".to_string(),
            tool.config.clone(),
            "-P".to_string(),
            template.pattern.clone(),
            "-T".to_string(),
            template.transform.clone(),
            "-O".to_string(),
            template.output.clone(),
            "-I".to_string(),
            text.clone(),
        ];

        Self {
            program: tool.executable.clone(),
            args,
        }
    }

    /// Render the audit line printed to stdout before execution.
    ///
    /// Record-derived values are wrapped in double quotes so embedded
    /// whitespace reads as a single shell token; flag names and the fixed
    /// paths are left bare. Embedded double quotes in a value are NOT
    /// escaped — a known limitation of this display form. Execution never
    /// re-parses this string, so the limitation affects the printed line
    /// only.
    pub fn render(&self) -> String {
        let mut line = self.program.clone();

        let mut args = self.args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" => {
                    let value = args.next().map(String::as_str).unwrap_or("");
                    line.push_str(&format!(" -c {value}"));
                }
                "-P" | "-T" | "-O" | "-I" => {
                    let value = args.next().map(String::as_str).unwrap_or("");
                    line.push_str(&format!(" {arg} \"{value}\""));
                }
                other => {
                    line.push(' ');
                    line.push_str(other);
                }
            }
        }

        line
    }
}
