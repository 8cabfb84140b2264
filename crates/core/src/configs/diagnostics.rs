use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostics::size::DEFAULT_MAX_PROJECT_FILE_COUNT;

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DiagnosticsConfig {
    /// Drop hidden-severity findings unless they are tagged as unnecessary code.
    pub suppress_hidden_diagnostics: bool,
    /// Above this many source files the workspace counts as large and only open documents
    /// show diagnostics.
    pub max_project_file_count_for_diagnostic_analysis: usize,
    /// Extra diagnostic codes to tag as unnecessary code.
    pub unnecessary_codes: Vec<String>,
    /// Extra diagnostic codes to tag as deprecated.
    pub deprecated_codes: Vec<String>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            suppress_hidden_diagnostics: true,
            max_project_file_count_for_diagnostic_analysis: DEFAULT_MAX_PROJECT_FILE_COUNT,
            unnecessary_codes: Vec::new(),
            deprecated_codes: Vec::new(),
        }
    }
}
