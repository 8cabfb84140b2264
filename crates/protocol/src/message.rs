//! Diagnostics push messages.
//!
//! The analysis engine publishes its findings as [`DiagnosticMessage`]s. Each message
//! carries one [`DiagnosticResult`] per file, and every result is a complete snapshot of
//! that file's findings: a file that appears with an empty `quick_fixes` list has no
//! diagnostics any more.

use serde::{Deserialize, Serialize};

/// A diagnostics push from the analysis engine.
///
/// ```rust
/// # use assetgen_protocol::DiagnosticMessage;
/// let message: DiagnosticMessage = serde_json::from_str(r#"{
///     "Results": [{
///         "FileName": "/work/app/Program.cs",
///         "QuickFixes": [{
///             "Line": 0, "Column": 0, "EndLine": 0, "EndColumn": 13,
///             "Text": "Unnecessary using directive. (CS8019)",
///             "LogLevel": "Hidden",
///             "Id": "CS8019"
///         }]
///     }]
/// }"#).unwrap();
///
/// assert_eq!(message.results.len(), 1);
/// assert_eq!(message.results[0].quick_fixes[0].id, "CS8019");
/// assert!(message.results[0].quick_fixes[0].tags.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiagnosticMessage {
    pub results: Vec<DiagnosticResult>,
}

/// All findings for a single file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiagnosticResult {
    /// Absolute path of the analyzed file.
    pub file_name: String,

    /// The findings, in the order the engine reported them.
    pub quick_fixes: Vec<DiagnosticLocation>,
}

/// A single finding.
///
/// Positions are zero-based and the range is end-exclusive, matching the editor's
/// convention. `log_level` is one of `Error`, `Warning`, `Info` or `Hidden`; `tags` holds
/// engine-provided classifications such as `Unnecessary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiagnosticLocation {
    pub file_name: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub text: String,
    pub log_level: String,
    pub id: String,
    pub tags: Vec<String>,
}
