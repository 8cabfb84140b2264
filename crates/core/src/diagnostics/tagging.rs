use std::collections::HashSet;

use crate::configs::diagnostics::DiagnosticsConfig;
use crate::diagnostics::record::{DiagnosticRecord, DiagnosticTag};

/// Codes for redundant code: unused usings, unused locals and parameters, unreachable code.
pub const DEFAULT_UNNECESSARY_CODES: &[&str] = &[
    "CS8019", "IDE0005", "IDE0059", "CS0168", "CS0219", "CS0162", "IDE0051", "IDE0052", "IDE0060",
];

/// Codes for use of obsolete members.
pub const DEFAULT_DEPRECATED_CODES: &[&str] = &["CS0612", "CS0618"];

/// Decides which tags a finding gets from its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRules {
    unnecessary: HashSet<String>,
    deprecated: HashSet<String>,
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            unnecessary: to_set(DEFAULT_UNNECESSARY_CODES.iter().copied()),
            deprecated: to_set(DEFAULT_DEPRECATED_CODES.iter().copied()),
        }
    }
}

impl TagRules {
    /// Default codes extended with the configured ones.
    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        let mut rules = Self::default();
        rules
            .unnecessary
            .extend(to_set(config.unnecessary_codes.iter().map(String::as_str)));
        rules
            .deprecated
            .extend(to_set(config.deprecated_codes.iter().map(String::as_str)));
        rules
    }

    pub fn is_unnecessary(&self, code: &str) -> bool {
        self.unnecessary.contains(&normalize(code))
    }

    pub fn is_deprecated(&self, code: &str) -> bool {
        self.deprecated.contains(&normalize(code))
    }

    /// Add the tags implied by the record's code. Existing tags are kept.
    pub fn apply(&self, record: &mut DiagnosticRecord) {
        if self.is_unnecessary(&record.code) {
            record.add_tag(DiagnosticTag::Unnecessary);
        }
        if self.is_deprecated(&record.code) {
            record.add_tag(DiagnosticTag::Deprecated);
        }
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn to_set<'a>(codes: impl Iterator<Item = &'a str>) -> HashSet<String> {
    codes.map(normalize).collect()
}
