use std::fmt;

use assetgen_protocol::DiagnosticLocation;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
    /// Reported for fade-out styling only; never shown in problem lists.
    Hidden,
}

impl DiagnosticSeverity {
    /// Map the engine's `LogLevel` string. Unknown levels are treated as `Info`.
    pub fn from_log_level(level: &str) -> Self {
        match level.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warning" => Self::Warning,
            "hidden" => Self::Hidden,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Hidden => "hidden",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticTag {
    Unnecessary,
    Deprecated,
}

impl DiagnosticTag {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "unnecessary" => Some(Self::Unnecessary),
            "deprecated" => Some(Self::Deprecated),
            _ => None,
        }
    }
}

/// Zero-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// End-exclusive source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered one-based, the way compilers print locations
        write!(f, "{}:{}", self.start.line + 1, self.start.column + 1)
    }
}

/// Identity used to drop duplicates within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticKey {
    pub uri: Url,
    pub code: String,
    pub range: TextRange,
}

/// A single finding for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub uri: Url,
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub range: TextRange,
    pub tags: Vec<DiagnosticTag>,
}

impl DiagnosticRecord {
    pub fn new(
        uri: Url,
        code: impl Into<String>,
        message: impl Into<String>,
        severity: DiagnosticSeverity,
        range: TextRange,
    ) -> Self {
        Self {
            uri,
            code: code.into(),
            message: message.into(),
            severity,
            range,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: DiagnosticTag) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn has_tag(&self, tag: DiagnosticTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Add `tag` unless it is already present.
    pub fn add_tag(&mut self, tag: DiagnosticTag) {
        if !self.has_tag(tag) {
            self.tags.push(tag);
        }
    }

    pub fn key(&self) -> DiagnosticKey {
        DiagnosticKey {
            uri: self.uri.clone(),
            code: self.code.clone(),
            range: self.range,
        }
    }

    /// Convert a pushed finding for the document at `uri`. Unknown tag names are ignored.
    pub fn from_location(uri: &Url, location: &DiagnosticLocation) -> Self {
        let range = TextRange::new(
            Position::new(location.line, location.column),
            Position::new(location.end_line, location.end_column),
        );
        let mut record = Self::new(
            uri.clone(),
            location.id.as_str(),
            location.text.as_str(),
            DiagnosticSeverity::from_log_level(&location.log_level),
            range,
        );
        for tag in location.tags.iter().filter_map(|tag| DiagnosticTag::parse(tag)) {
            record.add_tag(tag);
        }
        record
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.range, self.severity, self.code, self.message
        )
    }
}
