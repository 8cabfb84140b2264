use std::collections::HashSet;
use std::sync::Arc;

use assetgen_protocol::DiagnosticMessage;
use dashmap::DashMap;
use url::Url;

use crate::configs::diagnostics::DiagnosticsConfig;
use crate::diagnostics::record::{DiagnosticRecord, DiagnosticSeverity, DiagnosticTag};
use crate::diagnostics::size::WorkspaceSizeClass;
use crate::diagnostics::tagging::TagRules;

/// Where a document is in its analysis cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisState {
    Unanalyzed,
    /// A new batch is expected. The previous results stay visible meanwhile.
    Analyzing,
    HasResults,
}

#[derive(Debug, Clone)]
struct DocumentEntry {
    state: AnalysisState,
    records: Arc<[DiagnosticRecord]>,
}

/// Per-document diagnostics store fed by analysis pushes.
///
/// Each document's records are replaced as a whole by a single map insert, so a concurrent
/// [`query`](Self::query) returns either the previous batch or the new one.
#[derive(Debug)]
pub struct DiagnosticsReconciler {
    documents: DashMap<Url, DocumentEntry>,
    rules: TagRules,
    suppress_hidden: bool,
}

impl Default for DiagnosticsReconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsReconciler {
    pub fn new() -> Self {
        Self::from_config(&DiagnosticsConfig::default())
    }

    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        Self {
            documents: DashMap::new(),
            rules: TagRules::from_config(config),
            suppress_hidden: config.suppress_hidden_diagnostics,
        }
    }

    /// Mark a document as being re-analyzed.
    pub fn begin_analysis(&self, uri: &Url) {
        self.documents
            .entry(uri.clone())
            .and_modify(|entry| entry.state = AnalysisState::Analyzing)
            .or_insert_with(|| DocumentEntry {
                state: AnalysisState::Analyzing,
                records: empty(),
            });
    }

    /// Replace the document's findings with `batch`.
    ///
    /// Duplicates (same document, code and range) are dropped with the first one kept, codes
    /// are tagged, and hidden findings that are not unnecessary code are discarded when
    /// hidden suppression is on.
    pub fn ingest(&self, uri: &Url, batch: Vec<DiagnosticRecord>) {
        let received = batch.len();
        let mut seen = HashSet::with_capacity(received);

        let records: Vec<DiagnosticRecord> = batch
            .into_iter()
            .filter(|record| seen.insert(record.key()))
            .map(|mut record| {
                self.rules.apply(&mut record);
                record
            })
            .filter(|record| self.is_retained(record))
            .collect();

        tracing::debug!(
            uri = %uri,
            received,
            retained = records.len(),
            "Ingested diagnostics batch"
        );

        self.documents.insert(
            uri.clone(),
            DocumentEntry {
                state: AnalysisState::HasResults,
                records: records.into(),
            },
        );
    }

    /// Ingest every file of a push message. Returns the number of documents updated.
    pub fn ingest_message(&self, message: &DiagnosticMessage) -> usize {
        let mut updated = 0;
        for result in &message.results {
            let uri = match Url::from_file_path(&result.file_name) {
                Ok(uri) => uri,
                Err(()) => {
                    tracing::warn!(
                        file = %result.file_name,
                        "Skipping diagnostics for a file name that is not an absolute path"
                    );
                    continue;
                }
            };

            let batch = result
                .quick_fixes
                .iter()
                .map(|location| DiagnosticRecord::from_location(&uri, location))
                .collect();
            self.ingest(&uri, batch);
            updated += 1;
        }
        updated
    }

    /// Visible findings for a document. Large workspaces hide closed documents.
    pub fn query(
        &self,
        uri: &Url,
        is_open: bool,
        size_class: WorkspaceSizeClass,
    ) -> Arc<[DiagnosticRecord]> {
        if !size_class.is_visible(is_open) {
            return empty();
        }
        self.documents
            .get(uri)
            .map(|entry| Arc::clone(&entry.records))
            .unwrap_or_else(empty)
    }

    pub fn state(&self, uri: &Url) -> AnalysisState {
        self.documents
            .get(uri)
            .map(|entry| entry.state)
            .unwrap_or(AnalysisState::Unanalyzed)
    }

    /// Known documents, sorted.
    pub fn documents(&self) -> Vec<Url> {
        let mut uris: Vec<Url> = self
            .documents
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        uris.sort();
        uris
    }

    fn is_retained(&self, record: &DiagnosticRecord) -> bool {
        !(self.suppress_hidden
            && record.severity == DiagnosticSeverity::Hidden
            && !record.has_tag(DiagnosticTag::Unnecessary))
    }
}

fn empty() -> Arc<[DiagnosticRecord]> {
    Arc::from(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::record::{Position, TextRange};
    use assetgen_protocol::{DiagnosticLocation, DiagnosticResult};
    use std::thread;

    fn uri(name: &str) -> Url {
        Url::parse(&format!("file:///work/app/{name}")).unwrap()
    }

    fn record(uri: &Url, code: &str, line: u32, severity: DiagnosticSeverity) -> DiagnosticRecord {
        DiagnosticRecord::new(
            uri.clone(),
            code,
            format!("finding ({code})"),
            severity,
            TextRange::new(Position::new(line, 0), Position::new(line, 10)),
        )
    }

    #[test]
    fn test_unknown_document() {
        let reconciler = DiagnosticsReconciler::new();
        let unknown = uri("missing.cs");

        assert!(reconciler.query(&unknown, true, WorkspaceSizeClass::Normal).is_empty());
        assert_eq!(reconciler.state(&unknown), AnalysisState::Unanalyzed);
        assert!(reconciler.documents().is_empty());
    }

    #[test]
    fn test_ingest_creates_document() {
        let reconciler = DiagnosticsReconciler::new();
        let doc = uri("diagnostics.cs");

        reconciler.ingest(&doc, vec![record(&doc, "CS1002", 1, DiagnosticSeverity::Error)]);

        assert_eq!(reconciler.state(&doc), AnalysisState::HasResults);
        assert_eq!(reconciler.query(&doc, false, WorkspaceSizeClass::Normal).len(), 1);
        assert_eq!(reconciler.documents(), vec![doc]);
    }

    #[test]
    fn test_last_batch_wins() {
        let reconciler = DiagnosticsReconciler::new();
        let doc = uri("diagnostics.cs");

        reconciler.ingest(
            &doc,
            vec![
                record(&doc, "CS1002", 1, DiagnosticSeverity::Error),
                record(&doc, "CS0168", 2, DiagnosticSeverity::Warning),
            ],
        );
        reconciler.ingest(&doc, vec![record(&doc, "CS0103", 5, DiagnosticSeverity::Error)]);

        let visible = reconciler.query(&doc, true, WorkspaceSizeClass::Normal);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "CS0103");

        reconciler.ingest(&doc, Vec::new());
        assert!(reconciler.query(&doc, true, WorkspaceSizeClass::Normal).is_empty());
        assert_eq!(reconciler.state(&doc), AnalysisState::HasResults);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let reconciler = DiagnosticsReconciler::new();
        let doc = uri("diagnostics.cs");
        let mut duplicate = record(&doc, "CS1002", 1, DiagnosticSeverity::Error);
        duplicate.message = "second copy".to_string();

        reconciler.ingest(
            &doc,
            vec![
                record(&doc, "CS1002", 1, DiagnosticSeverity::Error),
                duplicate,
                record(&doc, "CS1002", 3, DiagnosticSeverity::Error),
            ],
        );

        let visible = reconciler.query(&doc, true, WorkspaceSizeClass::Normal);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].message, "finding (CS1002)");
        assert_eq!(visible[1].range.start.line, 3);
    }

    #[test]
    fn test_unnecessary_tagging() {
        let reconciler = DiagnosticsReconciler::new();
        let doc = uri("diagnostics.cs");

        reconciler.ingest(
            &doc,
            vec![
                record(&doc, "CS8019", 0, DiagnosticSeverity::Hidden),
                record(&doc, "IDE0059", 4, DiagnosticSeverity::Info),
                record(&doc, "CS0618", 6, DiagnosticSeverity::Warning),
            ],
        );

        let visible = reconciler.query(&doc, true, WorkspaceSizeClass::Normal);
        let find = |code: &str| visible.iter().find(|r| r.code == code).unwrap();

        assert!(find("CS8019").has_tag(DiagnosticTag::Unnecessary));
        assert!(find("IDE0059").has_tag(DiagnosticTag::Unnecessary));
        assert!(find("CS0618").has_tag(DiagnosticTag::Deprecated));
    }

    #[test]
    fn test_hidden_suppression() {
        let doc = uri("diagnostics.cs");
        let batch = || {
            vec![
                record(&doc, "CS8019", 0, DiagnosticSeverity::Hidden),
                record(&doc, "IDE0001", 1, DiagnosticSeverity::Hidden),
            ]
        };

        let suppressing = DiagnosticsReconciler::new();
        suppressing.ingest(&doc, batch());
        let visible = suppressing.query(&doc, true, WorkspaceSizeClass::Normal);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "CS8019");

        let keeping = DiagnosticsReconciler::from_config(&DiagnosticsConfig {
            suppress_hidden_diagnostics: false,
            ..DiagnosticsConfig::default()
        });
        keeping.ingest(&doc, batch());
        assert_eq!(keeping.query(&doc, true, WorkspaceSizeClass::Normal).len(), 2);
    }

    #[test]
    fn test_large_workspace_hides_closed_documents() {
        let reconciler = DiagnosticsReconciler::new();
        let open = uri("diagnostics.cs");
        let closed = uri("secondaryFileDiagnostics.cs");

        reconciler.ingest(&open, vec![record(&open, "CS1002", 1, DiagnosticSeverity::Error)]);
        reconciler.ingest(&closed, vec![record(&closed, "CS1002", 1, DiagnosticSeverity::Error)]);

        assert_eq!(reconciler.query(&open, true, WorkspaceSizeClass::Large).len(), 1);
        assert!(reconciler.query(&closed, false, WorkspaceSizeClass::Large).is_empty());

        // Records are retained, so opening the document shows them without re-analysis
        assert_eq!(reconciler.query(&closed, true, WorkspaceSizeClass::Large).len(), 1);
        assert_eq!(reconciler.query(&closed, false, WorkspaceSizeClass::Normal).len(), 1);
    }

    #[test]
    fn test_begin_analysis_keeps_previous_results() {
        let reconciler = DiagnosticsReconciler::new();
        let doc = uri("diagnostics.cs");

        reconciler.begin_analysis(&doc);
        assert_eq!(reconciler.state(&doc), AnalysisState::Analyzing);
        assert!(reconciler.query(&doc, true, WorkspaceSizeClass::Normal).is_empty());

        reconciler.ingest(&doc, vec![record(&doc, "CS1002", 1, DiagnosticSeverity::Error)]);
        reconciler.begin_analysis(&doc);

        assert_eq!(reconciler.state(&doc), AnalysisState::Analyzing);
        assert_eq!(reconciler.query(&doc, true, WorkspaceSizeClass::Normal).len(), 1);
    }

    #[test]
    fn test_ingest_message() {
        let reconciler = DiagnosticsReconciler::new();
        let path = std::env::temp_dir().join("testRoot").join("Program.cs");
        let message = DiagnosticMessage {
            results: vec![
                DiagnosticResult {
                    file_name: path.display().to_string(),
                    quick_fixes: vec![DiagnosticLocation {
                        id: "CS8019".to_string(),
                        text: "Unnecessary using directive. (CS8019)".to_string(),
                        log_level: "Hidden".to_string(),
                        end_column: 13,
                        ..DiagnosticLocation::default()
                    }],
                },
                DiagnosticResult {
                    file_name: "relative/File.cs".to_string(),
                    quick_fixes: Vec::new(),
                },
            ],
        };

        assert_eq!(reconciler.ingest_message(&message), 1);

        let doc = Url::from_file_path(&path).unwrap();
        let visible = reconciler.query(&doc, true, WorkspaceSizeClass::Normal);
        assert_eq!(visible.len(), 1);
        assert!(visible[0].message.contains("CS8019"));
        assert!(visible[0].has_tag(DiagnosticTag::Unnecessary));
    }

    #[test]
    fn test_concurrent_readers_never_see_partial_batches() {
        let reconciler = Arc::new(DiagnosticsReconciler::new());
        let doc = uri("diagnostics.cs");
        let batch_size = 50u32;

        let writer = {
            let reconciler = Arc::clone(&reconciler);
            let doc = doc.clone();
            thread::spawn(move || {
                for round in 0..200u32 {
                    let batch = (0..batch_size)
                        .map(|line| {
                            record(&doc, &format!("R{round}"), line, DiagnosticSeverity::Error)
                        })
                        .collect();
                    reconciler.ingest(&doc, batch);
                }
            })
        };

        for _ in 0..200 {
            let visible = reconciler.query(&doc, true, WorkspaceSizeClass::Normal);
            if visible.is_empty() {
                continue;
            }
            assert_eq!(visible.len(), batch_size as usize);
            assert!(visible.iter().all(|r| r.code == visible[0].code));
        }

        writer.join().unwrap();
    }
}
