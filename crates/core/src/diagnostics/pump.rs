use std::sync::Arc;

use assetgen_protocol::DiagnosticMessage;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

use crate::diagnostics::reconciler::DiagnosticsReconciler;
use crate::diagnostics::record::DiagnosticRecord;

/// Something the analysis engine pushed.
#[derive(Debug, Clone)]
pub enum DiagnosticsEvent {
    AnalysisStarted(Url),
    Batch {
        uri: Url,
        records: Vec<DiagnosticRecord>,
    },
    Message(DiagnosticMessage),
}

/// Apply events to `reconciler` until every sender is dropped.
///
/// The returned handle resolves to the number of events applied.
pub fn spawn_ingest_loop(
    reconciler: Arc<DiagnosticsReconciler>,
    mut events: mpsc::Receiver<DiagnosticsEvent>,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut applied = 0;
        while let Some(event) = events.recv().await {
            match event {
                DiagnosticsEvent::AnalysisStarted(uri) => reconciler.begin_analysis(&uri),
                DiagnosticsEvent::Batch { uri, records } => reconciler.ingest(&uri, records),
                DiagnosticsEvent::Message(message) => {
                    reconciler.ingest_message(&message);
                }
            }
            applied += 1;
        }
        tracing::debug!(applied, "Diagnostics channel closed");
        applied
    })
}
