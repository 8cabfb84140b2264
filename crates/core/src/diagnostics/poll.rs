use std::time::Duration;

use tokio::time::Instant;

/// Call `sample` every `interval` until `predicate` accepts its value or `timeout` elapses.
///
/// Returns the last value observed either way; running out of time is not an error.
pub async fn poll_until<T, F, P>(
    timeout: Duration,
    interval: Duration,
    mut sample: F,
    mut predicate: P,
) -> T
where
    F: FnMut() -> T,
    P: FnMut(&T) -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        let value = sample();
        if predicate(&value) || Instant::now() >= deadline {
            return value;
        }
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use url::Url;

    use crate::diagnostics::pump::{spawn_ingest_loop, DiagnosticsEvent};
    use crate::diagnostics::reconciler::DiagnosticsReconciler;
    use crate::diagnostics::record::{DiagnosticRecord, DiagnosticSeverity, TextRange};
    use crate::diagnostics::size::WorkspaceSizeClass;

    #[tokio::test]
    async fn test_returns_once_predicate_holds() {
        let calls = AtomicUsize::new(0);
        let value = poll_until(
            Duration::from_secs(5),
            Duration::from_millis(1),
            || calls.fetch_add(1, Ordering::SeqCst) + 1,
            |count| *count >= 3,
        )
        .await;

        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_timeout_returns_last_value() {
        let calls = AtomicUsize::new(0);
        let value = poll_until(
            Duration::from_millis(20),
            Duration::from_millis(5),
            || calls.fetch_add(1, Ordering::SeqCst) + 1,
            |_| false,
        )
        .await;

        assert!(value >= 1);
        assert_eq!(value, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_polls_reconciler_until_results_arrive() {
        let reconciler = Arc::new(DiagnosticsReconciler::new());
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        let handle = spawn_ingest_loop(Arc::clone(&reconciler), rx);
        let doc = Url::parse("file:///work/app/diagnostics.cs").unwrap();

        let producer = {
            let doc = doc.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                let record = DiagnosticRecord::new(
                    doc.clone(),
                    "CS1002",
                    "; expected",
                    DiagnosticSeverity::Error,
                    TextRange::default(),
                );
                tx.send(DiagnosticsEvent::Batch {
                    uri: doc,
                    records: vec![record],
                })
                .await
                .unwrap();
            })
        };

        let visible = poll_until(
            Duration::from_secs(10),
            Duration::from_millis(5),
            || reconciler.query(&doc, true, WorkspaceSizeClass::Normal),
            |records| !records.is_empty(),
        )
        .await;

        assert_eq!(visible.len(), 1);
        producer.await.unwrap();
        handle.await.unwrap();
    }
}
