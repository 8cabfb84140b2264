//! Diagnostics reconciliation
//!
//! The analysis engine pushes whole-document snapshots of its findings. The
//! [`DiagnosticsReconciler`] keeps the latest snapshot per document, tags redundant and
//! obsolete code, and answers read-time visibility queries that depend on whether a document
//! is open and how large the workspace is.

pub mod poll;
pub mod pump;
pub mod reconciler;
pub mod record;
pub mod size;
pub mod tagging;

pub use poll::poll_until;
pub use pump::{spawn_ingest_loop, DiagnosticsEvent};
pub use reconciler::{AnalysisState, DiagnosticsReconciler};
pub use record::{DiagnosticRecord, DiagnosticSeverity, DiagnosticTag, Position, TextRange};
pub use size::WorkspaceSizeClass;
pub use tagging::TagRules;
