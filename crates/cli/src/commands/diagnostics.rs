use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use assetgen_core::asset_manager::{AssetManager, AssetManagerConfig};
use assetgen_core::configs::load_tool_config;
use assetgen_core::AssetError;
use assetgen_core::diagnostics::{
    spawn_ingest_loop, DiagnosticSeverity, DiagnosticTag, DiagnosticsEvent,
    DiagnosticsReconciler, WorkspaceSizeClass,
};
use assetgen_core::paths::ResolvedPath;
use assetgen_protocol::DiagnosticMessage;
use colored::*;
use tokio::sync::mpsc;
use url::Url;

const CHANNEL_CAPACITY: usize = 64;

pub async fn execute(
    workspace: &Path,
    workspace_info: Option<&Path>,
    input: &Path,
    open: &[PathBuf],
    large: bool,
) -> Result<()> {
    let root = std::env::current_dir()?.join(workspace);
    let (reconciler, size_class) = setup(&root, workspace_info)?;
    let size_class = if large {
        WorkspaceSizeClass::Large
    } else {
        size_class
    };

    let reconciler = Arc::new(reconciler);
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let ingest = spawn_ingest_loop(Arc::clone(&reconciler), rx);

    let content = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    for (line_number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let message: DiagnosticMessage = serde_json::from_str(line).with_context(|| {
            format!("Invalid diagnostics message on line {}", line_number + 1)
        })?;
        tx.send(DiagnosticsEvent::Message(message))
            .await
            .map_err(|_| anyhow::anyhow!("Diagnostics ingest loop stopped unexpectedly"))?;
    }
    drop(tx);

    let applied = ingest.await.context("Diagnostics ingest loop failed")?;
    tracing::debug!(applied, "Replayed diagnostics messages");

    let open_documents = open
        .iter()
        .map(|path| {
            Url::from_file_path(root.join(path))
                .map_err(|_| anyhow::anyhow!("Invalid document path: {}", path.display()))
        })
        .collect::<Result<HashSet<Url>>>()?;

    print_documents(&reconciler, &root, &open_documents, size_class);
    Ok(())
}

/// Full workspace information gives the size class; without it only the config is used.
fn setup(
    root: &Path,
    workspace_info: Option<&Path>,
) -> Result<(DiagnosticsReconciler, WorkspaceSizeClass)> {
    match AssetManager::new(AssetManagerConfig {
        workspace_root: root.to_path_buf(),
        workspace_info_path: workspace_info.map(Path::to_path_buf),
    }) {
        Ok(manager) => Ok((manager.diagnostics_reconciler(), manager.size_class())),
        Err(AssetError::MissingWorkspaceInformation(path)) => {
            tracing::warn!(
                path = %path.display(),
                "No workspace information; assuming a normal-sized workspace"
            );
            let config = load_tool_config(root)?;
            Ok((
                DiagnosticsReconciler::from_config(&config.diagnostics),
                WorkspaceSizeClass::Normal,
            ))
        }
        Err(e) => Err(anyhow::anyhow!("Failed to initialize workspace: {}", e)),
    }
}

fn print_documents(
    reconciler: &DiagnosticsReconciler,
    root: &Path,
    open_documents: &HashSet<Url>,
    size_class: WorkspaceSizeClass,
) {
    let documents = reconciler.documents();
    println!(
        "{} ({} documents, {:?} workspace)",
        "Diagnostics".bold().underline(),
        documents.len(),
        size_class
    );

    for uri in &documents {
        let is_open = open_documents.contains(uri);
        let name = uri
            .to_file_path()
            .map(|path| ResolvedPath::resolve(&path, root).to_string())
            .unwrap_or_else(|_| uri.to_string());
        let open_marker = if is_open { " [open]" } else { "" };
        println!("{}{}", name.blue().bold(), open_marker.green());

        if !size_class.is_visible(is_open) {
            println!("  {}", "hidden: large workspace and document not open".dimmed());
            continue;
        }

        let records = reconciler.query(uri, is_open, size_class);
        if records.is_empty() {
            println!("  {}", "No diagnostics".dimmed());
            continue;
        }

        for record in &*records {
            let severity = match record.severity {
                DiagnosticSeverity::Error => record.severity.to_string().red(),
                DiagnosticSeverity::Warning => record.severity.to_string().yellow(),
                DiagnosticSeverity::Info | DiagnosticSeverity::Hidden => {
                    record.severity.to_string().dimmed()
                }
            };
            let tags: Vec<&str> = record
                .tags
                .iter()
                .map(|tag| match tag {
                    DiagnosticTag::Unnecessary => "unnecessary",
                    DiagnosticTag::Deprecated => "deprecated",
                })
                .collect();
            let tags = if tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", tags.join(", "))
            };

            println!(
                "  {} {} {}: {}{}",
                record.range,
                severity,
                record.code.bold(),
                record.message,
                tags.dimmed()
            );
        }
    }
}
