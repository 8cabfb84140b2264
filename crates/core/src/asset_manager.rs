//! High-level asset management interface
//!
//! This module provides the [`AssetManager`], the primary interface for everything the CLI
//! does with a workspace. It loads `.assetgen.yml` and the build-information response,
//! adapts the project model, generates tasks.json and launch.json content, and writes it
//! into the workspace's `.vscode` directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use assetgen_core::asset_manager::{AssetManager, AssetManagerConfig, GenerateOptions};
//! use std::path::PathBuf;
//!
//! # fn example() -> assetgen_core::AssetResult<()> {
//! let manager = AssetManager::new(AssetManagerConfig {
//!     workspace_root: PathBuf::from("."),
//!     workspace_info_path: None,
//! })?;
//!
//! // List all projects
//! let projects = manager.list_projects();
//!
//! // Generate for the default startup project and write, merging with existing files
//! let assets = manager.generate(&GenerateOptions::default())?;
//! manager.write_assets(&assets, false)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use assetgen_protocol::{WorkspaceFolder, WorkspaceInformationResponse};
use serde_json::Value;

use crate::assets::jsonc::parse_jsonc;
use crate::assets::launch::LaunchDocument;
use crate::assets::merge::{merge_launch, merge_tasks};
use crate::assets::{AssetGenerator, ProgramLaunchType};
use crate::configs::{load_tool_config, ToolConfig};
use crate::diagnostics::{DiagnosticsReconciler, WorkspaceSizeClass};
use crate::paths::ResolvedPath;
use crate::project::{adapt_workspace, WorkspaceInfo};
use crate::results::{
    GeneratedAssets, ProjectListResult, ProjectSummary, WriteAction, WriteReport, WrittenFile,
};
use crate::types::{AssetError, AssetResult};

/// Default location of the build-information response, relative to the workspace root.
pub const WORKSPACE_INFO_FILE_NAME: &str = "workspace-info.json";
/// Editor settings directory the documents are written to.
pub const VSCODE_DIR_NAME: &str = ".vscode";
pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const LAUNCH_FILE_NAME: &str = "launch.json";

/// High-level manager that encapsulates all operations on one workspace
pub struct AssetManager {
    pub workspace_root: PathBuf,
    pub folder: WorkspaceFolder,
    pub workspace: WorkspaceInfo,
    pub config: ToolConfig,
}

/// Configuration for initializing an asset manager
pub struct AssetManagerConfig {
    pub workspace_root: PathBuf,
    /// Build-information response to read, relative to the current directory. Defaults to
    /// [`WORKSPACE_INFO_FILE_NAME`] under the root.
    pub workspace_info_path: Option<PathBuf>,
}

/// Choices for one generation run. Unset fields are derived from the workspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub startup_project: Option<usize>,
    pub launch_type: Option<ProgramLaunchType>,
}

impl AssetManager {
    /// Load configuration and project information for the workspace at `workspace_root`
    pub fn new(config: AssetManagerConfig) -> AssetResult<Self> {
        let workspace_root = absolute_path(&config.workspace_root)?;
        let tool_config = load_tool_config(&workspace_root)?;

        // An explicit path is taken relative to the current directory, like any CLI argument
        let info_path = match config.workspace_info_path {
            Some(path) => absolute_path(&path)?,
            None => workspace_root.join(WORKSPACE_INFO_FILE_NAME),
        };
        let response = Self::load_workspace_information(&info_path)?;

        Self::from_response(workspace_root, &response, tool_config)
    }

    /// Build a manager from an already-parsed response
    pub fn from_response(
        workspace_root: PathBuf,
        response: &WorkspaceInformationResponse,
        config: ToolConfig,
    ) -> AssetResult<Self> {
        let folder = WorkspaceFolder::from_path(&workspace_root).map_err(AssetError::Path)?;
        let workspace = adapt_workspace(response, &workspace_root, &config.assets)?;

        tracing::debug!(
            root = %workspace_root.display(),
            projects = workspace.projects.len(),
            "Loaded workspace"
        );

        Ok(Self {
            workspace_root,
            folder,
            workspace,
            config,
        })
    }

    fn load_workspace_information(path: &Path) -> AssetResult<WorkspaceInformationResponse> {
        if !path.exists() {
            return Err(AssetError::MissingWorkspaceInformation(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            AssetError::Config(format!(
                "Failed to parse workspace information {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// List all projects in the workspace
    pub fn list_projects(&self) -> ProjectListResult {
        let default_index = self.workspace.default_startup_index();
        let projects = self
            .workspace
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| ProjectSummary {
                index,
                path: ResolvedPath::resolve(&project.path, &self.workspace_root).to_string(),
                assembly_name: project.assembly_name.clone(),
                target_framework: project.framework().map(|f| f.short_name().to_string()),
                launch_type: ProgramLaunchType::for_project(project),
                is_launchable: project.is_launchable(),
                is_default: index == default_index,
            })
            .collect();

        ProjectListResult {
            solution_path: self.workspace.solution_path.clone(),
            projects,
            source_file_count: self.workspace.source_file_count(),
            size_class: self.size_class(),
        }
    }

    /// Generate tasks and launch documents for one startup project
    pub fn generate(&self, options: &GenerateOptions) -> AssetResult<GeneratedAssets> {
        let startup_index = options
            .startup_project
            .unwrap_or_else(|| self.workspace.default_startup_index());

        let mut generator = AssetGenerator::new(&self.workspace, &self.folder)?
            .with_config(self.config.assets.clone());
        generator.set_startup_project(startup_index)?;

        let launch_type = match options.launch_type {
            Some(launch_type) => launch_type,
            None => ProgramLaunchType::for_project(generator.startup_project()?),
        };

        let tasks = generator.create_tasks_configuration()?;
        let mut configurations = generator.create_launch_json_configurations(launch_type)?;
        if self.config.assets.include_attach {
            configurations.push(generator.create_attach_configuration());
        }

        tracing::info!(
            startup_project = startup_index,
            %launch_type,
            configurations = configurations.len(),
            "Generated assets"
        );

        Ok(GeneratedAssets {
            startup_project: startup_index,
            launch_type,
            tasks,
            launch: LaunchDocument::new(configurations),
        })
    }

    /// Write tasks.json and launch.json. Existing files are merged unless `force` is set.
    ///
    /// Both documents are read and merged before either is written, so a file that cannot be
    /// merged leaves the other one untouched.
    pub fn write_assets(&self, assets: &GeneratedAssets, force: bool) -> AssetResult<WriteReport> {
        let vscode_dir = self.vscode_dir();

        let tasks_path = vscode_dir.join(TASKS_FILE_NAME);
        let (existing, tasks_action) = Self::read_existing(&tasks_path, force)?;
        let tasks = merge_tasks(existing, &assets.tasks)?;

        let launch_path = vscode_dir.join(LAUNCH_FILE_NAME);
        let (existing, launch_action) = Self::read_existing(&launch_path, force)?;
        let launch = merge_launch(existing, &assets.launch)?;

        std::fs::create_dir_all(&vscode_dir)?;
        Self::write_document(&tasks_path, &tasks)?;
        Self::write_document(&launch_path, &launch)?;

        Ok(WriteReport {
            files: vec![
                WrittenFile {
                    path: tasks_path,
                    action: tasks_action,
                },
                WrittenFile {
                    path: launch_path,
                    action: launch_action,
                },
            ],
        })
    }

    /// Render the generated documents as they would be written to a fresh workspace
    pub fn render_assets(assets: &GeneratedAssets) -> AssetResult<(String, String)> {
        let tasks = serde_json::to_string_pretty(&assets.tasks)?;
        let launch = serde_json::to_string_pretty(&assets.launch)?;
        Ok((tasks, launch))
    }

    /// Size class from the workspace's source-file count and the configured threshold
    pub fn size_class(&self) -> WorkspaceSizeClass {
        WorkspaceSizeClass::classify(
            self.workspace.source_file_count(),
            self.config
                .diagnostics
                .max_project_file_count_for_diagnostic_analysis,
        )
    }

    /// A reconciler configured from the diagnostics section
    pub fn diagnostics_reconciler(&self) -> DiagnosticsReconciler {
        DiagnosticsReconciler::from_config(&self.config.diagnostics)
    }

    pub fn vscode_dir(&self) -> PathBuf {
        self.workspace_root.join(VSCODE_DIR_NAME)
    }

    fn read_existing(path: &Path, force: bool) -> AssetResult<(Option<Value>, WriteAction)> {
        if !path.exists() {
            return Ok((None, WriteAction::Created));
        }
        if force {
            return Ok((None, WriteAction::Overwritten));
        }

        let content = std::fs::read_to_string(path)?;
        let existing = parse_jsonc(&content).map_err(|e| {
            AssetError::Config(format!(
                "Cannot merge into {}: {}. Re-run with --force to overwrite it",
                path.display(),
                e
            ))
        })?;
        Ok((Some(existing), WriteAction::Merged))
    }

    fn write_document(path: &Path, document: &Value) -> AssetResult<()> {
        let mut content = serde_json::to_string_pretty(document)?;
        content.push('\n');
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "Wrote document");
        Ok(())
    }
}

fn absolute_path(path: &Path) -> AssetResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
