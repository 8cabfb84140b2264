//! Build-information wire types.
//!
//! This module contains the shapes returned by the build-information service:
//! - [`WorkspaceInformationResponse`] - Top-level answer to a workspace query
//! - [`MsBuildWorkspaceInformation`] - The solution and its projects
//! - [`MsBuildProject`] - One project as reported by the build system
//! - [`TargetFrameworkInfo`] - One entry of a project's target framework list
//! - [`WorkspaceFolder`] - The editor folder paths are resolved against

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Answer of the build-information service to a workspace query.
///
/// **Shape**: The service nests everything under an optional `MsBuild` section. The section
/// is absent while the service is still loading, or when the opened folder contains no
/// recognizable projects.
///
/// ```rust
/// # use assetgen_protocol::WorkspaceInformationResponse;
/// let empty: WorkspaceInformationResponse = serde_json::from_str("{}").unwrap();
/// assert!(empty.ms_build.is_none());
/// assert!(empty.projects().is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorkspaceInformationResponse {
    /// Solution and project information, when the build system produced any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_build: Option<MsBuildWorkspaceInformation>,
}

impl WorkspaceInformationResponse {
    /// Create a response holding the given solution information.
    #[must_use]
    pub fn new(ms_build: MsBuildWorkspaceInformation) -> Self {
        Self {
            ms_build: Some(ms_build),
        }
    }

    /// All reported projects, or an empty slice when the `MsBuild` section is missing.
    #[must_use]
    pub fn projects(&self) -> &[MsBuildProject] {
        self.ms_build
            .as_ref()
            .map(|info| info.projects.as_slice())
            .unwrap_or_default()
    }
}

/// The solution-level part of a [`WorkspaceInformationResponse`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MsBuildWorkspaceInformation {
    /// Path to the solution file. Empty when the folder was opened without a solution.
    pub solution_path: String,

    /// Projects in the order the build system loaded them.
    pub projects: Vec<MsBuildProject>,
}

/// One project as reported by the build-information service.
///
/// **Paths**: `path`, `target_path` and `output_path` are reported as the build system sees
/// them. They are usually absolute. A relative `path` is relative to the workspace folder,
/// while relative `target_path` and `output_path` values follow MSBuild and are relative to
/// the directory containing the project file.
///
/// **Empty strings**: the service uses empty strings rather than omitting fields, so an
/// empty `output_path` means "not reported", not "the current directory".
///
/// ```rust
/// # use assetgen_protocol::MsBuildProject;
/// let project: MsBuildProject = serde_json::from_str(r#"{
///     "Path": "/work/web/web.csproj",
///     "AssemblyName": "web",
///     "IsExe": true,
///     "IsWebProject": true,
///     "IsBlazorWebAssemblyHosted": true
/// }"#).unwrap();
///
/// assert!(project.is_web_project);
/// assert!(project.is_blazor_web_assembly_hosted);
/// assert!(!project.is_blazor_web_assembly_standalone);
/// assert!(project.output_path.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MsBuildProject {
    pub project_guid: String,

    /// Path to the project file (`.csproj`).
    pub path: String,

    /// Name of the assembly the project builds, without extension.
    pub assembly_name: String,

    /// Full path of the primary build output, when the build system evaluated it.
    pub target_path: String,

    /// The framework the build system evaluated the project for, if any.
    pub target_framework: String,

    /// Source files that belong to the project.
    pub source_files: Vec<String>,

    /// Frameworks the project targets, in declaration order.
    pub target_frameworks: Vec<TargetFrameworkInfo>,

    /// Output directory of the build, when reported.
    pub output_path: String,

    pub is_exe: bool,
    pub is_unity_project: bool,
    pub is_web_project: bool,
    pub is_blazor_web_assembly_hosted: bool,
    pub is_blazor_web_assembly_standalone: bool,
}

/// One entry of [`MsBuildProject::target_frameworks`].
///
/// Only `short_name` (for example `net8.0` or `netcoreapp3.1`) takes part in path
/// computation; the other names are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetFrameworkInfo {
    pub name: String,
    pub friendly_name: String,
    pub short_name: String,
}

impl TargetFrameworkInfo {
    /// Create an entry that only carries a short name.
    ///
    /// ```rust
    /// # use assetgen_protocol::TargetFrameworkInfo;
    /// let framework = TargetFrameworkInfo::with_short_name("net6.0");
    /// assert_eq!(framework.short_name, "net6.0");
    /// assert!(framework.name.is_empty());
    /// ```
    #[must_use]
    pub fn with_short_name(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            ..Self::default()
        }
    }
}

/// The editor workspace folder that generated paths are anchored to.
///
/// **Purpose**: Generated documents never contain the folder's absolute path. Paths under
/// the folder are written relative to a placeholder instead, which keeps the documents
/// portable between machines. The folder identifies which root that placeholder stands for.
///
/// ```rust
/// # use assetgen_protocol::WorkspaceFolder;
/// # use std::path::Path;
/// let root = std::env::temp_dir().join("testRoot");
/// let folder = WorkspaceFolder::from_path(&root).unwrap();
/// assert_eq!(folder.name, "testRoot");
/// assert_eq!(folder.root_path().as_deref(), Some(root.as_path()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// `file:` URI of the folder.
    pub uri: Url,

    /// Display name, normally the last path segment.
    pub name: String,

    /// Position of the folder in a multi-root workspace.
    pub index: usize,
}

impl WorkspaceFolder {
    /// Create a folder descriptor for an absolute directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute and therefore has no `file:` URI.
    pub fn from_path(root: &Path) -> Result<Self, String> {
        let uri = Url::from_directory_path(root)
            .map_err(|()| format!("Workspace folder '{}' is not an absolute path", root.display()))?;
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            uri,
            name,
            index: 0,
        })
    }

    /// Filesystem path of the folder, or `None` for non-`file:` URIs.
    #[must_use]
    pub fn root_path(&self) -> Option<PathBuf> {
        let path = self.uri.to_file_path().ok()?;
        // Directory URIs carry a trailing slash; compare and display without it.
        Some(path.components().collect())
    }
}
