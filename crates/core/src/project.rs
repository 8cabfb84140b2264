//! Project model adapter
//!
//! Reduces the build-information service's [`WorkspaceInformationResponse`] to the flat
//! [`WorkspaceInfo`] the generator works with. All paths leave this module absolute.

use std::path::{Path, PathBuf};

use assetgen_protocol::{MsBuildProject, WorkspaceInformationResponse};

use crate::configs::assets::AssetsConfig;
use crate::target_framework::TargetFramework;
use crate::types::{AssetError, AssetResult};

/// A project reduced to what asset generation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Absolute path of the project file.
    pub path: PathBuf,
    pub assembly_name: String,
    /// Absolute path of the program to launch. `None` when no framework is known.
    pub output_path: Option<PathBuf>,
    /// Declared frameworks, in order.
    pub target_frameworks: Vec<TargetFramework>,
    /// Index into `target_frameworks` of the framework used for launching.
    pub selected_framework: Option<usize>,
    pub is_executable: bool,
    pub is_web_project: bool,
    pub is_blazor_standalone: bool,
    pub is_blazor_hosted: bool,
    pub source_file_count: usize,
}

impl ProjectDescriptor {
    /// Directory containing the project file.
    pub fn project_dir(&self) -> &Path {
        self.path.parent().unwrap_or(self.path.as_path())
    }

    pub fn framework(&self) -> Option<&TargetFramework> {
        self.selected_framework
            .and_then(|index| self.target_frameworks.get(index))
    }

    /// Executable and Blazor projects can be launched; plain libraries cannot.
    pub fn is_launchable(&self) -> bool {
        self.is_executable || self.is_blazor_standalone || self.is_blazor_hosted
    }
}

/// The adapted workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceInfo {
    pub solution_path: Option<PathBuf>,
    pub projects: Vec<ProjectDescriptor>,
}

impl WorkspaceInfo {
    /// Indices and descriptors of the launchable projects.
    pub fn executable_projects(&self) -> impl Iterator<Item = (usize, &ProjectDescriptor)> {
        self.projects
            .iter()
            .enumerate()
            .filter(|(_, project)| project.is_launchable())
    }

    /// First launchable project, or the first project when none is launchable.
    pub fn default_startup_index(&self) -> usize {
        self.executable_projects()
            .map(|(index, _)| index)
            .next()
            .unwrap_or(0)
    }

    /// Total number of source files across all projects.
    pub fn source_file_count(&self) -> usize {
        self.projects.iter().map(|p| p.source_file_count).sum()
    }
}

/// Adapt a build-information response, resolving relative paths against `workspace_root`.
pub fn adapt_workspace(
    response: &WorkspaceInformationResponse,
    workspace_root: &Path,
    config: &AssetsConfig,
) -> AssetResult<WorkspaceInfo> {
    let Some(ms_build) = response.ms_build.as_ref() else {
        return Err(AssetError::ConfigurationUnavailable);
    };
    if ms_build.projects.is_empty() {
        return Err(AssetError::ConfigurationUnavailable);
    }

    let solution_path = non_empty(&ms_build.solution_path)
        .map(|solution| workspace_root.join(solution));

    let projects = ms_build
        .projects
        .iter()
        .map(|project| adapt_project(project, workspace_root, config))
        .collect();

    Ok(WorkspaceInfo {
        solution_path,
        projects,
    })
}

fn adapt_project(
    project: &MsBuildProject,
    workspace_root: &Path,
    config: &AssetsConfig,
) -> ProjectDescriptor {
    let path = workspace_root.join(&project.path);
    let project_dir = path.parent().unwrap_or(workspace_root).to_path_buf();

    let mut target_frameworks: Vec<TargetFramework> = project
        .target_frameworks
        .iter()
        .filter(|framework| !framework.short_name.trim().is_empty())
        .map(|framework| TargetFramework::parse(&framework.short_name))
        .collect();
    if target_frameworks.is_empty() {
        if let Some(evaluated) = non_empty(&project.target_framework) {
            target_frameworks.push(TargetFramework::parse(evaluated));
        }
    }

    let selected_framework = select_framework(&target_frameworks, config.target_framework.as_deref());
    if selected_framework.is_none() {
        tracing::warn!(
            project = %path.display(),
            "Project reports no target framework; launch configurations cannot be generated for it"
        );
    }

    let output_path = selected_framework
        .and_then(|index| target_frameworks.get(index))
        .map(|framework| output_path_for(project, &project_dir, framework, config));

    ProjectDescriptor {
        path,
        assembly_name: project.assembly_name.clone(),
        output_path,
        target_frameworks,
        selected_framework,
        is_executable: project.is_exe,
        is_web_project: project.is_web_project,
        is_blazor_standalone: project.is_blazor_web_assembly_standalone,
        is_blazor_hosted: project.is_blazor_web_assembly_hosted,
        source_file_count: project.source_files.len(),
    }
}

/// First framework, unless a preference names one of the others.
fn select_framework(frameworks: &[TargetFramework], preferred: Option<&str>) -> Option<usize> {
    if frameworks.is_empty() {
        return None;
    }
    let preferred = preferred.map(TargetFramework::parse);
    let index = preferred
        .and_then(|preferred| frameworks.iter().position(|f| *f == preferred))
        .unwrap_or(0);
    Some(index)
}

/// Program path: the reported target path, else the reported output directory, else the
/// conventional `bin/<configuration>/<framework>` location under the project directory.
fn output_path_for(
    project: &MsBuildProject,
    project_dir: &Path,
    framework: &TargetFramework,
    config: &AssetsConfig,
) -> PathBuf {
    if let Some(target_path) = non_empty(&project.target_path) {
        return project_dir.join(target_path);
    }

    let extension = if project.is_exe && framework.is_net_framework() {
        "exe"
    } else {
        "dll"
    };
    let file_name = format!("{}.{}", project.assembly_name, extension);

    if let Some(output_dir) = non_empty(&project.output_path) {
        return project_dir.join(output_dir).join(file_name);
    }

    project_dir
        .join("bin")
        .join(&config.configuration)
        .join(framework.short_name())
        .join(file_name)
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
