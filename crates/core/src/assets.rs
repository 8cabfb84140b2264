//! Run/debug asset generation
//!
//! The [`AssetGenerator`] turns an adapted [`WorkspaceInfo`] into a tasks.json document and
//! launch.json configurations for one selected startup project. Generation is pure: nothing
//! here touches the filesystem.
//!
//! ```rust
//! use assetgen_core::assets::{AssetGenerator, ProgramLaunchType};
//! use assetgen_core::project::{ProjectDescriptor, WorkspaceInfo};
//! use assetgen_core::target_framework::TargetFramework;
//! use assetgen_protocol::WorkspaceFolder;
//!
//! # fn example() -> assetgen_core::AssetResult<()> {
//! let root = std::env::temp_dir().join("testRoot");
//! let workspace = WorkspaceInfo {
//!     solution_path: None,
//!     projects: vec![ProjectDescriptor {
//!         path: root.join("testApp.csproj"),
//!         assembly_name: "testApp".to_string(),
//!         output_path: Some(root.join("bin/Debug/net8.0/testApp.dll")),
//!         target_frameworks: vec![TargetFramework::parse("net8.0")],
//!         selected_framework: Some(0),
//!         is_executable: true,
//!         is_web_project: false,
//!         is_blazor_standalone: false,
//!         is_blazor_hosted: false,
//!         source_file_count: 1,
//!     }],
//! };
//! let folder = WorkspaceFolder::from_path(&root).map_err(assetgen_core::AssetError::Path)?;
//!
//! let mut generator = AssetGenerator::new(&workspace, &folder)?;
//! generator.set_startup_project(0)?;
//!
//! let tasks = generator.create_tasks_configuration()?;
//! assert_eq!(tasks.tasks[0].args[1], "${workspaceFolder}/testApp.csproj");
//!
//! let launch = generator.create_launch_json_configurations(ProgramLaunchType::Console)?;
//! assert_eq!(launch[0].program(), Some("${workspaceFolder}/bin/Debug/net8.0/testApp.dll"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod jsonc;
pub mod launch;
pub mod merge;
pub mod tasks;

use std::fmt;
use std::path::PathBuf;

use assetgen_protocol::WorkspaceFolder;

use crate::assets::launch::LaunchConfiguration;
use crate::assets::tasks::TasksDocument;
use crate::configs::assets::AssetsConfig;
use crate::paths::ResolvedPath;
use crate::project::{ProjectDescriptor, WorkspaceInfo};
use crate::types::{AssetError, AssetResult};

/// How the startup project is run under the debugger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramLaunchType {
    Console,
    Web,
    BlazorWebAssemblyStandalone,
    BlazorWebAssemblyHosted,
}

impl ProgramLaunchType {
    /// Pick the launch type from the project's flags. Blazor flags take precedence over web.
    pub fn for_project(project: &ProjectDescriptor) -> Self {
        if project.is_blazor_standalone {
            Self::BlazorWebAssemblyStandalone
        } else if project.is_blazor_hosted {
            Self::BlazorWebAssemblyHosted
        } else if project.is_web_project {
            Self::Web
        } else {
            Self::Console
        }
    }
}

impl fmt::Display for ProgramLaunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Console => "console",
            Self::Web => "web",
            Self::BlazorWebAssemblyStandalone => "blazor-standalone",
            Self::BlazorWebAssemblyHosted => "blazor-hosted",
        };
        f.write_str(label)
    }
}

/// Generates tasks.json and launch.json content for a workspace.
pub struct AssetGenerator<'a> {
    workspace: &'a WorkspaceInfo,
    workspace_root: PathBuf,
    config: AssetsConfig,
    startup_project: Option<usize>,
}

impl<'a> AssetGenerator<'a> {
    pub fn new(workspace: &'a WorkspaceInfo, folder: &WorkspaceFolder) -> AssetResult<Self> {
        if workspace.projects.is_empty() {
            return Err(AssetError::ConfigurationUnavailable);
        }

        let workspace_root = folder.root_path().ok_or_else(|| {
            AssetError::Path(format!("Workspace folder '{}' is not a local path", folder.uri))
        })?;

        Ok(Self {
            workspace,
            workspace_root,
            config: AssetsConfig::default(),
            startup_project: None,
        })
    }

    pub fn with_config(mut self, config: AssetsConfig) -> Self {
        self.config = config;
        self
    }

    /// Select the project that drives generation.
    pub fn set_startup_project(&mut self, index: usize) -> AssetResult<()> {
        let count = self.workspace.projects.len();
        if index >= count {
            return Err(AssetError::InvalidSelection { index, count });
        }

        tracing::debug!(
            index,
            project = %self.workspace.projects[index].path.display(),
            "Selected startup project"
        );
        self.startup_project = Some(index);
        Ok(())
    }

    pub fn startup_project(&self) -> AssetResult<&'a ProjectDescriptor> {
        let workspace = self.workspace;
        self.startup_project
            .and_then(|index| workspace.projects.get(index))
            .ok_or(AssetError::NoStartupProject)
    }

    /// Build, publish and watch tasks for the startup project.
    pub fn create_tasks_configuration(&self) -> AssetResult<TasksDocument> {
        let project = self.startup_project()?;
        let project_file = self.resolve(&project.path);
        let command = &self.config.build_command;

        tracing::debug!(target_path = %project_file, "Generating tasks configuration");

        Ok(TasksDocument::new(vec![
            tasks::build_task(command, &project_file),
            tasks::publish_task(command, &project_file),
            tasks::watch_task(command, &project_file),
        ]))
    }

    /// Launch configurations for the startup project, shaped for `launch_type`.
    pub fn create_launch_json_configurations(
        &self,
        launch_type: ProgramLaunchType,
    ) -> AssetResult<Vec<LaunchConfiguration>> {
        let project = self.startup_project()?;
        let cwd = self.resolve(project.project_dir());

        tracing::debug!(%launch_type, cwd = %cwd, "Generating launch configurations");

        let configuration = match launch_type {
            ProgramLaunchType::Console => {
                launch::console_configuration(&self.program_path(project)?, &cwd)
            }
            ProgramLaunchType::Web => {
                launch::web_configuration(&self.program_path(project)?, &cwd, project.framework())
            }
            ProgramLaunchType::BlazorWebAssemblyStandalone => {
                launch::blazor_standalone_configuration(&cwd)
            }
            ProgramLaunchType::BlazorWebAssemblyHosted => {
                launch::blazor_hosted_configuration(&self.program_path(project)?, &cwd)
            }
        };

        Ok(vec![configuration])
    }

    /// Attach-to-process configuration, independent of the startup project.
    pub fn create_attach_configuration(&self) -> LaunchConfiguration {
        launch::attach_configuration()
    }

    fn program_path(&self, project: &ProjectDescriptor) -> AssetResult<ResolvedPath> {
        project
            .output_path
            .as_deref()
            .map(|output| self.resolve(output))
            .ok_or_else(|| AssetError::MissingTargetFramework(project.path.clone()))
    }

    fn resolve(&self, path: &std::path::Path) -> ResolvedPath {
        ResolvedPath::resolve(path, &self.workspace_root)
    }
}
