//! Result types for asset manager operations

use std::fmt;
use std::path::PathBuf;

use crate::assets::launch::LaunchDocument;
use crate::assets::tasks::TasksDocument;
use crate::assets::ProgramLaunchType;
use crate::diagnostics::WorkspaceSizeClass;

/// A project as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Index usable as a startup selection
    pub index: usize,
    /// Project file, rendered relative to the workspace folder when possible
    pub path: String,
    pub assembly_name: String,
    pub target_framework: Option<String>,
    pub launch_type: ProgramLaunchType,
    pub is_launchable: bool,
    /// Selected when no startup project is given
    pub is_default: bool,
}

/// Result of listing the projects of a workspace
#[derive(Debug, Clone)]
pub struct ProjectListResult {
    pub solution_path: Option<PathBuf>,
    pub projects: Vec<ProjectSummary>,
    pub source_file_count: usize,
    pub size_class: WorkspaceSizeClass,
}

/// Generated documents for one startup project
#[derive(Debug, Clone)]
pub struct GeneratedAssets {
    pub startup_project: usize,
    pub launch_type: ProgramLaunchType,
    pub tasks: TasksDocument,
    pub launch: LaunchDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Merged,
    Overwritten,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Merged => "merged",
            Self::Overwritten => "overwritten",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub action: WriteAction,
}

/// Files touched by writing generated assets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub files: Vec<WrittenFile>,
}
