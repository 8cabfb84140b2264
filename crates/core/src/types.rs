use std::path::PathBuf;

use thiserror::Error;

/// The main error type for asset generation
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    /// The build-information service reported no projects.
    #[error("Could not locate .NET project information; no projects were reported for the workspace")]
    ConfigurationUnavailable,

    #[error("Workspace information file not found: {}", .0.display())]
    MissingWorkspaceInformation(PathBuf),

    #[error("Startup project index {index} is out of range ({count} project(s) available)")]
    InvalidSelection { index: usize, count: usize },

    #[error("No startup project has been selected")]
    NoStartupProject,

    #[error("Project '{}' does not report a target framework", .0.display())]
    MissingTargetFramework(PathBuf),
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
