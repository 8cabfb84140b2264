//! tasks.json documents

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::paths::ResolvedPath;

/// Forces the compiler to report absolute paths so problem matchers can locate files.
pub const GENERATE_FULL_PATHS_ARG: &str = "/property:GenerateFullPaths=true";
/// Drops the build summary so every error is reported exactly once.
pub const NO_SUMMARY_ARG: &str = "/consoleloggerparameters:NoSummary";
pub const MS_COMPILE_PROBLEM_MATCHER: &str = "$msCompile";
pub const TASKS_SCHEMA_VERSION: &str = "2.0.0";

pub const BUILD_TASK_LABEL: &str = "build";
pub const PUBLISH_TASK_LABEL: &str = "publish";
pub const WATCH_TASK_LABEL: &str = "watch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub label: String,
    pub command: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub args: Vec<String>,
    pub problem_matcher: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TasksDocument {
    pub version: String,
    pub tasks: Vec<TaskEntry>,
}

impl TasksDocument {
    pub fn new(tasks: Vec<TaskEntry>) -> Self {
        Self {
            version: TASKS_SCHEMA_VERSION.to_string(),
            tasks,
        }
    }

    pub fn task(&self, label: &str) -> Option<&TaskEntry> {
        self.tasks.iter().find(|task| task.label == label)
    }
}

fn process_task(label: &str, command: &str, mut args: Vec<String>) -> TaskEntry {
    args.push(GENERATE_FULL_PATHS_ARG.to_string());
    args.push(NO_SUMMARY_ARG.to_string());

    TaskEntry {
        label: label.to_string(),
        command: command.to_string(),
        task_type: "process".to_string(),
        args,
        problem_matcher: MS_COMPILE_PROBLEM_MATCHER.to_string(),
    }
}

pub fn build_task(command: &str, project_file: &ResolvedPath) -> TaskEntry {
    process_task(
        BUILD_TASK_LABEL,
        command,
        vec!["build".to_string(), project_file.to_string()],
    )
}

pub fn publish_task(command: &str, project_file: &ResolvedPath) -> TaskEntry {
    process_task(
        PUBLISH_TASK_LABEL,
        command,
        vec!["publish".to_string(), project_file.to_string()],
    )
}

pub fn watch_task(command: &str, project_file: &ResolvedPath) -> TaskEntry {
    process_task(
        WATCH_TASK_LABEL,
        command,
        vec![
            "watch".to_string(),
            "run".to_string(),
            "--project".to_string(),
            project_file.to_string(),
        ],
    )
}
