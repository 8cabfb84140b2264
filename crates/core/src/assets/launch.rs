//! launch.json configurations
//!
//! Field names (`type`, `request`, `program`, `cwd`, `hosted`, ...) are read by the debug
//! adapters and must not change.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assets::tasks::BUILD_TASK_LABEL;
use crate::assets::ProgramLaunchType;
use crate::paths::ResolvedPath;
use crate::target_framework::TargetFramework;

pub const CORECLR_DEBUG_TYPE: &str = "coreclr";
pub const BLAZOR_DEBUG_TYPE: &str = "blazorwasm";
pub const LAUNCH_SCHEMA_VERSION: &str = "0.2.0";

pub const CONSOLE_CONFIGURATION_NAME: &str = ".NET Core Launch (console)";
pub const WEB_CONFIGURATION_NAME: &str = ".NET Core Launch (web)";
pub const BLAZOR_STANDALONE_CONFIGURATION_NAME: &str =
    "Launch and Debug Standalone Blazor WebAssembly App";
pub const BLAZOR_HOSTED_CONFIGURATION_NAME: &str = "Launch and Debug Hosted Blazor WebAssembly App";
pub const ATTACH_CONFIGURATION_NAME: &str = ".NET Core Attach";

const SERVER_READY_PATTERN: &str = r"\bNow listening on:\s+(https?://\S+)";

/// A configuration launched through the CoreCLR debugger (console and web apps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessLaunch {
    pub name: String,
    #[serde(rename = "type")]
    pub debug_type: String,
    pub request: String,
    pub pre_launch_task: String,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: String,
    pub stop_at_entry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_ready_action: Option<ServerReadyAction>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub source_file_map: BTreeMap<String, String>,
}

/// Opens the browser once the web host prints its listening address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerReadyAction {
    pub action: String,
    pub pattern: String,
}

/// A configuration handled by the Blazor WebAssembly debug adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlazorLaunch {
    pub name: String,
    #[serde(rename = "type")]
    pub debug_type: String,
    pub request: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub cwd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub debug_type: String,
    pub request: String,
    pub process_id: String,
}

/// One entry of a launch document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LaunchConfiguration {
    Console(ProcessLaunch),
    Web(ProcessLaunch),
    BlazorWebAssemblyStandalone(BlazorLaunch),
    BlazorWebAssemblyHosted(BlazorLaunch),
    Attach(AttachConfiguration),
}

impl LaunchConfiguration {
    /// The launch type this configuration was generated for; `None` for attach.
    pub fn launch_type(&self) -> Option<ProgramLaunchType> {
        match self {
            Self::Console(_) => Some(ProgramLaunchType::Console),
            Self::Web(_) => Some(ProgramLaunchType::Web),
            Self::BlazorWebAssemblyStandalone(_) => {
                Some(ProgramLaunchType::BlazorWebAssemblyStandalone)
            }
            Self::BlazorWebAssemblyHosted(_) => Some(ProgramLaunchType::BlazorWebAssemblyHosted),
            Self::Attach(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Console(launch) | Self::Web(launch) => &launch.name,
            Self::BlazorWebAssemblyStandalone(launch) | Self::BlazorWebAssemblyHosted(launch) => {
                &launch.name
            }
            Self::Attach(attach) => &attach.name,
        }
    }

    pub fn debug_type(&self) -> &str {
        match self {
            Self::Console(launch) | Self::Web(launch) => &launch.debug_type,
            Self::BlazorWebAssemblyStandalone(launch) | Self::BlazorWebAssemblyHosted(launch) => {
                &launch.debug_type
            }
            Self::Attach(attach) => &attach.debug_type,
        }
    }

    pub fn program(&self) -> Option<&str> {
        match self {
            Self::Console(launch) | Self::Web(launch) => Some(&launch.program),
            Self::BlazorWebAssemblyStandalone(launch) | Self::BlazorWebAssemblyHosted(launch) => {
                launch.program.as_deref()
            }
            Self::Attach(_) => None,
        }
    }

    pub fn cwd(&self) -> Option<&str> {
        match self {
            Self::Console(launch) | Self::Web(launch) => Some(&launch.cwd),
            Self::BlazorWebAssemblyStandalone(launch) | Self::BlazorWebAssemblyHosted(launch) => {
                Some(&launch.cwd)
            }
            Self::Attach(_) => None,
        }
    }
}

/// A complete launch.json document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchDocument {
    pub version: String,
    pub configurations: Vec<LaunchConfiguration>,
}

impl LaunchDocument {
    pub fn new(configurations: Vec<LaunchConfiguration>) -> Self {
        Self {
            version: LAUNCH_SCHEMA_VERSION.to_string(),
            configurations,
        }
    }
}

fn process_launch(name: &str, program: &ResolvedPath, cwd: &ResolvedPath) -> ProcessLaunch {
    ProcessLaunch {
        name: name.to_string(),
        debug_type: CORECLR_DEBUG_TYPE.to_string(),
        request: "launch".to_string(),
        pre_launch_task: BUILD_TASK_LABEL.to_string(),
        program: program.to_string(),
        args: Vec::new(),
        cwd: cwd.to_string(),
        stop_at_entry: false,
        console: None,
        server_ready_action: None,
        env: BTreeMap::new(),
        source_file_map: BTreeMap::new(),
    }
}

pub fn console_configuration(program: &ResolvedPath, cwd: &ResolvedPath) -> LaunchConfiguration {
    let mut launch = process_launch(CONSOLE_CONFIGURATION_NAME, program, cwd);
    launch.console = Some("internalConsole".to_string());
    LaunchConfiguration::Console(launch)
}

/// Web apps open the browser when ready. Runtime-compiled Razor views need a source map,
/// which .NET 5 and later no longer use by default.
pub fn web_configuration(
    program: &ResolvedPath,
    cwd: &ResolvedPath,
    framework: Option<&TargetFramework>,
) -> LaunchConfiguration {
    let mut launch = process_launch(WEB_CONFIGURATION_NAME, program, cwd);
    launch.server_ready_action = Some(ServerReadyAction {
        action: "openExternally".to_string(),
        pattern: SERVER_READY_PATTERN.to_string(),
    });
    launch.env.insert(
        "ASPNETCORE_ENVIRONMENT".to_string(),
        "Development".to_string(),
    );
    if !framework.is_some_and(|f| f.is_at_least(5, 0)) {
        launch
            .source_file_map
            .insert("/Views".to_string(), cwd.join("Views").to_string());
    }
    LaunchConfiguration::Web(launch)
}

/// Standalone apps are served by the adapter's dev server, so there is no program to start.
pub fn blazor_standalone_configuration(cwd: &ResolvedPath) -> LaunchConfiguration {
    LaunchConfiguration::BlazorWebAssemblyStandalone(BlazorLaunch {
        name: BLAZOR_STANDALONE_CONFIGURATION_NAME.to_string(),
        debug_type: BLAZOR_DEBUG_TYPE.to_string(),
        request: "launch".to_string(),
        hosted: None,
        program: None,
        cwd: cwd.to_string(),
    })
}

pub fn blazor_hosted_configuration(
    program: &ResolvedPath,
    cwd: &ResolvedPath,
) -> LaunchConfiguration {
    LaunchConfiguration::BlazorWebAssemblyHosted(BlazorLaunch {
        name: BLAZOR_HOSTED_CONFIGURATION_NAME.to_string(),
        debug_type: BLAZOR_DEBUG_TYPE.to_string(),
        request: "launch".to_string(),
        hosted: Some(true),
        program: Some(program.to_string()),
        cwd: cwd.to_string(),
    })
}

pub fn attach_configuration() -> LaunchConfiguration {
    LaunchConfiguration::Attach(AttachConfiguration {
        name: ATTACH_CONFIGURATION_NAME.to_string(),
        debug_type: CORECLR_DEBUG_TYPE.to_string(),
        request: "attach".to_string(),
        process_id: "${command:pickProcess}".to_string(),
    })
}
