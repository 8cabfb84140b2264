use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AssetsConfig {
    /// Build configuration used for the default output directory (`bin/<configuration>/...`).
    pub configuration: String,
    /// Executable invoked by the generated tasks.
    pub build_command: String,
    /// Preferred target framework short name for multi-targeting projects.
    pub target_framework: Option<String>,
    /// Append an attach-to-process configuration when writing launch.json.
    pub include_attach: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            configuration: "Debug".to_string(),
            build_command: "dotnet".to_string(),
            target_framework: None,
            include_attach: true,
        }
    }
}
