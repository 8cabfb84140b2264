//! Configuration parsing for `.assetgen.yml`

pub mod assets;
pub mod diagnostics;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::configs::assets::AssetsConfig;
use crate::configs::diagnostics::DiagnosticsConfig;
use crate::types::{AssetError, AssetResult};

/// File name of the optional configuration file at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".assetgen.yml";

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ToolConfig {
    pub assets: AssetsConfig,
    pub diagnostics: DiagnosticsConfig,
}

pub fn parse_tool_config(yaml_str: &str) -> AssetResult<ToolConfig> {
    // An empty file is a valid, all-defaults configuration
    if yaml_str.trim().is_empty() {
        return Ok(ToolConfig::default());
    }
    let config: ToolConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Load `.assetgen.yml` from the workspace root, falling back to defaults when it is absent.
pub fn load_tool_config(workspace_root: &Path) -> AssetResult<ToolConfig> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(ToolConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    parse_tool_config(&content).map_err(|e| {
        AssetError::Config(format!(
            "Failed to parse config {}: {}",
            config_path.display(),
            e
        ))
    })
}

/// JSON schema of the configuration file.
pub fn tool_config_schema() -> AssetResult<String> {
    let schema = schemars::schema_for!(ToolConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
