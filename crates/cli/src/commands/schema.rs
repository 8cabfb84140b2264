use anyhow::Result;
use assetgen_core::configs::tool_config_schema;

pub fn execute() -> Result<()> {
    println!("{}", tool_config_schema()?);
    Ok(())
}
