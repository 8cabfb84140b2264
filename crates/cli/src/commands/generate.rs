use anyhow::{Context, Result};
use assetgen_core::asset_manager::{AssetManager, GenerateOptions};
use colored::*;

pub fn execute(
    manager: &AssetManager,
    options: &GenerateOptions,
    force: bool,
    dry_run: bool,
) -> Result<()> {
    let assets = manager
        .generate(options)
        .context("Failed to generate assets")?;

    let project_name = manager
        .workspace
        .projects
        .get(assets.startup_project)
        .map(|project| project.assembly_name.as_str())
        .unwrap_or_default();
    println!(
        "{} {} ({})",
        "Generating assets for".bold(),
        project_name.cyan(),
        assets.launch_type
    );

    if dry_run {
        let (tasks, launch) = AssetManager::render_assets(&assets)?;
        println!("\n{}", "tasks.json".bold().underline());
        println!("{tasks}");
        println!("\n{}", "launch.json".bold().underline());
        println!("{launch}");
        return Ok(());
    }

    let report = manager
        .write_assets(&assets, force)
        .context("Failed to write assets")?;
    for file in &report.files {
        println!(
            "  {} {}",
            file.action.to_string().green(),
            file.path.display()
        );
    }

    Ok(())
}
