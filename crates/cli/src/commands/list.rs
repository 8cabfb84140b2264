use anyhow::Result;
use assetgen_core::asset_manager::AssetManager;
use colored::*;

pub fn execute(manager: &AssetManager) -> Result<()> {
    let result = manager.list_projects();

    println!("{}", "Projects".bold().underline());
    if let Some(solution) = &result.solution_path {
        println!("  {} {}", "Solution:".dimmed(), solution.display());
    }

    if result.projects.is_empty() {
        println!("  {}", "No projects found".dimmed());
        return Ok(());
    }

    for project in &result.projects {
        let marker = if project.is_default { "*" } else { " " };
        let framework = project
            .target_framework
            .as_deref()
            .unwrap_or("no target framework");
        let name = if project.is_launchable {
            project.assembly_name.blue().bold()
        } else {
            project.assembly_name.normal()
        };

        println!(
            "{} [{}] {} {} {}",
            marker.green().bold(),
            project.index,
            name,
            format!("({}, {})", framework, project.launch_type).dimmed(),
            project.path
        );
    }

    println!(
        "\n{} {} ({:?})",
        "Source files:".bold(),
        result.source_file_count,
        result.size_class
    );

    Ok(())
}
