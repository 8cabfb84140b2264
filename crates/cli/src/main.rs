use std::path::{Path, PathBuf};

use anyhow::Result;
use assetgen_core::asset_manager::{AssetManager, AssetManagerConfig, GenerateOptions};
use assetgen_core::assets::ProgramLaunchType;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

/// assetgen - Run/debug asset generator for .NET workspaces
#[derive(Parser)]
#[command(name = "assetgen")]
#[command(about = "Generate editor build tasks and debug configurations for .NET projects")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Build-information response to read, relative to the current directory
    /// (defaults to workspace-info.json in the workspace root)
    #[arg(short = 'i', long)]
    workspace_info: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects in the workspace
    List,
    /// Generate .vscode/tasks.json and .vscode/launch.json
    Generate {
        /// Index of the startup project (see `list`); defaults to the first executable
        #[arg(short, long)]
        startup: Option<usize>,
        /// Launch configuration kind; derived from the project when omitted
        #[arg(short, long, value_enum)]
        launch_type: Option<LaunchTypeArg>,
        /// Overwrite existing files instead of merging into them
        #[arg(long)]
        force: bool,
        /// Print the documents instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Replay diagnostics push messages (one JSON object per line) and show the visible results
    Diagnostics {
        /// File containing the push messages
        input: PathBuf,
        /// Documents to treat as open in the editor
        #[arg(long)]
        open: Vec<PathBuf>,
        /// Treat the workspace as large regardless of its source-file count
        #[arg(long)]
        large: bool,
    },
    /// Print the JSON schema of .assetgen.yml
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
enum LaunchTypeArg {
    Console,
    Web,
    BlazorStandalone,
    BlazorHosted,
}

impl From<LaunchTypeArg> for ProgramLaunchType {
    fn from(arg: LaunchTypeArg) -> Self {
        match arg {
            LaunchTypeArg::Console => ProgramLaunchType::Console,
            LaunchTypeArg::Web => ProgramLaunchType::Web,
            LaunchTypeArg::BlazorStandalone => ProgramLaunchType::BlazorWebAssemblyStandalone,
            LaunchTypeArg::BlazorHosted => ProgramLaunchType::BlazorWebAssemblyHosted,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_manager(workspace: &Path, workspace_info: Option<&Path>) -> Result<AssetManager> {
    AssetManager::new(AssetManagerConfig {
        workspace_root: workspace.to_path_buf(),
        workspace_info_path: workspace_info.map(Path::to_path_buf),
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize workspace: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let workspace_info = cli.workspace_info.as_deref();

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List => commands::list::execute(&load_manager(&cli.workspace, workspace_info)?),
        Commands::Generate {
            startup,
            launch_type,
            force,
            dry_run,
        } => {
            let manager = load_manager(&cli.workspace, workspace_info)?;
            let options = GenerateOptions {
                startup_project: startup,
                launch_type: launch_type.map(ProgramLaunchType::from),
            };
            commands::generate::execute(&manager, &options, force, dry_run)
        }
        Commands::Diagnostics { input, open, large } => {
            commands::diagnostics::execute(&cli.workspace, workspace_info, &input, &open, large)
                .await
        }
        Commands::Schema => commands::schema::execute(),
    }
}
