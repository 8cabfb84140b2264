//! assetgen Core Library
//!
//! This is the core library for the assetgen tool. It turns the project model reported by a
//! .NET build-information service into editor run/debug assets (tasks.json and launch.json),
//! and reconciles diagnostics pushed by an analysis engine into a per-document view.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`asset_manager`] - High-level interface used by the CLI
//! - [`assets`] - Task and launch configuration generation, and merging into existing files
//! - [`project`] - Adapts the build-information response into a flat project model
//! - [`target_framework`] - Target framework short-name normalization
//! - [`paths`] - `${workspaceFolder}`-anchored path rendering
//! - [`diagnostics`] - Diagnostics reconciliation, tagging and visibility policy
//! - [`configs`] - `.assetgen.yml` parsing
//! - [`results`] - Result types for asset manager operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`AssetManager`], which provides a high-level interface
//! for all workspace operations:
//!
//! ```rust,no_run
//! use assetgen_core::asset_manager::{AssetManager, AssetManagerConfig, GenerateOptions};
//! use std::path::PathBuf;
//!
//! # fn example() -> assetgen_core::types::AssetResult<()> {
//! let manager = AssetManager::new(AssetManagerConfig {
//!     workspace_root: PathBuf::from("."),
//!     workspace_info_path: None,
//! })?;
//!
//! let assets = manager.generate(&GenerateOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod asset_manager;
pub mod assets;
pub mod configs;
pub mod diagnostics;
pub mod paths;
pub mod project;
pub mod results;
pub mod target_framework;
pub mod types;

// Re-export the main types for easier usage
pub use asset_manager::{AssetManager, AssetManagerConfig};
pub use types::{AssetError, AssetResult};
