//! # assetgen protocol
//!
//! Data structures exchanged with the two external services `assetgen` consumes:
//!
//! - the **build-information service**, which answers a workspace query with a
//!   [`WorkspaceInformationResponse`] describing the solution and its projects;
//! - the **analysis engine**, which pushes whole-document diagnostics as
//!   [`DiagnosticMessage`]s.
//!
//! All types mirror the services' PascalCase JSON field names, and every field is
//! optional on the wire: missing values deserialize to their defaults. Nothing in this
//! crate performs I/O or interprets the data; that is left to `assetgen_core`.
//!
//! ```rust
//! use assetgen_protocol::WorkspaceInformationResponse;
//!
//! let json = r#"{
//!     "MsBuild": {
//!         "SolutionPath": "",
//!         "Projects": [{
//!             "Path": "/work/app/app.csproj",
//!             "AssemblyName": "app",
//!             "TargetFrameworks": [{ "ShortName": "net8.0" }],
//!             "IsExe": true
//!         }]
//!     }
//! }"#;
//!
//! let response: WorkspaceInformationResponse = serde_json::from_str(json).unwrap();
//! let projects = response.projects();
//! assert_eq!(projects.len(), 1);
//! assert_eq!(projects[0].assembly_name, "app");
//! ```

pub mod message;
pub mod types;

pub use message::{DiagnosticLocation, DiagnosticMessage, DiagnosticResult};
pub use types::{
    MsBuildProject, MsBuildWorkspaceInformation, TargetFrameworkInfo, WorkspaceFolder,
    WorkspaceInformationResponse,
};
